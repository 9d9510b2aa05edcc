use crate::error::CvrErr;
use crate::sample::{
    error::SampleErr,
    types::{Arm, ArmStatistics},
};
use tracing::warn;

/// Fraction of successes in `sample`. Values are averaged as given; nothing
/// checks that they are 0 or 1.
pub fn conversion_rate<T>(arm: Arm, sample: &[T]) -> Result<f64, CvrErr>
where
    T: Copy + Into<f64>,
{
    if sample.is_empty() {
        return Err(SampleErr::EmptySample { arm }.into());
    }
    let mut n_non_binary = 0usize;
    let total: f64 = sample
        .iter()
        .map(|&v| {
            let v: f64 = v.into();
            if v != 0.0 && v != 1.0 {
                n_non_binary += 1;
            }
            v
        })
        .sum();
    if n_non_binary > 0 {
        warn!(%arm, n_non_binary, "sample contains values other than 0 and 1");
    }
    Ok(total / sample.len() as f64)
}

/// Fails on the first empty arm, control before experimental.
pub fn ensure_non_empty<C, E>(control: &[C], experimental: &[E]) -> Result<(), CvrErr> {
    if control.is_empty() {
        return Err(SampleErr::EmptySample { arm: Arm::Control }.into());
    }
    if experimental.is_empty() {
        return Err(SampleErr::EmptySample {
            arm: Arm::Experimental,
        }
        .into());
    }
    Ok(())
}

/// Control arm statistics. The variance term uses the control rate as the
/// shared proportion, scaled by the sample sizes of both arms:
///     se_c = sqrt((1/n_c + 1/n_e) * p_c * (1 - p_c))
pub fn control_statistics<C, E>(
    control: &[C],
    experimental: &[E],
) -> Result<ArmStatistics, CvrErr>
where
    C: Copy + Into<f64>,
{
    ensure_non_empty(control, experimental)?;
    let rate = conversion_rate(Arm::Control, control)?;
    let n_c = control.len() as f64;
    let n_e = experimental.len() as f64;
    let std_error = ((1. / n_c + 1. / n_e) * rate * (1. - rate)).sqrt();
    Ok(ArmStatistics {
        arm: Arm::Control,
        trials: control.len(),
        rate,
        std_error,
    })
}

/// Experimental arm statistics from its own rate and sample size:
///     se_e = sqrt(p_e * (1 - p_e) / n_e)
pub fn experimental_statistics<T>(experimental: &[T]) -> Result<ArmStatistics, CvrErr>
where
    T: Copy + Into<f64>,
{
    let rate = conversion_rate(Arm::Experimental, experimental)?;
    let n_e = experimental.len() as f64;
    let std_error = (rate * (1. - rate) / n_e).sqrt();
    Ok(ArmStatistics {
        arm: Arm::Experimental,
        trials: experimental.len(),
        rate,
        std_error,
    })
}
