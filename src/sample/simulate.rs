use crate::error::CvrErr;
use crate::sample::{error::SampleErr, types::Arm};
use rand::{SeedableRng, distributions::Bernoulli, distributions::Distribution, rngs};

/// Draws `trials` seeded Bernoulli outcomes with success probability
/// `true_rate`.
pub fn simulate_arm(
    arm: Arm,
    trials: usize,
    true_rate: f64,
    seed: u64,
) -> Result<Vec<u8>, CvrErr> {
    if trials == 0 {
        return Err(SampleErr::EmptySample { arm }.into());
    }
    let outcome_dist =
        Bernoulli::new(true_rate).map_err(|_| SampleErr::InvalidRate(true_rate))?;
    let rng = rngs::StdRng::seed_from_u64(seed);
    Ok(outcome_dist
        .sample_iter(rng)
        .take(trials)
        .map(u8::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sample() {
        let a = simulate_arm(Arm::Control, 200, 0.3, 24601).unwrap();
        let b = simulate_arm(Arm::Control, 200, 0.3, 24601).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 200);
        assert!(a.iter().all(|&v| v == 0 || v == 1));
    }

    #[test]
    fn rate_near_truth() {
        let sample = simulate_arm(Arm::Control, 20_000, 0.2, 7).unwrap();
        let rate = sample.iter().map(|&v| v as f64).sum::<f64>() / sample.len() as f64;
        assert!((rate - 0.2).abs() < 0.02);
    }

    #[test]
    fn bad_rate_err() {
        if let Err(e) = simulate_arm(Arm::Experimental, 10, 1.5, 1) {
            assert_eq!(
                String::from(
                    "while reading outcome sample: true conversion rate \
                    should be in [0, 1]; got 1.5"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn zero_trials_err() {
        assert!(simulate_arm(Arm::Control, 0, 0.5, 1).unwrap_err().is_empty_sample());
    }
}
