use crate::compute::types::CvrComparison;
use crate::error::CvrErr;
use crate::normal::{
    curve::{CurveGrid, DensityCurve},
    normal_dist::NormalDist,
};
use crate::sample::arm_stats::{control_statistics, experimental_statistics};
use crate::significance::{critical_values::critical_values, types::SignificanceParams};
use tracing::debug;

/// Computes arm statistics, density curves and critical values for a
/// two-arm comparison on the default grid.
pub fn compare_cvr_distributions<C, E>(
    control: &[C],
    experimental: &[E],
    params: &SignificanceParams,
) -> Result<CvrComparison, CvrErr>
where
    C: Copy + Into<f64>,
    E: Copy + Into<f64>,
{
    compare_cvr_distributions_on_grid(control, experimental, params, CurveGrid::default())
}

pub fn compare_cvr_distributions_on_grid<C, E>(
    control: &[C],
    experimental: &[E],
    params: &SignificanceParams,
    grid: CurveGrid,
) -> Result<CvrComparison, CvrErr>
where
    C: Copy + Into<f64>,
    E: Copy + Into<f64>,
{
    //----------------------------------------
    // Arm statistics
    let control_stats = control_statistics(control, experimental)?;
    let experimental_stats = experimental_statistics(experimental)?;

    //----------------------------------------
    // Sampling distributions
    let control_dist = NormalDist::new(control_stats.rate, control_stats.std_error)?;
    let experimental_dist = NormalDist::new(experimental_stats.rate, experimental_stats.std_error)?;
    let control_curve = DensityCurve::around(&control_dist, grid);
    let experimental_curve = DensityCurve::around(&experimental_dist, grid);

    //----------------------------------------
    // Rejection region on the control distribution
    let critical_values = critical_values(&control_dist, params)?;

    debug!(
        control_rate = control_stats.rate,
        control_se = control_stats.std_error,
        experimental_rate = experimental_stats.rate,
        experimental_se = experimental_stats.std_error,
        alpha = params.alpha(),
        ?critical_values,
        "computed conversion rate distributions"
    );

    Ok(CvrComparison {
        control: control_stats,
        experimental: experimental_stats,
        params: *params,
        critical_values,
        control_curve,
        experimental_curve,
    })
}
