use crate::error::CvrErr;
use crate::normal::normal_dist::NormalDist;
use crate::significance::types::{CriticalValues, SignificanceParams, Tails};

/// Critical values for `params` on the control distribution.
pub fn critical_values(
    control: &NormalDist,
    params: &SignificanceParams,
) -> Result<CriticalValues, CvrErr> {
    let alpha = params.alpha();
    match params.tails() {
        Tails::TwoTailed => Ok(CriticalValues::TwoTailed {
            lower: control.quantile(alpha / 2.)?,
            upper: control.quantile(1. - alpha / 2.)?,
        }),
        Tails::OneTailed => Ok(CriticalValues::OneTailed {
            upper: control.quantile(1. - alpha)?,
        }),
    }
}
