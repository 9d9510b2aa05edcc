//----------------------------------------
// compute mod types
//----------------------------------------
use crate::normal::curve::DensityCurve;
use crate::sample::types::ArmStatistics;
use crate::significance::types::{CriticalValues, SignificanceParams};
use serde::Serialize;

/// Everything a conversion-rate chart shows, computed up front.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CvrComparison {
    pub control: ArmStatistics,
    pub experimental: ArmStatistics,
    pub params: SignificanceParams,
    pub critical_values: CriticalValues,
    #[serde(skip)]
    pub control_curve: DensityCurve,
    #[serde(skip)]
    pub experimental_curve: DensityCurve,
}

impl CvrComparison {
    /// Union of both curves' x ranges.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        match (self.control_curve.x_range(), self.experimental_curve.x_range()) {
            (Some((c_lo, c_hi)), Some((e_lo, e_hi))) => Some((c_lo.min(e_lo), c_hi.max(e_hi))),
            (Some(range), None) | (None, Some(range)) => Some(range),
            (None, None) => None,
        }
    }

    /// Larger of the two curve peaks.
    pub fn peak_density(&self) -> Option<f64> {
        match (self.control_curve.peak(), self.experimental_curve.peak()) {
            (Some(c), Some(e)) => Some(c.max(e)),
            (peak, None) | (None, peak) => peak,
        }
    }
}
