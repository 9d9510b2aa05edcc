//----------------------------------------
// Root lib
//----------------------------------------
//! Charts for two-arm A/B tests on binary outcomes. Each arm's conversion
//! rate is modelled by its normal-approximation sampling distribution; the
//! chart overlays both curves, shades the significance region(s) of the
//! control distribution and annotates the observed rates.
//!
//! Computation ([`compute::compare_cvr_distributions`]) is separate from
//! drawing ([`chart::draw_cvr_chart`]), and drawing targets whatever
//! `plotters` drawing area the caller hands in.

/// Chart style and rendering
pub mod chart;
/// This module houses the public API for comparing two arms
pub mod compute;
/// This module contains error types
pub mod error;
pub mod normal;
pub mod sample;
pub mod significance;

pub use chart::{draw_cvr_chart, plot_cvr_distributions, style::ChartStyle};
pub use compute::{compare_cvr_distributions, types::CvrComparison};
pub use error::CvrErr;
pub use sample::types::{Arm, ArmStatistics};
pub use significance::types::{CriticalValues, SignificanceParams, Tails};
