//----------------------------------------
// Crate error type
//----------------------------------------
use crate::chart::error::RenderErr;
use crate::normal::error::NormalDistErr;
use crate::sample::error::SampleErr;
use crate::significance::error::SignificanceErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CvrErr {
    #[error("while reading outcome sample: {0}")]
    Sample(SampleErr),
    #[error("while evaluating normal distribution: {0}")]
    NormalDist(NormalDistErr),
    #[error("while resolving significance parameters: {0}")]
    Significance(SignificanceErr),
    #[error("while rendering chart: {0}")]
    Render(RenderErr),
}

impl CvrErr {
    /// True when an empty outcome sample was supplied for either arm.
    pub fn is_empty_sample(&self) -> bool {
        matches!(self, CvrErr::Sample(SampleErr::EmptySample { .. }))
    }

    /// True for probability arguments outside the open interval (0, 1),
    /// whether caught while validating alpha or inside a quantile call.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            CvrErr::Significance(SignificanceErr::AlphaOutOfDomain(_))
                | CvrErr::NormalDist(NormalDistErr::QuantileOutOfBounds(_))
        )
    }
}
