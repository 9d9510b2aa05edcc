//----------------------------------------
// significance errors
//----------------------------------------
use crate::error::CvrErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignificanceErr {
    #[error("alpha should be in (0, 1); got {0}")]
    AlphaOutOfDomain(f64),
    #[error("tails should be 1 (one-tailed) or 2 (two-tailed); got {0}")]
    UnsupportedTails(u8),
}

impl From<SignificanceErr> for CvrErr {
    fn from(err: SignificanceErr) -> CvrErr {
        CvrErr::Significance(err)
    }
}
