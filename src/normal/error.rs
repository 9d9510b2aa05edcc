//----------------------------------------
// normal distribution errors
//----------------------------------------
use crate::error::CvrErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalDistErr {
    #[error("arguments to quantile function should be in (0, 1); got {0}")]
    QuantileOutOfBounds(f64),
    #[error("standard deviation should be non-negative; got {0}")]
    NegativeStdDev(f64),
}

impl From<NormalDistErr> for CvrErr {
    fn from(err: NormalDistErr) -> CvrErr {
        CvrErr::NormalDist(err)
    }
}
