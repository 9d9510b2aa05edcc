//----------------------------------------
// sample errors
//----------------------------------------
use crate::error::CvrErr;
use crate::sample::types::Arm;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SampleErr {
    #[error("{arm} sample is empty")]
    EmptySample { arm: Arm },
    #[error("true conversion rate should be in [0, 1]; got {0}")]
    InvalidRate(f64),
    #[error("{arm} sample, line {line}: could not parse `{token}` as a number")]
    BadToken {
        arm: Arm,
        line: usize,
        token: String,
    },
}

impl From<SampleErr> for CvrErr {
    fn from(err: SampleErr) -> CvrErr {
        CvrErr::Sample(err)
    }
}
