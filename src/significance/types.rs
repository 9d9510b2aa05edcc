//----------------------------------------
// significance mod types
//----------------------------------------
use crate::error::CvrErr;
use crate::significance::error::SignificanceErr;
use serde::Serialize;

#[derive(Default, Debug, PartialEq, Eq, Copy, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tails {
    OneTailed,
    #[default]
    TwoTailed,
}

impl TryFrom<u8> for Tails {
    type Error = CvrErr;

    fn try_from(n: u8) -> Result<Tails, CvrErr> {
        match n {
            1 => Ok(Tails::OneTailed),
            2 => Ok(Tails::TwoTailed),
            other => Err(SignificanceErr::UnsupportedTails(other).into()),
        }
    }
}

#[derive(Debug, PartialEq, Copy, Clone, Serialize)]
pub struct SignificanceParams {
    alpha: f64,
    tails: Tails,
}

impl SignificanceParams {
    pub fn new(alpha: f64, tails: Tails) -> Result<SignificanceParams, CvrErr> {
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(SignificanceErr::AlphaOutOfDomain(alpha).into());
        }
        Ok(SignificanceParams { alpha, tails })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn tails(&self) -> Tails {
        self.tails
    }
}

impl Default for SignificanceParams {
    fn default() -> Self {
        SignificanceParams {
            alpha: 0.05,
            tails: Tails::TwoTailed,
        }
    }
}

/// Boundaries of the rejection region on the control distribution.
#[derive(Debug, PartialEq, Copy, Clone, Serialize)]
#[serde(tag = "tails", rename_all = "snake_case")]
pub enum CriticalValues {
    OneTailed { upper: f64 },
    TwoTailed { lower: f64, upper: f64 },
}

impl CriticalValues {
    pub fn boundaries(&self) -> Vec<f64> {
        match *self {
            CriticalValues::OneTailed { upper } => vec![upper],
            CriticalValues::TwoTailed { lower, upper } => vec![lower, upper],
        }
    }

    /// Whether `x` lies at or beyond a critical value.
    pub fn in_rejection_region(&self, x: f64) -> bool {
        match *self {
            CriticalValues::OneTailed { upper } => x >= upper,
            CriticalValues::TwoTailed { lower, upper } => x <= lower || x >= upper,
        }
    }
}
