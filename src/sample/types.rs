//----------------------------------------
// sample mod types
//----------------------------------------
use serde::Serialize;
use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arm {
    Control,
    Experimental,
}

impl fmt::Display for Arm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arm::Control => write!(f, "control"),
            Arm::Experimental => write!(f, "experimental"),
        }
    }
}

/// Observed conversion statistics for one arm of the test.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct ArmStatistics {
    pub arm: Arm,
    pub trials: usize,
    pub rate: f64,
    pub std_error: f64,
}
