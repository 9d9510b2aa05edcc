//----------------------------------------
// sample mod
//----------------------------------------
pub mod arm_stats;
pub mod error;
pub mod parse;
pub mod simulate;
pub mod types;
