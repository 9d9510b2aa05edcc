//----------------------------------------
// significance mod
//----------------------------------------
pub mod critical_values;
pub mod error;
pub mod types;
