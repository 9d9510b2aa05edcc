//----------------------------------------
// normal mod
//----------------------------------------
pub mod curve;
pub mod error;
pub mod normal_dist;
