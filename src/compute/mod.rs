//----------------------------------------
// compute mod
//----------------------------------------
mod compare;
pub mod types;

pub use compare::{compare_cvr_distributions, compare_cvr_distributions_on_grid};
