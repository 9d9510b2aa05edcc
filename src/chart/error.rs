//----------------------------------------
// chart errors
//----------------------------------------
use crate::error::CvrErr;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderErr {
    #[error("drawing backend failed: {0}")]
    Drawing(String),
    #[error("axis range is not finite (x: {x_lo}..{x_hi})")]
    NonFiniteRange { x_lo: f64, x_hi: f64 },
    #[error("could not load chart style from {path:?}: {msg}")]
    Style { path: PathBuf, msg: String },
}

impl From<RenderErr> for CvrErr {
    fn from(err: RenderErr) -> CvrErr {
        CvrErr::Render(err)
    }
}

pub(crate) fn drawing_err<E: std::error::Error>(err: E) -> CvrErr {
    RenderErr::Drawing(err.to_string()).into()
}
