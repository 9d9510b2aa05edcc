//----------------------------------------
// chart mod
//----------------------------------------
pub mod error;
mod render;
mod svg;
pub mod style;

pub use render::{draw_cvr_chart, format_rate, plot_cvr_distributions};
pub use svg::{render_svg, render_svg_string};
