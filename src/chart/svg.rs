use crate::chart::{render::draw_cvr_chart, style::ChartStyle};
use crate::compute::types::CvrComparison;
use crate::error::CvrErr;
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

/// Writes the chart for `comparison` to an SVG file at `path`.
pub fn render_svg(path: &Path, comparison: &CvrComparison, style: &ChartStyle) -> Result<(), CvrErr> {
    {
        let root = SVGBackend::new(path, (style.width, style.height)).into_drawing_area();
        draw_cvr_chart(&root, comparison, style)?;
    }
    info!(path = %path.display(), "wrote chart");
    Ok(())
}

/// Renders the chart for `comparison` into an SVG document held in memory.
pub fn render_svg_string(comparison: &CvrComparison, style: &ChartStyle) -> Result<String, CvrErr> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (style.width, style.height)).into_drawing_area();
        draw_cvr_chart(&root, comparison, style)?;
    }
    Ok(svg)
}
