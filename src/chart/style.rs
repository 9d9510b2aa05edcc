//----------------------------------------
// chart style configuration
//----------------------------------------
use crate::chart::error::RenderErr;
use crate::error::CvrErr;
use plotters::style::RGBColor;
use serde::Deserialize;
use std::path::Path;

/// Visual settings for a conversion-rate chart. Every field has a default,
/// so a style file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub font_family: String,
    pub title_font_size: u32,
    pub annotation_font_size: u32,
    pub legend_font_size: u32,
    pub control_color: [u8; 3],
    pub experimental_color: [u8; 3],
    pub marker_color: [u8; 3],
    pub tail_fill_color: [u8; 3],
    pub tail_fill_opacity: f64,
    pub point_radius: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        ChartStyle {
            width: 1200,
            height: 600,
            title: String::from("CVR: experimental vs control"),
            font_family: String::from("sans-serif"),
            title_font_size: 22,
            annotation_font_size: 12,
            legend_font_size: 12,
            control_color: [128, 128, 128],
            experimental_color: [0, 128, 0],
            marker_color: [128, 128, 128],
            tail_fill_color: [0, 128, 0],
            tail_fill_opacity: 0.25,
            point_radius: 4,
        }
    }
}

impl ChartStyle {
    pub fn from_json_file(path: &Path) -> Result<ChartStyle, CvrErr> {
        let style_err = |msg: String| RenderErr::Style {
            path: path.to_path_buf(),
            msg,
        };
        let text = std::fs::read_to_string(path).map_err(|e| style_err(e.to_string()))?;
        let style = serde_json::from_str(&text).map_err(|e| style_err(e.to_string()))?;
        Ok(style)
    }

    pub(crate) fn control(&self) -> RGBColor {
        rgb(self.control_color)
    }

    pub(crate) fn experimental(&self) -> RGBColor {
        rgb(self.experimental_color)
    }

    pub(crate) fn marker(&self) -> RGBColor {
        rgb(self.marker_color)
    }

    pub(crate) fn tail_fill(&self) -> RGBColor {
        rgb(self.tail_fill_color)
    }
}

fn rgb([r, g, b]: [u8; 3]) -> RGBColor {
    RGBColor(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_style_keeps_defaults() {
        let style: ChartStyle =
            serde_json::from_str(r#"{"width": 800, "title": "Checkout test"}"#).unwrap();
        assert_eq!(style.width, 800);
        assert_eq!(style.title, "Checkout test");
        assert_eq!(style.height, 600);
        assert_eq!(style.experimental_color, [0, 128, 0]);
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(serde_json::from_str::<ChartStyle>(r#"{"colour": [1, 2, 3]}"#).is_err());
    }

    #[test]
    fn missing_file_err() {
        let err = ChartStyle::from_json_file(Path::new("/nonexistent/style.json")).unwrap_err();
        assert!(matches!(err, CvrErr::Render(RenderErr::Style { .. })));
    }
}
