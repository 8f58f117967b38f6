use serde::{Deserialize, Serialize};

use crate::core::ChartDimensions;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, ColorPalette};

/// Visual constants shared by all chart kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub marker_diameter: f64,
    pub marker_stroke_width: f64,
    pub line_thickness: f64,
    pub line_color: Color,
    pub outline_color: Color,
    pub wedge_stroke_width: f64,
    pub bar_border_width: f64,
    pub label_font_size_px: f64,
    pub label_color: Color,
    /// Gap between a line marker's center and the bottom of its label.
    pub label_offset_px: f64,
    pub legend_left_px: f64,
    pub legend_row_spacing_px: f64,
    pub legend_swatch_width_px: f64,
    pub legend_swatch_height_px: f64,
    pub legend_swatch_border_width: f64,
    pub legend_label_gap_px: f64,
    pub palette: ColorPalette,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            marker_diameter: 20.0,
            marker_stroke_width: 2.0,
            line_thickness: 4.0,
            line_color: Color::BLUE_VIOLET,
            outline_color: Color::WHITE,
            wedge_stroke_width: 5.0,
            bar_border_width: 1.0,
            label_font_size_px: 12.0,
            label_color: Color::BLACK,
            label_offset_px: 10.0,
            legend_left_px: 10.0,
            legend_row_spacing_px: 20.0,
            legend_swatch_width_px: 16.0,
            legend_swatch_height_px: 12.0,
            legend_swatch_border_width: 1.0,
            legend_label_gap_px: 4.0,
            palette: ColorPalette::default(),
        }
    }
}

impl ChartStyle {
    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("marker_diameter", self.marker_diameter),
            ("line_thickness", self.line_thickness),
            ("label_font_size_px", self.label_font_size_px),
            ("legend_swatch_width_px", self.legend_swatch_width_px),
            ("legend_swatch_height_px", self.legend_swatch_height_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("marker_stroke_width", self.marker_stroke_width),
            ("wedge_stroke_width", self.wedge_stroke_width),
            ("bar_border_width", self.bar_border_width),
            ("label_offset_px", self.label_offset_px),
            ("legend_left_px", self.legend_left_px),
            ("legend_row_spacing_px", self.legend_row_spacing_px),
            ("legend_swatch_border_width", self.legend_swatch_border_width),
            ("legend_label_gap_px", self.legend_label_gap_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style `{name}` must be finite and >= 0"
                )));
            }
        }
        self.line_color.validate()?;
        self.outline_color.validate()?;
        self.label_color.validate()?;
        self.palette.validate()
    }
}

/// Per-chart configuration, fixed at construction.
///
/// This type is serializable so hosts can persist chart setup as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub chart_width: f64,
    pub chart_height: f64,
    #[serde(default = "default_padding")]
    pub padding: f64,
    #[serde(default)]
    pub style: ChartStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new(600.0, 300.0)
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new(chart_width: f64, chart_height: f64) -> Self {
        Self {
            chart_width,
            chart_height,
            padding: default_padding(),
            style: ChartStyle::default(),
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn dimensions(&self) -> ChartDimensions {
        ChartDimensions::new(self.chart_width, self.chart_height)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.dimensions().validate()?;
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ChartError::InvalidData(
                "padding must be finite and >= 0".to_owned(),
            ));
        }
        self.style.validate()
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }
}

fn default_padding() -> f64 {
    20.0
}
