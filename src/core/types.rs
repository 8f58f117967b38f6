use serde::{Deserialize, Serialize};

use crate::core::geometry::Point;
use crate::error::{ChartError, ChartResult};

/// Measured size of the display area a chart is laid out on.
///
/// Bounds are read from the surface on every layout pass and may change
/// between passes when the host resizes the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceBounds {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub padding: f64,
}

impl SurfaceBounds {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding: 0.0,
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
            && self.padding.is_finite()
            && self.padding >= 0.0
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Surface-space y of the line/bar baseline.
    ///
    /// Sits `padding` above the bottom edge rather than on it, so bars and
    /// markers keep the same inset the pie uses for its radius.
    #[must_use]
    pub fn baseline_y(self) -> f64 {
        self.height - self.padding
    }
}

/// Fixed chart area configured per chart instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
}

impl ChartDimensions {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(ChartError::InvalidData(
                "chart dimensions must be finite".to_owned(),
            ));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ChartError::InvalidData(
                "chart dimensions must be > 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Left offset that centers the chart area horizontally on the surface.
    #[must_use]
    pub fn centering_offset(self, bounds: SurfaceBounds) -> f64 {
        (bounds.width - self.width) / 2.0
    }
}
