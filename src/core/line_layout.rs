use serde::{Deserialize, Serialize};

use crate::core::history::validate_values;
use crate::core::{ChartDimensions, SurfaceBounds, ValueScale};
use crate::error::ChartResult;

/// One laid-out line marker.
///
/// `x` is in surface pixels; `y` is the height above the chart baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointDatum {
    pub index: usize,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

impl PointDatum {
    /// Surface-space y (top-left origin) for this point.
    #[must_use]
    pub fn surface_y(self, bounds: SurfaceBounds) -> f64 {
        bounds.baseline_y() - self.y
    }
}

/// Horizontal distance between neighbouring markers.
///
/// `n` points span exactly `chart_width`, so the gap is `width / (n - 1)`.
/// A lone point has no neighbour and keeps the full width.
#[must_use]
pub fn segment_width(count: usize, chart_width: f64) -> f64 {
    if count > 1 {
        chart_width / (count - 1) as f64
    } else {
        chart_width
    }
}

/// Lays out `values` in insertion order as evenly spaced markers whose
/// heights are proportional to the largest value.
///
/// The function is deterministic and side-effect free; every call is a full
/// reflow of the whole history.
pub fn layout_line_points(
    values: &[f64],
    dimensions: ChartDimensions,
    bounds: SurfaceBounds,
) -> ChartResult<Vec<PointDatum>> {
    dimensions.validate()?;
    bounds.validate()?;
    validate_values(values)?;
    if values.is_empty() {
        return Ok(Vec::new());
    }

    let scale = ValueScale::from_values(values, dimensions.height)?;
    let step = segment_width(values.len(), dimensions.width);
    let left = dimensions.centering_offset(bounds);

    Ok(values
        .iter()
        .enumerate()
        .map(|(index, &value)| PointDatum {
            index,
            value,
            x: index as f64 * step + left,
            y: scale.value_to_extent(value),
        })
        .collect())
}
