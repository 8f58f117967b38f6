use serde::{Deserialize, Serialize};

use crate::core::history::validate_values;
use crate::core::{ChartDimensions, SurfaceBounds, ValueScale};
use crate::error::ChartResult;

/// One laid-out bar. `height` is measured up from the chart baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarDatum {
    pub index: usize,
    pub value: f64,
    pub x: f64,
    pub width: f64,
    pub height: f64,
}

impl BarDatum {
    /// Surface-space y of the bar's top edge.
    #[must_use]
    pub fn top_y(self, bounds: SurfaceBounds) -> f64 {
        bounds.baseline_y() - self.height
    }
}

/// Lays out `values` left to right as equal-width bars filling the chart
/// width, scaled against the largest value.
pub fn layout_bars(
    values: &[f64],
    dimensions: ChartDimensions,
    bounds: SurfaceBounds,
) -> ChartResult<Vec<BarDatum>> {
    dimensions.validate()?;
    bounds.validate()?;
    validate_values(values)?;
    if values.is_empty() {
        return Ok(Vec::new());
    }

    let scale = ValueScale::from_values(values, dimensions.height)?;
    let width = dimensions.width / values.len() as f64;
    let left = dimensions.centering_offset(bounds);

    Ok(values
        .iter()
        .enumerate()
        .map(|(index, &value)| BarDatum {
            index,
            value,
            x: left + index as f64 * width,
            width,
            height: scale.value_to_extent(value),
        })
        .collect())
}
