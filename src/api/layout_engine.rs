use serde::{Deserialize, Serialize};

use crate::core::{BarDatum, PointDatum, SectorDatum, SurfaceBounds};
use crate::error::ChartResult;
use crate::render::RenderFrame;

use super::{ChartConfig, ChartKind};

/// Derived geometry for one layout pass, produced fresh every time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum ChartLayout {
    Line(Vec<PointDatum>),
    Pie(Vec<SectorDatum>),
    Bar(Vec<BarDatum>),
}

impl ChartLayout {
    #[must_use]
    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Line(_) => ChartKind::Line,
            Self::Pie(_) => ChartKind::Pie,
            Self::Bar(_) => ChartKind::Bar,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Line(points) => points.len(),
            Self::Pie(sectors) => sectors.len(),
            Self::Bar(bars) => bars.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Contract shared by the line, pie and bar engines.
///
/// Both methods are pure functions of the value list, config and bounds, so
/// any pass can be recomputed at will (full reflow).
pub trait LayoutEngine {
    fn kind(&self) -> ChartKind;

    fn layout(
        &self,
        values: &[f64],
        config: &ChartConfig,
        bounds: SurfaceBounds,
    ) -> ChartResult<ChartLayout>;

    fn build_frame(
        &self,
        values: &[f64],
        config: &ChartConfig,
        bounds: SurfaceBounds,
    ) -> ChartResult<RenderFrame>;
}

/// Literal value text used by markers, bars and legend rows.
#[must_use]
pub fn format_value(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::format_value;

    #[test]
    fn whole_values_render_without_fraction() {
        assert_eq!(format_value(42.0), "42");
        assert_eq!(format_value(12.5), "12.5");
        assert_eq!(format_value(0.0), "0");
    }
}
