use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::geometry::{Point, rotate_about};
use crate::core::history::validate_values;
use crate::core::scale::round_to_hundredths;
use crate::core::SurfaceBounds;
use crate::error::{ChartError, ChartResult};

/// Largest drawable sector span; a full 360 degree arc would start and end
/// on the same point and vanish.
pub const MAX_SECTOR_SPAN_DEGREES: f64 = 359.999;

/// One pie sector in sorted (ascending value) order.
///
/// `index` is the value's insertion index in the history, so per-value
/// attributes such as color survive the re-sort.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorDatum {
    pub index: usize,
    pub value: f64,
    pub degree_span: f64,
    pub angular_offset: f64,
}

impl SectorDatum {
    #[must_use]
    pub fn end_angle(self) -> f64 {
        self.angular_offset + self.degree_span
    }
}

/// Computes sector spans and cumulative offsets for `values`.
///
/// Sectors are sorted ascending by value (ties keep insertion order). Each
/// span is the value's share of the total times 360, rounded to hundredths,
/// then clamped to [`MAX_SECTOR_SPAN_DEGREES`]. Offsets accumulate clockwise
/// from zero.
pub fn layout_pie_sectors(values: &[f64]) -> ChartResult<Vec<SectorDatum>> {
    validate_values(values)?;
    if values.is_empty() {
        return Ok(Vec::new());
    }

    let mut ordered: Vec<(usize, f64)> = values.iter().copied().enumerate().collect();
    ordered.sort_by_key(|&(_, value)| OrderedFloat(value));

    let max = ordered.last().map_or(0.0, |&(_, value)| value);
    if max == 0.0 {
        return Err(ChartError::DegenerateTotal {
            count: values.len(),
        });
    }
    // Shares are taken relative to the maximum so the total neither overflows
    // near f64::MAX nor underflows for subnormal values. Summed in sorted
    // order so any permutation of the same values yields bit-identical spans.
    let total: f64 = ordered.iter().map(|&(_, value)| value / max).sum();

    let mut sectors = Vec::with_capacity(ordered.len());
    let mut angular_offset = 0.0;
    for (index, value) in ordered {
        let share = value / max / total;
        let degree_span = round_to_hundredths(share * 360.0)?.min(MAX_SECTOR_SPAN_DEGREES);
        sectors.push(SectorDatum {
            index,
            value,
            degree_span,
            angular_offset,
        });
        angular_offset += degree_span;
    }

    Ok(sectors)
}

/// One piece of a wedge outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    Arc {
        to: Point,
        radius: f64,
        large_arc: bool,
        clockwise: bool,
    },
    Line {
        to: Point,
    },
}

/// Closed, fillable outline of one pie sector in surface pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WedgeGeometry {
    pub center: Point,
    pub radius: f64,
    pub start: Point,
    pub end: Point,
    /// Clockwise rotation from the bottom of the circle, in degrees.
    pub start_angle: f64,
    pub degree_span: f64,
    pub large_arc: bool,
    /// Arc start->end, line end->center, line center->start.
    pub outline: SmallVec<[PathSegment; 3]>,
}

impl WedgeGeometry {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.center.is_finite() || !self.start.is_finite() || !self.end.is_finite() {
            return Err(ChartError::InvalidData(
                "wedge points must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "wedge radius must be finite and > 0".to_owned(),
            ));
        }
        if !(0.0..360.0).contains(&self.degree_span) {
            return Err(ChartError::InvalidData(
                "wedge span must be in [0, 360)".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Pie radius for a surface: half its height minus padding.
pub fn pie_radius(bounds: SurfaceBounds) -> ChartResult<f64> {
    bounds.validate()?;
    let radius = bounds.height / 2.0 - bounds.padding;
    if radius <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "pie radius must be > 0 (height={}, padding={})",
            bounds.height, bounds.padding
        )));
    }
    Ok(radius)
}

/// Builds the wedge outline for `sector`, centered on the surface.
pub fn wedge_geometry(sector: SectorDatum, bounds: SurfaceBounds) -> ChartResult<WedgeGeometry> {
    let radius = pie_radius(bounds)?;
    let degree_span = sector.degree_span.min(MAX_SECTOR_SPAN_DEGREES);
    let center = bounds.center();
    let bottom = Point::new(center.x, center.y + radius);

    let start = rotate_about(bottom, center, sector.angular_offset);
    let end = rotate_about(bottom, center, sector.angular_offset + degree_span);
    let large_arc = degree_span > 180.0;

    Ok(WedgeGeometry {
        center,
        radius,
        start,
        end,
        start_angle: sector.angular_offset,
        degree_span,
        large_arc,
        outline: smallvec![
            PathSegment::Arc {
                to: end,
                radius,
                large_arc,
                clockwise: true,
            },
            PathSegment::Line { to: center },
            PathSegment::Line { to: start },
        ],
    })
}
