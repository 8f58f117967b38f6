use crate::core::{Point, PointDatum, SurfaceBounds, layout_line_points};
use crate::error::ChartResult;
use crate::render::{
    MarkerPrimitive, PolylinePrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::layout_engine::format_value;
use super::{ChartConfig, ChartKind, ChartLayout, LayoutEngine};

/// Evenly spaced markers joined by a polyline, scaled to the running max.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineLayoutEngine;

impl LayoutEngine for LineLayoutEngine {
    fn kind(&self) -> ChartKind {
        ChartKind::Line
    }

    fn layout(
        &self,
        values: &[f64],
        config: &ChartConfig,
        bounds: SurfaceBounds,
    ) -> ChartResult<ChartLayout> {
        layout_line_points(values, config.dimensions(), bounds).map(ChartLayout::Line)
    }

    fn build_frame(
        &self,
        values: &[f64],
        config: &ChartConfig,
        bounds: SurfaceBounds,
    ) -> ChartResult<RenderFrame> {
        let points = layout_line_points(values, config.dimensions(), bounds)?;
        let mut frame = RenderFrame::new(bounds);
        if points.is_empty() {
            return Ok(frame);
        }

        let style = &config.style;
        // The polyline goes first so markers are drawn over it.
        frame.push(
            PolylinePrimitive {
                points: points
                    .iter()
                    .map(|point| Point::new(point.x, point.surface_y(bounds)))
                    .collect(),
                stroke_width: style.line_thickness,
                color: style.line_color,
            }
            .into(),
        );

        for point in &points {
            frame.push(marker_for(*point, config, bounds).into());
            frame.push(label_for(*point, config, bounds).into());
        }

        Ok(frame)
    }
}

fn marker_for(point: PointDatum, config: &ChartConfig, bounds: SurfaceBounds) -> MarkerPrimitive {
    let style = &config.style;
    MarkerPrimitive {
        center: Point::new(point.x, point.surface_y(bounds)),
        diameter: style.marker_diameter,
        fill_color: style.palette.color_at(point.index),
        stroke_color: style.outline_color,
        stroke_width: style.marker_stroke_width,
    }
}

fn label_for(point: PointDatum, config: &ChartConfig, bounds: SurfaceBounds) -> TextPrimitive {
    let style = &config.style;
    let bottom = point.surface_y(bounds) - style.label_offset_px;
    TextPrimitive::new(
        format_value(point.value),
        point.x - style.marker_diameter / 2.0,
        bottom - style.label_font_size_px,
        style.label_font_size_px,
        style.label_color,
        TextHAlign::Left,
    )
}
