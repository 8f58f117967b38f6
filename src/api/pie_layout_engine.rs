use crate::core::{SectorDatum, SurfaceBounds, layout_pie_sectors, wedge_geometry};
use crate::error::ChartResult;
use crate::render::{RectPrimitive, RenderFrame, TextHAlign, TextPrimitive, WedgePrimitive};

use super::layout_engine::format_value;
use super::{ChartConfig, ChartKind, ChartLayout, LayoutEngine};

/// Arc wedges sorted ascending by value plus a stacked legend.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieLayoutEngine;

impl LayoutEngine for PieLayoutEngine {
    fn kind(&self) -> ChartKind {
        ChartKind::Pie
    }

    fn layout(
        &self,
        values: &[f64],
        _config: &ChartConfig,
        _bounds: SurfaceBounds,
    ) -> ChartResult<ChartLayout> {
        layout_pie_sectors(values).map(ChartLayout::Pie)
    }

    fn build_frame(
        &self,
        values: &[f64],
        config: &ChartConfig,
        bounds: SurfaceBounds,
    ) -> ChartResult<RenderFrame> {
        let sectors = layout_pie_sectors(values)?;
        let mut frame = RenderFrame::new(bounds);
        let style = &config.style;

        for (row, sector) in sectors.iter().enumerate() {
            let fill_color = style.palette.color_at(sector.index);
            frame.push(
                WedgePrimitive {
                    geometry: wedge_geometry(*sector, bounds)?,
                    fill_color,
                    stroke_color: style.outline_color,
                    stroke_width: style.wedge_stroke_width,
                }
                .into(),
            );
            append_legend_row(&mut frame, *sector, row, config);
        }

        Ok(frame)
    }
}

/// Legend rows stack top-down in sector order: swatch, then the value.
fn append_legend_row(frame: &mut RenderFrame, sector: SectorDatum, row: usize, config: &ChartConfig) {
    let style = &config.style;
    let top = style.legend_row_spacing_px * row as f64;
    let swatch = RectPrimitive::new(
        style.legend_left_px,
        top,
        style.legend_swatch_width_px,
        style.legend_swatch_height_px,
        style.palette.color_at(sector.index),
    )
    .with_border(style.legend_swatch_border_width, style.outline_color);
    frame.push(swatch.into());

    frame.push(
        TextPrimitive::new(
            format_value(sector.value),
            style.legend_left_px + style.legend_swatch_width_px + style.legend_label_gap_px,
            top,
            style.label_font_size_px,
            style.label_color,
            TextHAlign::Left,
        )
        .into(),
    );
}
