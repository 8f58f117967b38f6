use crate::core::{SurfaceBounds, layout_bars};
use crate::error::ChartResult;
use crate::render::{RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::layout_engine::format_value;
use super::{ChartConfig, ChartKind, ChartLayout, LayoutEngine};

const LABEL_GAP_PX: f64 = 2.0;

/// Equal-width bars filling the chart width, scaled to the running max.
#[derive(Debug, Clone, Copy, Default)]
pub struct BarLayoutEngine;

impl LayoutEngine for BarLayoutEngine {
    fn kind(&self) -> ChartKind {
        ChartKind::Bar
    }

    fn layout(
        &self,
        values: &[f64],
        config: &ChartConfig,
        bounds: SurfaceBounds,
    ) -> ChartResult<ChartLayout> {
        layout_bars(values, config.dimensions(), bounds).map(ChartLayout::Bar)
    }

    fn build_frame(
        &self,
        values: &[f64],
        config: &ChartConfig,
        bounds: SurfaceBounds,
    ) -> ChartResult<RenderFrame> {
        let bars = layout_bars(values, config.dimensions(), bounds)?;
        let style = &config.style;
        let mut frame = RenderFrame::new(bounds);

        for bar in bars {
            let top = bar.top_y(bounds);
            frame.push(
                RectPrimitive::new(
                    bar.x,
                    top,
                    bar.width,
                    bar.height,
                    style.palette.color_at(bar.index),
                )
                .with_border(style.bar_border_width, style.outline_color)
                .into(),
            );
            frame.push(
                TextPrimitive::new(
                    format_value(bar.value),
                    bar.x + bar.width / 2.0,
                    top - LABEL_GAP_PX - style.label_font_size_px,
                    style.label_font_size_px,
                    style.label_color,
                    TextHAlign::Center,
                )
                .into(),
            );
        }

        Ok(frame)
    }
}
