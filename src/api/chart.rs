use tracing::{debug, trace, warn};

use crate::core::{ScalarHistory, SurfaceBounds, validate_value};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Surface};

use super::{ChartConfig, ChartKind, ChartLayout, LayoutEngine};

/// One chart instance bound to a drawing surface.
///
/// `Chart` owns the value history and recomputes the whole layout from it on
/// every mutation. The surface is only measured and written to.
pub struct Chart<S: Surface> {
    surface: S,
    kind: ChartKind,
    config: ChartConfig,
    history: ScalarHistory,
}

impl<S: Surface> Chart<S> {
    pub fn new(surface: S, kind: ChartKind, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        debug!(%kind, chart_width = config.chart_width, chart_height = config.chart_height, "create chart");
        Ok(Self {
            surface,
            kind,
            config,
            history: ScalarHistory::new(),
        })
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn history(&self) -> &ScalarHistory {
        &self.history
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        self.history.values()
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    #[must_use]
    pub fn engine(&self) -> &'static dyn LayoutEngine {
        self.kind.engine()
    }

    /// Surface bounds as seen by layout: measured size, with the chart's
    /// padding added on top of any inset the surface reports.
    pub fn layout_bounds(&self) -> ChartResult<SurfaceBounds> {
        let measured = self.surface.bounds();
        let bounds = measured.with_padding(measured.padding + self.config.padding);
        bounds.validate()?;
        Ok(bounds)
    }

    /// Appends `value` and re-renders the whole chart.
    ///
    /// A value the layout cannot accept (negative, non-finite, or one that
    /// would leave a pie with a zero total) is rejected and the history and
    /// surface are left untouched.
    pub fn add_value(&mut self, value: f64) -> ChartResult<()> {
        if let Err(err) = validate_value(value) {
            warn!(value, error = %err, "rejecting chart value");
            return Err(err);
        }

        self.history.push(value)?;
        let frame = match self.build_render_frame() {
            Ok(frame) => frame,
            Err(err) => {
                self.history.pop();
                warn!(value, kind = %self.kind, error = %err, "rejecting chart value");
                return Err(err);
            }
        };
        trace!(value, count = self.history.len(), "append chart value");
        self.present(&frame)
    }

    /// Appends every value in order, rendering once at the end.
    ///
    /// Stops at the first rejected value; values before it stay appended.
    pub fn extend_values(&mut self, values: impl IntoIterator<Item = f64>) -> ChartResult<()> {
        let mut result = Ok(());
        for value in values {
            if let Err(err) = self.try_append(value) {
                result = Err(err);
                break;
            }
        }
        self.render()?;
        result
    }

    /// Removes every primitive from the surface. History is kept, so the
    /// next `render` or `add_value` redraws all values.
    pub fn clear(&mut self) -> ChartResult<()> {
        debug!(kind = %self.kind, "clear chart surface");
        self.surface.remove_all_primitives()
    }

    /// Clears the surface and drops the whole history.
    pub fn reset(&mut self) -> ChartResult<()> {
        debug!(kind = %self.kind, count = self.history.len(), "reset chart");
        self.history.clear();
        self.clear()
    }

    /// Discards the current chart and starts an empty one of `kind`.
    pub fn switch_kind(&mut self, kind: ChartKind) -> ChartResult<()> {
        debug!(from = %self.kind, to = %kind, "switch chart kind");
        self.reset()?;
        self.kind = kind;
        Ok(())
    }

    /// Full reflow against the current surface bounds.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.present(&frame)
    }

    pub fn layout(&self) -> ChartResult<ChartLayout> {
        let bounds = self.layout_bounds()?;
        self.engine()
            .layout(self.history.values(), &self.config, bounds)
    }

    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let bounds = self.layout_bounds()?;
        self.engine()
            .build_frame(self.history.values(), &self.config, bounds)
    }

    fn try_append(&mut self, value: f64) -> ChartResult<()> {
        let bounds = self.layout_bounds()?;
        self.history.push(value)?;
        if let Err(err) = self
            .engine()
            .layout(self.history.values(), &self.config, bounds)
        {
            self.history.pop();
            warn!(value, kind = %self.kind, error = %err, "rejecting chart value");
            return Err(err);
        }
        Ok(())
    }

    fn present(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        self.surface.present(frame)?;
        debug!(
            kind = %self.kind,
            values = self.history.len(),
            primitives = frame.len(),
            "render chart"
        );
        Ok(())
    }
}
