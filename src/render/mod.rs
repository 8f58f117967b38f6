mod frame;
mod palette;
mod primitives;
mod recording_surface;

pub use frame::RenderFrame;
pub use palette::ColorPalette;
pub use primitives::{
    Color, MarkerPrimitive, PolylinePrimitive, Primitive, RectPrimitive, TextHAlign,
    TextPrimitive, WedgePrimitive,
};
pub use recording_surface::RecordingSurface;

use crate::core::SurfaceBounds;
use crate::error::ChartResult;

/// Drawing surface a chart lays itself out on.
///
/// The surface is measured, not owned, by the layout code: bounds are read
/// on every pass. Charts replace the whole scene by removing all primitives
/// and appending a fresh set.
pub trait Surface {
    fn bounds(&self) -> SurfaceBounds;

    fn append_primitive(&mut self, primitive: Primitive) -> ChartResult<()>;

    fn remove_all_primitives(&mut self) -> ChartResult<()>;

    /// Replaces the current scene with `frame`.
    fn present(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.remove_all_primitives()?;
        for primitive in &frame.primitives {
            self.append_primitive(primitive.clone())?;
        }
        Ok(())
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoSurface};
