use crate::core::SurfaceBounds;
use crate::error::ChartResult;
use crate::render::{Primitive, Surface};

/// Headless surface that keeps every appended primitive in memory.
///
/// Used by tests and headless hosts. It still validates each primitive so
/// invalid geometry is caught without a real backend.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    bounds: SurfaceBounds,
    primitives: Vec<Primitive>,
    clear_count: usize,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_bounds(SurfaceBounds::new(width, height))
    }

    #[must_use]
    pub fn with_bounds(bounds: SurfaceBounds) -> Self {
        Self {
            bounds,
            primitives: Vec::new(),
            clear_count: 0,
        }
    }

    /// Simulates a host resize; takes effect on the next layout pass.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.bounds.width = width;
        self.bounds.height = height;
    }

    #[must_use]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Number of times the surface was wiped.
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }
}

impl Surface for RecordingSurface {
    fn bounds(&self) -> SurfaceBounds {
        self.bounds
    }

    fn append_primitive(&mut self, primitive: Primitive) -> ChartResult<()> {
        primitive.validate()?;
        self.primitives.push(primitive);
        Ok(())
    }

    fn remove_all_primitives(&mut self) -> ChartResult<()> {
        self.primitives.clear();
        self.clear_count += 1;
        Ok(())
    }
}
