use crate::core::SurfaceBounds;
use crate::error::ChartResult;
use crate::render::{
    MarkerPrimitive, PolylinePrimitive, Primitive, RectPrimitive, TextPrimitive, WedgePrimitive,
};

/// Backend-agnostic scene for one chart layout pass.
///
/// Primitives are kept in emit order; surfaces draw them back to front.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub bounds: SurfaceBounds,
    pub primitives: Vec<Primitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(bounds: SurfaceBounds) -> Self {
        Self {
            bounds,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.bounds.validate()?;
        for primitive in &self.primitives {
            primitive.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn markers(&self) -> impl Iterator<Item = &MarkerPrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Marker(marker) => Some(marker),
            _ => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = &PolylinePrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Polyline(polyline) => Some(polyline),
            _ => None,
        })
    }

    pub fn wedges(&self) -> impl Iterator<Item = &WedgePrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Wedge(wedge) => Some(wedge),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Text(text) => Some(text),
            _ => None,
        })
    }
}
