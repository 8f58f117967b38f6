use std::f64::consts::{FRAC_PI_2, TAU};
use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface, LineJoin};
use pango::FontDescription;

use crate::core::{SurfaceBounds, degrees_to_radians};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, MarkerPrimitive, PolylinePrimitive, Primitive, RectPrimitive, Surface, TextHAlign,
    TextPrimitive, WedgePrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub markers_drawn: usize,
    pub polylines_drawn: usize,
    pub wedges_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango + PangoCairo raster surface.
///
/// Primitives are drawn immediately as they are appended; removing all
/// primitives repaints the clear color.
#[derive(Debug)]
pub struct CairoSurface {
    surface: ImageSurface,
    padding: f64,
    clear_color: Color,
    stats: CairoRenderStats,
}

impl CairoSurface {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidViewport {
                width: f64::from(width),
                height: f64::from(height),
            });
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let mut this = Self {
            surface,
            padding: 0.0,
            clear_color: Color::WHITE,
            stats: CairoRenderStats::default(),
        };
        this.remove_all_primitives()?;
        Ok(this)
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn stats(&self) -> CairoRenderStats {
        self.stats
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let mut file = File::create(path.as_ref())
            .map_err(|err| ChartError::Surface(format!("failed to create png file: {err}")))?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| ChartError::Surface(format!("failed to write png: {err}")))
    }

    fn context(&self) -> ChartResult<Context> {
        Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))
    }
}

impl Surface for CairoSurface {
    fn bounds(&self) -> SurfaceBounds {
        SurfaceBounds::new(
            f64::from(self.surface.width()),
            f64::from(self.surface.height()),
        )
        .with_padding(self.padding)
    }

    fn append_primitive(&mut self, primitive: Primitive) -> ChartResult<()> {
        primitive.validate()?;
        let context = self.context()?;
        match &primitive {
            Primitive::Marker(marker) => {
                draw_marker(&context, *marker)?;
                self.stats.markers_drawn += 1;
            }
            Primitive::Polyline(polyline) => {
                draw_polyline(&context, polyline)?;
                self.stats.polylines_drawn += 1;
            }
            Primitive::Wedge(wedge) => {
                draw_wedge(&context, wedge)?;
                self.stats.wedges_drawn += 1;
            }
            Primitive::Rect(rect) => {
                draw_rect(&context, *rect)?;
                self.stats.rects_drawn += 1;
            }
            Primitive::Text(text) => {
                draw_text(&context, text);
                self.stats.texts_drawn += 1;
            }
        }
        Ok(())
    }

    fn remove_all_primitives(&mut self) -> ChartResult<()> {
        let context = self.context()?;
        apply_color(&context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        self.stats = CairoRenderStats::default();
        Ok(())
    }
}

fn fill_and_stroke(
    context: &Context,
    fill: Color,
    stroke: Color,
    stroke_width: f64,
    what: &str,
) -> ChartResult<()> {
    apply_color(context, fill);
    if stroke_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error(&format!("failed to fill {what}"), err))?;
        apply_color(context, stroke);
        context.set_line_width(stroke_width);
        context
            .stroke()
            .map_err(|err| map_backend_error(&format!("failed to stroke {what}"), err))
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error(&format!("failed to fill {what}"), err))
    }
}

fn draw_marker(context: &Context, marker: MarkerPrimitive) -> ChartResult<()> {
    context.new_sub_path();
    context.arc(
        marker.center.x,
        marker.center.y,
        marker.diameter / 2.0,
        0.0,
        TAU,
    );
    fill_and_stroke(
        context,
        marker.fill_color,
        marker.stroke_color,
        marker.stroke_width,
        "marker",
    )
}

fn draw_polyline(context: &Context, polyline: &PolylinePrimitive) -> ChartResult<()> {
    let mut points = polyline.points.iter();
    let Some(first) = points.next() else {
        return Ok(());
    };
    context.move_to(first.x, first.y);
    for point in points {
        context.line_to(point.x, point.y);
    }
    apply_color(context, polyline.color);
    context.set_line_width(polyline.stroke_width);
    context.set_line_join(LineJoin::Round);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke polyline", err))
}

fn draw_wedge(context: &Context, wedge: &WedgePrimitive) -> ChartResult<()> {
    let geometry = &wedge.geometry;
    // Cairo angles grow clockwise from +x; the bottom of the circle is +pi/2.
    let start = FRAC_PI_2 + degrees_to_radians(geometry.start_angle);
    let end = start + degrees_to_radians(geometry.degree_span);

    context.move_to(geometry.start.x, geometry.start.y);
    context.arc(
        geometry.center.x,
        geometry.center.y,
        geometry.radius,
        start,
        end,
    );
    context.line_to(geometry.center.x, geometry.center.y);
    context.close_path();
    fill_and_stroke(
        context,
        wedge.fill_color,
        wedge.stroke_color,
        wedge.stroke_width,
        "wedge",
    )
}

fn draw_rect(context: &Context, rect: RectPrimitive) -> ChartResult<()> {
    context.rectangle(rect.x, rect.y, rect.width, rect.height);
    fill_and_stroke(
        context,
        rect.fill_color,
        rect.border_color,
        rect.border_width,
        "rectangle",
    )
}

fn draw_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, _text_height) = layout.pixel_size();
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
        TextHAlign::Right => text.x - f64::from(text_width),
    };

    apply_color(context, text.color);
    context.move_to(x, text.y);
    pangocairo::functions::show_layout(context, &layout);
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Surface(format!("{prefix}: {err}"))
}
