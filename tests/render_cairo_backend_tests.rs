#![cfg(feature = "cairo-backend")]

use stat_charts::ChartError;
use stat_charts::api::{Chart, ChartConfig, ChartKind};
use stat_charts::render::{CairoRenderStats, CairoSurface, Surface};

fn cairo_chart(kind: ChartKind) -> Chart<CairoSurface> {
    let surface = CairoSurface::new(800, 400).expect("surface");
    Chart::new(surface, kind, ChartConfig::default()).expect("chart init")
}

#[test]
fn cairo_surface_rejects_invalid_size() {
    let err = CairoSurface::new(0, 400).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}

#[test]
fn cairo_surface_renders_pie_wedges_and_legend() {
    let mut chart = cairo_chart(ChartKind::Pie);
    chart.extend_values([10.0, 20.0, 30.0]).expect("extend");

    let stats = chart.surface().stats();
    assert_eq!(stats.wedges_drawn, 3);
    assert_eq!(stats.rects_drawn, 3);
    assert_eq!(stats.texts_drawn, 3);
    assert_eq!(stats.markers_drawn, 0);
    assert_eq!(stats.polylines_drawn, 0);
}

#[test]
fn cairo_surface_renders_line_markers_and_labels() {
    let mut chart = cairo_chart(ChartKind::Line);
    for value in [5.0, 10.0, 2.5] {
        chart.add_value(value).expect("add value");
    }

    let stats = chart.surface().stats();
    assert_eq!(stats.polylines_drawn, 1);
    assert_eq!(stats.markers_drawn, 3);
    assert_eq!(stats.texts_drawn, 3);
    assert_eq!(stats.wedges_drawn, 0);
}

#[test]
fn removing_all_primitives_resets_stats() {
    let mut chart = cairo_chart(ChartKind::Bar);
    chart.extend_values([3.0, 6.0]).expect("extend");
    assert_eq!(chart.surface().stats().rects_drawn, 2);

    chart
        .surface_mut()
        .remove_all_primitives()
        .expect("clear surface");
    assert_eq!(chart.surface().stats(), CairoRenderStats::default());

    chart.render().expect("render");
    chart.clear().expect("clear");
    assert_eq!(chart.surface().stats(), CairoRenderStats::default());
}

#[test]
fn padded_surface_shrinks_pie_radius() {
    let surface = CairoSurface::new(600, 300)
        .expect("surface")
        .with_padding(10.0);
    let mut chart = Chart::new(surface, ChartKind::Pie, ChartConfig::default()).expect("chart");
    chart.add_value(1.0).expect("add");

    let frame = chart.build_render_frame().expect("frame");
    let wedge = frame.wedges().next().expect("wedge");
    assert_eq!(wedge.geometry.radius, 150.0 - 30.0);
    assert_eq!(chart.surface().stats().wedges_drawn, 1);
}

#[test]
fn cairo_surface_writes_png() {
    let mut chart = cairo_chart(ChartKind::Pie);
    chart.extend_values([1.0, 2.0]).expect("extend");

    let path = std::env::temp_dir().join("stat_charts_cairo_pie_test.png");
    chart.surface().write_png(&path).expect("write png");
    let bytes = std::fs::read(&path).expect("read png");
    assert!(bytes.starts_with(b"\x89PNG"));
    let _ = std::fs::remove_file(&path);
}
