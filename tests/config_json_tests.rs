use stat_charts::api::{Chart, ChartConfig, ChartKind, ChartLayout};
use stat_charts::render::{Color, ColorPalette, RecordingSurface};

#[test]
fn config_json_round_trip_keeps_style() {
    let mut config = ChartConfig::new(640.0, 320.0).with_padding(12.0);
    config.style.palette = ColorPalette::Cycle(vec![Color::rgb(0.2, 0.4, 0.6)]);

    let json = config.to_json_pretty().expect("serialize");
    let parsed = ChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn config_json_fills_missing_fields_with_defaults() {
    let parsed =
        ChartConfig::from_json_str(r#"{ "chart_width": 500.0, "chart_height": 250.0 }"#)
            .expect("parse");
    assert_eq!(parsed.padding, 20.0);
    assert_eq!(parsed.style, ChartConfig::default().style);
}

#[test]
fn config_json_is_validated() {
    let result = ChartConfig::from_json_str(r#"{ "chart_width": -1.0, "chart_height": 250.0 }"#);
    assert!(result.is_err());
    assert!(ChartConfig::from_json_str("not json").is_err());
}

#[test]
fn snapshot_dump_carries_kind_values_and_layout() {
    let mut chart = Chart::new(
        RecordingSurface::new(800.0, 400.0),
        ChartKind::Pie,
        ChartConfig::default(),
    )
    .expect("chart init");
    chart.extend_values([10.0, 20.0, 30.0]).expect("extend");

    let snapshot = chart.snapshot().expect("snapshot");
    assert_eq!(snapshot.kind, ChartKind::Pie);
    assert_eq!(snapshot.values, vec![10.0, 20.0, 30.0]);
    let ChartLayout::Pie(sectors) = &snapshot.layout else {
        panic!("expected pie layout");
    };
    let spans: Vec<f64> = sectors.iter().map(|s| s.degree_span).collect();
    assert_eq!(spans, vec![60.0, 120.0, 180.0]);

    let json: serde_json::Value =
        serde_json::from_str(&snapshot.to_json_pretty().expect("json")).expect("parse");
    assert_eq!(json["kind"], "pie");
    assert_eq!(json["layout"]["kind"], "pie");
    assert_eq!(json["layout"]["data"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["bounds"]["padding"], 20.0);
}

#[test]
fn snapshot_layout_matches_live_layout() {
    let mut chart = Chart::new(
        RecordingSurface::new(800.0, 400.0),
        ChartKind::Line,
        ChartConfig::default(),
    )
    .expect("chart init");
    chart.extend_values([1.0, 2.0]).expect("extend");

    let snapshot = chart.snapshot().expect("snapshot");
    assert_eq!(snapshot.layout, chart.layout().expect("layout"));
    assert_eq!(snapshot.bounds, chart.layout_bounds().expect("bounds"));
}
