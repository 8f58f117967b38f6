use approx::assert_relative_eq;
use stat_charts::ChartError;
use stat_charts::core::{
    MAX_SECTOR_SPAN_DEGREES, PathSegment, SectorDatum, SurfaceBounds, layout_pie_sectors,
    pie_radius, wedge_geometry,
};

#[test]
fn sectors_are_proportional_and_cumulative() {
    let sectors = layout_pie_sectors(&[10.0, 20.0, 30.0]).expect("layout");

    let spans: Vec<f64> = sectors.iter().map(|s| s.degree_span).collect();
    let offsets: Vec<f64> = sectors.iter().map(|s| s.angular_offset).collect();
    assert_eq!(spans, vec![60.0, 120.0, 180.0]);
    assert_eq!(offsets, vec![0.0, 60.0, 180.0]);
    assert_eq!(spans.iter().sum::<f64>(), 360.0);
}

#[test]
fn sectors_are_sorted_ascending_and_keep_insertion_index() {
    let sectors = layout_pie_sectors(&[30.0, 10.0, 20.0]).expect("layout");

    let order: Vec<(usize, f64)> = sectors.iter().map(|s| (s.index, s.value)).collect();
    assert_eq!(order, vec![(1, 10.0), (2, 20.0), (0, 30.0)]);
}

#[test]
fn equal_values_keep_insertion_order() {
    let sectors = layout_pie_sectors(&[5.0, 5.0, 1.0]).expect("layout");
    let indices: Vec<usize> = sectors.iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![2, 0, 1]);
}

#[test]
fn single_value_is_clamped_below_full_circle() {
    let sectors = layout_pie_sectors(&[42.0]).expect("layout");
    assert_eq!(sectors.len(), 1);
    assert_eq!(sectors[0].degree_span, MAX_SECTOR_SPAN_DEGREES);
    assert_eq!(sectors[0].angular_offset, 0.0);
}

#[test]
fn zero_value_next_to_positive_value_gets_empty_sector() {
    let sectors = layout_pie_sectors(&[0.0, 7.0]).expect("layout");
    assert_eq!(sectors[0].degree_span, 0.0);
    assert_eq!(sectors[1].angular_offset, 0.0);
    assert_eq!(sectors[1].degree_span, MAX_SECTOR_SPAN_DEGREES);
}

#[test]
fn spans_are_rounded_to_hundredths() {
    let sectors = layout_pie_sectors(&[1.0, 2.0]).expect("layout");
    assert_relative_eq!(sectors[0].degree_span, 120.0);
    assert_relative_eq!(sectors[1].degree_span, 240.0);

    let sectors = layout_pie_sectors(&[1.0, 1.0, 1.0, 4.0]).expect("layout");
    // 360 / 7 = 51.428571...
    assert_relative_eq!(sectors[0].degree_span, 51.43, epsilon = 1e-9);
    assert_relative_eq!(sectors[3].degree_span, 205.71, epsilon = 1e-9);
}

#[test]
fn zero_total_is_degenerate() {
    let err = layout_pie_sectors(&[0.0, 0.0]).expect_err("zero total");
    assert!(matches!(err, ChartError::DegenerateTotal { count: 2 }));
}

#[test]
fn negative_and_non_finite_values_are_rejected() {
    for bad in [-1.0, f64::NAN, f64::NEG_INFINITY] {
        let err = layout_pie_sectors(&[10.0, bad]).expect_err("invalid value");
        assert!(matches!(err, ChartError::InvalidValue { .. }));
    }
}

#[test]
fn empty_history_yields_no_sectors() {
    assert!(layout_pie_sectors(&[]).expect("layout").is_empty());
}

#[test]
fn wedge_starts_at_bottom_and_turns_clockwise() {
    let bounds = SurfaceBounds::new(400.0, 300.0).with_padding(20.0);
    let sector = SectorDatum {
        index: 0,
        value: 1.0,
        degree_span: 90.0,
        angular_offset: 0.0,
    };

    let wedge = wedge_geometry(sector, bounds).expect("wedge");
    assert_relative_eq!(wedge.radius, 130.0);
    assert_relative_eq!(wedge.center.x, 200.0);
    assert_relative_eq!(wedge.center.y, 150.0);
    assert_relative_eq!(wedge.start.x, 200.0, epsilon = 1e-9);
    assert_relative_eq!(wedge.start.y, 280.0, epsilon = 1e-9);
    assert_relative_eq!(wedge.end.x, 70.0, epsilon = 1e-9);
    assert_relative_eq!(wedge.end.y, 150.0, epsilon = 1e-9);
    assert!(!wedge.large_arc);

    assert_eq!(wedge.outline.len(), 3);
    assert!(matches!(
        wedge.outline[0],
        PathSegment::Arc {
            clockwise: true,
            large_arc: false,
            ..
        }
    ));
    assert_eq!(wedge.outline[1], PathSegment::Line { to: wedge.center });
    assert_eq!(wedge.outline[2], PathSegment::Line { to: wedge.start });
}

#[test]
fn wedge_offset_rotates_start_point() {
    let bounds = SurfaceBounds::new(400.0, 300.0).with_padding(20.0);
    let sector = SectorDatum {
        index: 0,
        value: 1.0,
        degree_span: 200.0,
        angular_offset: 180.0,
    };

    let wedge = wedge_geometry(sector, bounds).expect("wedge");
    // Offset 180 puts the start at the top of the circle.
    assert_relative_eq!(wedge.start.x, 200.0, epsilon = 1e-9);
    assert_relative_eq!(wedge.start.y, 20.0, epsilon = 1e-9);
    assert!(wedge.large_arc);
}

#[test]
fn full_disk_wedge_keeps_distinct_end_points() {
    let bounds = SurfaceBounds::new(300.0, 300.0).with_padding(10.0);
    let sectors = layout_pie_sectors(&[42.0]).expect("layout");
    let wedge = wedge_geometry(sectors[0], bounds).expect("wedge");

    assert!(wedge.large_arc);
    assert!(wedge.start.distance_to(wedge.end) > 0.0);
    wedge.validate().expect("drawable wedge");
}

#[test]
fn radius_must_stay_positive() {
    let bounds = SurfaceBounds::new(300.0, 40.0).with_padding(20.0);
    assert!(pie_radius(bounds).is_err());
    assert_relative_eq!(
        pie_radius(SurfaceBounds::new(300.0, 100.0).with_padding(20.0)).expect("radius"),
        30.0
    );
}

#[test]
fn huge_values_do_not_overflow_the_total() {
    let sectors = layout_pie_sectors(&[1e308, 1e308]).expect("layout");
    let spans: Vec<f64> = sectors.iter().map(|s| s.degree_span).collect();
    assert_eq!(spans, vec![180.0, 180.0]);
    assert_eq!(sectors[1].angular_offset, 180.0);

    let sectors = layout_pie_sectors(&[f64::MAX, f64::MAX, f64::MAX]).expect("layout");
    let total: f64 = sectors.iter().map(|s| s.degree_span).sum();
    assert_relative_eq!(total, 360.0, epsilon = 0.02);
}

#[test]
fn subnormal_values_do_not_underflow_the_total() {
    let sectors = layout_pie_sectors(&[5e-324, 5e-324]).expect("layout");
    let spans: Vec<f64> = sectors.iter().map(|s| s.degree_span).collect();
    assert_eq!(spans, vec![180.0, 180.0]);

    let sectors = layout_pie_sectors(&[2e-310, 6e-310]).expect("layout");
    assert_relative_eq!(sectors[0].degree_span, 90.0, epsilon = 0.02);
    assert_relative_eq!(sectors[1].degree_span, 270.0, epsilon = 0.02);
}
