use criterion::{Criterion, criterion_group, criterion_main};
use stat_charts::api::{Chart, ChartConfig, ChartKind};
use stat_charts::core::{ChartDimensions, SurfaceBounds, layout_line_points, layout_pie_sectors};
use stat_charts::render::RecordingSurface;
use std::hint::black_box;

fn sample_values(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| ((i * 7_919) % 2_001) as f64)
        .collect()
}

fn bench_pie_sectors_1k(c: &mut Criterion) {
    let values = sample_values(1_000);

    c.bench_function("pie_sectors_1k", |b| {
        b.iter(|| {
            let _ = layout_pie_sectors(black_box(&values)).expect("pie layout should succeed");
        })
    });
}

fn bench_line_points_1k(c: &mut Criterion) {
    let values = sample_values(1_000);
    let dimensions = ChartDimensions::new(1_600.0, 800.0);
    let bounds = SurfaceBounds::new(1_920.0, 1_080.0).with_padding(20.0);

    c.bench_function("line_points_1k", |b| {
        b.iter(|| {
            let _ = layout_line_points(
                black_box(&values),
                black_box(dimensions),
                black_box(bounds),
            )
            .expect("line layout should succeed");
        })
    });
}

fn bench_incremental_fill_24(c: &mut Criterion) {
    let values = sample_values(24);

    for kind in ChartKind::ALL {
        c.bench_function(&format!("incremental_fill_24_{kind}"), |b| {
            b.iter(|| {
                let mut chart = Chart::new(
                    RecordingSurface::new(800.0, 400.0),
                    kind,
                    ChartConfig::default(),
                )
                .expect("chart init");
                for value in &values[1..] {
                    chart.add_value(black_box(*value)).expect("add value");
                }
            })
        });
    }
}

criterion_group!(
    benches,
    bench_pie_sectors_1k,
    bench_line_points_1k,
    bench_incremental_fill_24
);
criterion_main!(benches);
