use cartesian_core::{Axis, CartesianChart, LineSeries, RenderOptions};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn gen_xy(n: usize) -> Vec<(f64, f64)> {
    (0..n).map(|i| {
        let x = i as f64 * 0.01;
        (x, x.sin() * 10.0)
    }).collect()
}

fn bench_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene");
    for &n in &[200usize, 2_000, 20_000] {
        let mut chart: CartesianChart<(f64, f64)> = CartesianChart::new(Axis::number(), Axis::number());
        let id = chart.add_series(LineSeries::new().with_data_and_fields(gen_xy(n), "x", "y"));
        group.bench_with_input(BenchmarkId::new("layout_and_marks", n), &n, |b, _| {
            b.iter(|| {
                chart.mark_layout_pending();
                black_box(chart.scene().marks_of(id).count())
            })
        });
    }
    group.finish();
}

fn bench_raster(c: &mut Criterion) {
    let mut chart: CartesianChart<(f64, f64)> = CartesianChart::new(Axis::number(), Axis::number());
    chart.add_series(LineSeries::new().with_data_and_fields(gen_xy(2_000), "x", "y"));
    let scene = chart.scene();
    let opts = RenderOptions { draw_labels: false };
    c.bench_function("raster_800x600", |b| b.iter(|| black_box(scene.render_to_rgba8(&opts).map(|px| px.len()))));
    c.bench_function("png_800x600", |b| b.iter(|| black_box(scene.to_png_bytes(&opts).map(|png| png.len()))));
}

criterion_group!(benches, bench_scene, bench_raster);
criterion_main!(benches);
