// File: crates/cartesian-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke tests (RGBA buffer, PNG bytes, download).

use cartesian_core::{Axis, CartesianChart, LineSeries, RenderOptions};

fn chart() -> CartesianChart<(f64, f64)> {
    let mut chart = CartesianChart::new(Axis::number(), Axis::number());
    chart.width = 320;
    chart.height = 200;
    chart.title = Some("Smoke".into());
    chart.add_series(LineSeries::new().with_data_and_fields(
        vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)],
        "x",
        "y",
    ));
    chart
}

#[test]
fn render_rgba8_buffer() {
    let opts = RenderOptions { draw_labels: false };
    let px = chart().scene().render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(px.len(), 320 * 200 * 4);
    assert_eq!(px[3], 255);
}

#[test]
fn render_png_bytes_and_download() {
    let mut chart = chart();
    let scene = chart.scene();
    let bytes = scene.to_png_bytes(&RenderOptions::default()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    chart.export_dir = std::path::PathBuf::from("target/test_out");
    let path = chart.scene().download("smoke").expect("download");
    assert!(path.ends_with("smoke.png"));
    assert!(std::fs::metadata(&path).expect("output exists").len() > 0);
}
