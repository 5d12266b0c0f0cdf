// File: crates/cartesian-core/tests/pick.rs
// Purpose: Validate tooltip picking over markers and bars.

use cartesian_core::{Axis, BarSeries, CartesianChart, LineSeries, MarkKind};

#[test]
fn pick_marker_returns_tooltip_text() {
    let mut chart: CartesianChart<(f64, f64)> = CartesianChart::new(Axis::number(), Axis::number());
    let mut line = LineSeries::new().with_data_and_fields(vec![(0.0, 1.0), (2.0, 3.0)], "x", "y");
    line.tooltip = true;
    line.title = Some("Line".into());
    let id = chart.add_series(line);

    let scene = chart.scene();
    let center = scene
        .marks_of(id)
        .find_map(|m| match m.kind {
            MarkKind::Marker { center, .. } => Some(center),
            _ => None,
        })
        .expect("marker");
    let tip = chart.pick(center.0 + 1.0, center.1).expect("tooltip");
    assert_eq!(tip.datum, 0);
    assert_eq!(tip.text, "Line\n0: 1");
}

#[test]
fn pick_ignores_series_without_tooltips() {
    let mut chart: CartesianChart<(f64, f64)> = CartesianChart::new(Axis::number(), Axis::number());
    let id = chart.add_series(LineSeries::new().with_data_and_fields(vec![(0.0, 1.0), (2.0, 3.0)], "x", "y"));
    let scene = chart.scene();
    let center = scene
        .marks_of(id)
        .find_map(|m| match m.kind {
            MarkKind::Marker { center, .. } => Some(center),
            _ => None,
        })
        .expect("marker");
    assert_eq!(chart.pick(center.0, center.1), None);
}

#[test]
fn pick_bar_uses_field_display_name() {
    let mut chart: CartesianChart<(f64, f64)> = CartesianChart::new(Axis::category(), Axis::number());
    let mut bar = BarSeries::new();
    bar.set_data_and_fields(vec![(1.0, 4.0)], "x", vec!["y".into()], vec!["Total".into()]).unwrap();
    bar.tooltip = true;
    let id = chart.add_series(bar);

    let scene = chart.scene();
    let rect = scene
        .marks_of(id)
        .find_map(|m| match m.kind {
            MarkKind::Rect { rect, .. } => Some(rect),
            _ => None,
        })
        .expect("bar");
    let tip = chart.pick((rect.left + rect.right) * 0.5, rect.bottom - 1.0).expect("tooltip");
    assert_eq!(tip.text, "Total\n1: 4");
    assert_eq!(chart.pick(1.0, 1.0), None);
}
