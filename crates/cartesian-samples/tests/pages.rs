// File: crates/cartesian-samples/tests/pages.rs
// Purpose: Drive the sample pages through their controls and check chart state.

use cartesian_core::{Axis, CartesianChart, LineSeries, MarkKind};
use cartesian_samples::animation::{Animation, AnimationScheduler, SineSweep, SpiralSweep};
use cartesian_samples::{
    CategoryLinePage, ControlEvent, DuplicateCategoriesPage, NumericDatum, NumericLinePage, PageSettings, SamplePage,
};

fn settings() -> PageSettings {
    PageSettings { export_dir: "target/test_out/pages".into(), ..PageSettings::default() }
}

#[test]
fn category_page_starts_with_sample_people() {
    let mut page = CategoryLinePage::load(&settings()).unwrap();
    let chart = &mut page.context.chart;
    assert_eq!(chart.width, 800);
    assert_eq!(chart.x_axis().label_rotation(), 45.0);
    let scene = chart.scene();
    assert_eq!(chart.x_axis().as_category().unwrap().domain().len(), 8);
    assert!(scene.texts().any(|t| t == "Barbara"));
}

#[test]
fn no_data_then_single_point() {
    let mut page = CategoryLinePage::load(&settings()).unwrap();
    let id = page.context.series;

    page.fire(page.no_data, ControlEvent::Click).unwrap();
    assert!(page.context.chart.layout_pending());
    assert_eq!(page.context.chart.scene().marks_of(id).count(), 0);

    page.fire(page.single_point, ControlEvent::Click).unwrap();
    let scene = page.context.chart.scene();
    let marks: Vec<_> = scene.marks_of(id).collect();
    assert_eq!(marks.len(), 1);
    assert!(matches!(marks[0].kind, MarkKind::Marker { .. }));
    assert!(scene.texts().any(|t| t == "One"));
}

#[test]
fn change_data_is_reproducible_per_seed() {
    let mut a = CategoryLinePage::load(&settings()).unwrap();
    let mut b = CategoryLinePage::load(&settings()).unwrap();
    a.fire(a.change_data, ControlEvent::Click).unwrap();
    b.fire(b.change_data, ControlEvent::Click).unwrap();
    let len = |p: &CategoryLinePage| p.context.chart.series()[0].len();
    assert_eq!(len(&a), len(&b));
    assert!(len(&a) < 50);
}

#[test]
fn nice_toggle_flips_number_axes_and_marks_layout() {
    let mut page = NumericLinePage::load(&settings()).unwrap();
    page.context.chart.layout();
    assert!(!page.context.chart.layout_pending());
    assert_eq!(page.document.checked(page.nice), Some(true));

    page.fire(page.nice, ControlEvent::Toggle(false)).unwrap();
    let chart = &page.context.chart;
    assert_eq!(chart.x_axis().nice(), Some(false));
    assert_eq!(chart.y_axis().nice(), Some(false));
    assert!(chart.layout_pending());
    assert_eq!(page.document.checked(page.nice), Some(false));
}

#[test]
fn nice_toggle_leaves_category_axes_alone() {
    let mut page = NumericLinePage::load(&settings()).unwrap();
    *page.context.chart.x_axis_mut() = Axis::category();
    page.context.set_nice(false);
    assert_eq!(page.context.chart.x_axis().nice(), None);
    assert_eq!(page.context.chart.y_axis().nice(), Some(false));
}

#[test]
fn sliders_are_clamped_into_range() {
    let mut page = NumericLinePage::load(&settings()).unwrap();
    page.fire(page.line_width, ControlEvent::Input(12.3)).unwrap();
    page.fire(page.marker_radius, ControlEvent::Input(3.3)).unwrap();
    page.fire(page.marker_line_width, ControlEvent::Input(-1.0)).unwrap();
    let line = page.context.chart.series()[0].as_line().unwrap();
    assert_eq!(line.line_width, 10.0);
    assert_eq!(line.marker_radius, 3.5);
    assert_eq!(line.marker_line_width, 0.0);
}

#[test]
fn sine_animation_runs_to_completion() {
    let mut page = NumericLinePage::load(&settings()).unwrap();
    page.fire(page.animate_sine, ControlEvent::Click).unwrap();
    let ticks = page.advance(1_000).unwrap();
    assert_eq!(ticks, 201);
    assert!(page.context.scheduler.is_idle());

    let data = page.context.chart.series()[0].as_line().unwrap().data();
    assert_eq!(data.len(), 201);
    assert_eq!(data[0].x_value, -10.0);
    assert_eq!(data[200].x_value, 10.0);
}

#[test]
fn spiral_animation_yields_491_points() {
    let mut page = NumericLinePage::load(&settings()).unwrap();
    page.fire(page.animate_spiral, ControlEvent::Click).unwrap();
    page.advance(1_000).unwrap();
    assert_eq!(page.context.chart.series()[0].len(), 491);
}

#[test]
fn second_animation_on_same_series_supersedes_first() {
    let mut chart: CartesianChart<NumericDatum> = CartesianChart::new(Axis::number(), Axis::number());
    let id = chart.add_series(LineSeries::new());
    let mut scheduler = AnimationScheduler::new();

    scheduler.start(Animation::new("sine", id, "x_value", "y_value", SineSweep::new()));
    for _ in 0..10 {
        scheduler.tick(&mut chart).unwrap();
    }
    assert_eq!(chart.series()[0].len(), 10);

    scheduler.start(Animation::new("spiral", id, "x_value", "y_value", SpiralSweep::new()));
    assert_eq!(scheduler.running().count(), 1);
    scheduler.tick(&mut chart).unwrap();
    assert_eq!(chart.series()[0].len(), 1);

    assert!(scheduler.cancel(id));
    assert!(scheduler.is_idle());
    assert_eq!(scheduler.run_to_completion(&mut chart, 10).unwrap(), 0);
}

#[test]
fn animations_on_distinct_series_run_side_by_side() {
    let mut chart: CartesianChart<NumericDatum> = CartesianChart::new(Axis::number(), Axis::number());
    let sine = chart.add_series(LineSeries::new());
    let spiral = chart.add_series(LineSeries::new());
    let mut scheduler = AnimationScheduler::new();

    scheduler.start(Animation::new("sine", sine, "x_value", "y_value", SineSweep::new()));
    scheduler.start(Animation::new("spiral", spiral, "x_value", "y_value", SpiralSweep::new()));
    assert_eq!(scheduler.running().count(), 2);

    for _ in 0..201 {
        scheduler.tick(&mut chart).unwrap();
    }
    assert_eq!(scheduler.running().count(), 1);
    assert_eq!(chart.series()[0].len(), 201);
    assert_eq!(chart.series()[1].len(), 201);

    assert_eq!(scheduler.run_to_completion(&mut chart, 1_000).unwrap(), 290);
    assert!(scheduler.is_idle());
    assert_eq!(chart.series()[0].len(), 201);
    assert_eq!(chart.series()[1].len(), 491);
}

#[test]
fn frame_budget_stops_long_animations() {
    let mut page = NumericLinePage::load(&settings()).unwrap();
    page.fire(page.animate_spiral, ControlEvent::Click).unwrap();
    assert_eq!(page.advance(100).unwrap(), 100);
    assert!(!page.context.scheduler.is_idle());
    assert_eq!(page.context.chart.series()[0].len(), 100);
}

#[test]
fn duplicate_categories_render_distinct_bands_and_stacked_bars() {
    let mut page = DuplicateCategoriesPage::load(&settings()).unwrap();
    let line_scene = page.context.line_chart.scene();
    assert_eq!(page.context.line_chart.x_axis().as_category().unwrap().domain().len(), 5);
    assert_eq!(line_scene.texts().filter(|t| *t == "Italy").count(), 3);

    let bar_scene = page.context.bar_chart.scene();
    let bars = bar_scene
        .marks_of(page.context.bar_series)
        .filter(|m| matches!(m.kind, MarkKind::Rect { .. }))
        .count();
    assert_eq!(bars, 10);
    assert_eq!(page.context.bar_chart.y_axis().as_number().unwrap().domain().0, 0.0);
}

#[test]
fn outline_lists_every_control() {
    let page = NumericLinePage::load(&settings()).unwrap();
    let outline = page.document().outline();
    for label in ["[Save Chart Image]", "[Math.log data]", "[Spiral data]", "[Animate Math.sin data]", "[Animate spiral data]"] {
        assert!(outline.contains(label), "missing {label} in\n{outline}");
    }
    assert!(outline.contains("[x] Data domain auto-rounding"));
    assert_eq!(outline.matches("<0..10 step 0.5").count(), 3);
}
