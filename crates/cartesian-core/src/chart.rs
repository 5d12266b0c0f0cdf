// File: crates/cartesian-core/src/chart.rs
// Summary: Cartesian chart (two axes + ordered series), layout into scales, scene building and picking.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::debug;

use crate::axis::Axis;
use crate::datum::{format_number, Category, Datum, FieldValue};
use crate::domain::{category_domain, number_extent, resolve_number_domain, Dim};
use crate::error::{ChartError, Result};
use crate::geometry::{distance, PlotRect};
use crate::scale::{BandScale, LinearScale};
use crate::scene::{MarkKind, MarkRole, Scene, TextAnchor};
use crate::series::{BarSeries, LineSeries, Series, SeriesId, SeriesType};
use crate::theme::Theme;
use crate::types::{Padding, HEIGHT, WIDTH};

const LABEL_SIZE: f32 = 12.0;
const TITLE_SIZE: f32 = 16.0;
const Y_GUTTER: f32 = 48.0;
const X_GUTTER: f32 = 28.0;
const ROTATED_X_GUTTER: f32 = 24.0;
const TITLE_GUTTER: f32 = 28.0;
const PICK_TOLERANCE: f32 = 3.0;

/// Resolved mapping of one axis onto pixels.
#[derive(Clone, Debug)]
pub enum AxisScale {
    Band { scale: BandScale, categories: Vec<Category>, index: HashMap<String, usize> },
    Linear(LinearScale),
}

impl AxisScale {
    fn band(scale: BandScale, categories: Vec<Category>) -> Self {
        let index = categories.iter().enumerate().map(|(i, c)| (c.id().to_string(), i)).collect();
        AxisScale::Band { scale, categories, index }
    }

    /// Pixel position of a value: band center for categories, linear mapping for numbers.
    /// `None` when the value does not belong to this axis (or is not finite).
    pub fn position(&self, v: &FieldValue) -> Option<f32> {
        match self {
            AxisScale::Band { scale, index, .. } => {
                let c = v.to_category();
                index.get(c.id()).map(|&i| scale.center(i))
            }
            AxisScale::Linear(s) => {
                let n = v.as_number().filter(|n| n.is_finite())?;
                Some(s.to_px(n))
            }
        }
    }

    /// Tick positions and their labels.
    pub fn ticks(&self, count: usize) -> Vec<(f32, String)> {
        match self {
            AxisScale::Band { scale, categories, .. } => {
                categories.iter().enumerate().map(|(i, c)| (scale.center(i), c.label().to_string())).collect()
            }
            AxisScale::Linear(s) => s.ticks(count).into_iter().map(|t| (s.to_px(t), format_number(t))).collect(),
        }
    }

    pub fn as_linear(&self) -> Option<&LinearScale> {
        match self {
            AxisScale::Linear(s) => Some(s),
            AxisScale::Band { .. } => None,
        }
    }
}

/// Output of a layout pass.
#[derive(Clone, Debug)]
pub struct ChartLayout {
    pub width: u32,
    pub height: u32,
    pub padding: Padding,
    pub plot: PlotRect,
    pub x: AxisScale,
    pub y: AxisScale,
    has_title: bool,
}

impl ChartLayout {
    fn matches(&self, width: u32, height: u32, padding: Padding, has_title: bool) -> bool {
        self.width == width && self.height == height && self.padding == padding && self.has_title == has_title
    }
}

/// Tooltip for the record under a point.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub series: SeriesId,
    pub datum: usize,
    pub field: usize,
    pub text: String,
}

pub struct CartesianChart<D> {
    pub width: u32,
    pub height: u32,
    pub padding: Padding,
    pub title: Option<String>,
    pub theme: Theme,
    /// Directory used by [`Scene::download`].
    pub export_dir: PathBuf,
    x_axis: Axis,
    y_axis: Axis,
    series: Vec<Series<D>>,
    layout_pending: bool,
    layout: Option<ChartLayout>,
}

impl<D> CartesianChart<D> {
    pub fn new(x_axis: Axis, y_axis: Axis) -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            padding: Padding::default(),
            title: None,
            theme: Theme::default(),
            export_dir: PathBuf::from("target/out"),
            x_axis,
            y_axis,
            series: Vec::new(),
            layout_pending: true,
            layout: None,
        }
    }

    pub fn x_axis(&self) -> &Axis { &self.x_axis }
    pub fn y_axis(&self) -> &Axis { &self.y_axis }

    pub fn x_axis_mut(&mut self) -> &mut Axis {
        self.layout_pending = true;
        &mut self.x_axis
    }

    pub fn y_axis_mut(&mut self) -> &mut Axis {
        self.layout_pending = true;
        &mut self.y_axis
    }

    /// Both axes at once, e.g. to apply one setting to each.
    pub fn axes_mut(&mut self) -> [&mut Axis; 2] {
        self.layout_pending = true;
        [&mut self.x_axis, &mut self.y_axis]
    }

    pub fn add_series(&mut self, series: impl Into<Series<D>>) -> SeriesId {
        self.series.push(series.into());
        self.layout_pending = true;
        SeriesId(self.series.len() - 1)
    }

    /// Replace the whole series list.
    pub fn set_series(&mut self, series: Vec<Series<D>>) -> Vec<SeriesId> {
        self.series = series;
        self.layout_pending = true;
        (0..self.series.len()).map(SeriesId).collect()
    }

    pub fn series(&self) -> &[Series<D>] { &self.series }

    pub fn series_at(&self, id: SeriesId) -> Option<&Series<D>> { self.series.get(id.0) }

    /// Mutable access to a series; the chart is marked for re-layout.
    pub fn series_mut(&mut self, id: SeriesId) -> Result<&mut Series<D>> {
        let s = self.series.get_mut(id.0).ok_or(ChartError::UnknownSeries(id))?;
        self.layout_pending = true;
        Ok(s)
    }

    pub fn line_series_mut(&mut self, id: SeriesId) -> Result<&mut LineSeries<D>> {
        self.series_mut(id)?
            .as_line_mut()
            .ok_or(ChartError::SeriesKind { id, expected: SeriesType::Line })
    }

    pub fn bar_series_mut(&mut self, id: SeriesId) -> Result<&mut BarSeries<D>> {
        self.series_mut(id)?
            .as_bar_mut()
            .ok_or(ChartError::SeriesKind { id, expected: SeriesType::Bar })
    }

    /// Whether a mutation happened since the last layout pass.
    pub fn layout_pending(&self) -> bool { self.layout_pending }

    pub fn mark_layout_pending(&mut self) { self.layout_pending = true; }
}

impl<D: Datum> CartesianChart<D> {
    /// Lay out the chart if anything changed since the last pass.
    pub fn layout(&mut self) -> &ChartLayout {
        let has_title = self.title.is_some();
        let fresh = self
            .layout
            .as_ref()
            .is_some_and(|l| l.matches(self.width, self.height, self.padding, has_title));
        if self.layout_pending || !fresh {
            let layout = self.compute_layout();
            self.layout_pending = false;
            self.layout = Some(layout);
        }
        match &self.layout {
            Some(layout) => layout,
            None => unreachable!("layout computed above"),
        }
    }

    fn compute_layout(&mut self) -> ChartLayout {
        let (w, h) = (self.width as f32, self.height as f32);
        let p = self.padding;
        let x_gutter = if self.x_axis.label_rotation() != 0.0 { X_GUTTER + ROTATED_X_GUTTER } else { X_GUTTER };
        let title_h = if self.title.is_some() { TITLE_GUTTER } else { 0.0 };
        let left = p.left + Y_GUTTER;
        let top = p.top + title_h;
        let plot = PlotRect::from_ltrb(left, top, (w - p.right).max(left + 1.0), (h - p.bottom - x_gutter).max(top + 1.0));

        let x = resolve_axis(&mut self.x_axis, &self.series, Dim::X, (plot.left, plot.right));
        let y = resolve_axis(&mut self.y_axis, &self.series, Dim::Y, (plot.bottom, plot.top));
        debug!(
            width = self.width,
            height = self.height,
            series = self.series.len(),
            x_kind = %self.x_axis.kind(),
            y_kind = %self.y_axis.kind(),
            "chart layout"
        );
        ChartLayout { width: self.width, height: self.height, padding: p, plot, x, y, has_title: self.title.is_some() }
    }

    /// Lay out (if needed) and build the mark list.
    pub fn scene(&mut self) -> Scene {
        self.layout();
        let Some(layout) = self.layout.as_ref() else {
            unreachable!("layout computed above")
        };
        let theme = &self.theme;
        let mut scene = Scene::new(self.width, self.height, theme.background, self.export_dir.clone());

        push_guides(&mut scene, layout, &self.x_axis, &self.y_axis, self.title.as_deref(), theme);
        for (i, s) in self.series.iter().enumerate() {
            let id = SeriesId(i);
            match s {
                Series::Line(line) => push_line(&mut scene, layout, id, line, theme),
                Series::Bar(bar) => push_bars(&mut scene, layout, id, bar, theme),
            }
        }
        scene
    }

    /// Tooltip of the topmost data mark under `(x, y)`, for series with tooltips enabled.
    pub fn pick(&mut self, x: f32, y: f32) -> Option<Tooltip> {
        let scene = self.scene();
        let mut best: Option<(f32, SeriesId, usize, usize)> = None;
        for mark in scene.marks.iter().rev() {
            let MarkRole::Series { id, datum: Some(datum), field } = mark.role else {
                continue;
            };
            if !self.series[id.0].tooltip_enabled() {
                continue;
            }
            let d = match &mark.kind {
                MarkKind::Marker { center, radius, .. } => {
                    let d = distance(*center, (x, y));
                    if d > radius + PICK_TOLERANCE {
                        continue;
                    }
                    d
                }
                MarkKind::Rect { rect, .. } if rect.contains(x, y) => 0.0,
                _ => continue,
            };
            if best.map_or(true, |(bd, ..)| d < bd) {
                best = Some((d, id, datum, field));
            }
        }
        let (_, series, datum, field) = best?;
        let text = self.series[series.0].tooltip_text(datum, field)?;
        Some(Tooltip { series, datum, field, text })
    }
}

fn resolve_axis<D: Datum>(axis: &mut Axis, series: &[Series<D>], dim: Dim, range: (f32, f32)) -> AxisScale {
    match axis {
        Axis::Category(a) => {
            let categories = category_domain(series, dim);
            a.set_domain(categories.clone());
            let scale = BandScale::new(range, categories.len()).with_padding(a.padding_inner, a.padding_outer);
            AxisScale::band(scale, categories)
        }
        Axis::Number(a) => {
            let domain = resolve_number_domain(a, number_extent(series, dim));
            a.set_domain(domain);
            AxisScale::Linear(LinearScale::new(domain, range))
        }
    }
}

fn tick_count(axis: &Axis) -> usize {
    axis.as_number().map_or(0, |a| a.tick_count)
}

fn push_guides(scene: &mut Scene, layout: &ChartLayout, x_axis: &Axis, y_axis: &Axis, title: Option<&str>, theme: &Theme) {
    let plot = layout.plot;

    if let Some(title) = title {
        scene.push(
            MarkRole::Title,
            MarkKind::Text {
                text: title.to_string(),
                origin: ((plot.left + plot.right) * 0.5, layout.padding.top + TITLE_SIZE),
                size: TITLE_SIZE,
                color: theme.title,
                rotation: 0.0,
                anchor: TextAnchor::Middle,
            },
        );
    }

    // x ticks, vertical grid
    let rotation = x_axis.label_rotation();
    for (px, label) in layout.x.ticks(tick_count(x_axis)) {
        scene.push(MarkRole::Grid, MarkKind::Rule { from: (px, plot.top), to: (px, plot.bottom), color: theme.grid, width: 1.0 });
        scene.push(MarkRole::Axis, MarkKind::Rule { from: (px, plot.bottom), to: (px, plot.bottom + 5.0), color: theme.tick, width: 1.0 });
        let anchor = if rotation != 0.0 { TextAnchor::Start } else { TextAnchor::Middle };
        scene.push(
            MarkRole::Axis,
            MarkKind::Text { text: label, origin: (px, plot.bottom + 18.0), size: LABEL_SIZE, color: theme.axis_label, rotation, anchor },
        );
    }

    // y ticks, horizontal grid
    let y_rotation = y_axis.label_rotation();
    for (py, label) in layout.y.ticks(tick_count(y_axis)) {
        scene.push(MarkRole::Grid, MarkKind::Rule { from: (plot.left, py), to: (plot.right, py), color: theme.grid, width: 1.0 });
        scene.push(MarkRole::Axis, MarkKind::Rule { from: (plot.left - 5.0, py), to: (plot.left, py), color: theme.tick, width: 1.0 });
        scene.push(
            MarkRole::Axis,
            MarkKind::Text {
                text: label,
                origin: (plot.left - 8.0, py + LABEL_SIZE * 0.35),
                size: LABEL_SIZE,
                color: theme.axis_label,
                rotation: y_rotation,
                anchor: TextAnchor::End,
            },
        );
    }

    scene.push(MarkRole::Axis, MarkKind::Rule { from: (plot.left, plot.bottom), to: (plot.right, plot.bottom), color: theme.axis_line, width: 1.5 });
    scene.push(MarkRole::Axis, MarkKind::Rule { from: (plot.left, plot.top), to: (plot.left, plot.bottom), color: theme.axis_line, width: 1.5 });

    if let Some(t) = x_axis.title() {
        scene.push(
            MarkRole::Axis,
            MarkKind::Text {
                text: t.to_string(),
                origin: ((plot.left + plot.right) * 0.5, layout.height as f32 - layout.padding.bottom.max(LABEL_SIZE) + LABEL_SIZE),
                size: LABEL_SIZE,
                color: theme.axis_label,
                rotation: 0.0,
                anchor: TextAnchor::Middle,
            },
        );
    }
    if let Some(t) = y_axis.title() {
        scene.push(
            MarkRole::Axis,
            MarkKind::Text {
                text: t.to_string(),
                origin: (layout.padding.left.max(LABEL_SIZE), (plot.top + plot.bottom) * 0.5),
                size: LABEL_SIZE,
                color: theme.axis_label,
                rotation: -90.0,
                anchor: TextAnchor::Middle,
            },
        );
    }
}

fn push_line<D: Datum>(scene: &mut Scene, layout: &ChartLayout, id: SeriesId, line: &LineSeries<D>, theme: &Theme) {
    let stroke = line.stroke.unwrap_or_else(|| theme.color(id.0));
    let points: Vec<(usize, (f32, f32))> = line
        .data()
        .iter()
        .enumerate()
        .filter_map(|(k, d)| {
            let x = layout.x.position(&d.field(line.x_field())?)?;
            let y = layout.y.position(&d.field(line.y_field())?)?;
            Some((k, (x, y)))
        })
        .collect();

    if points.len() >= 2 && line.line_width > 0.0 {
        scene.push(
            MarkRole::Series { id, datum: None, field: 0 },
            MarkKind::Path { points: points.iter().map(|(_, p)| *p).collect(), stroke, width: line.line_width },
        );
    }

    // A lone point has no segment to draw, so it always gets a visible marker.
    let radius = if points.len() == 1 { line.marker_radius.max(line.line_width).max(1.0) } else { line.marker_radius };
    if radius <= 0.0 {
        return;
    }
    let fill = line.marker_fill.unwrap_or(theme.marker_fill);
    for (k, center) in points {
        scene.push(
            MarkRole::Series { id, datum: Some(k), field: 0 },
            MarkKind::Marker { center, radius, fill, stroke, stroke_width: line.marker_line_width },
        );
    }
}

fn push_bars<D: Datum>(scene: &mut Scene, layout: &ChartLayout, id: SeriesId, bar: &BarSeries<D>, theme: &Theme) {
    let Some(y_scale) = layout.y.as_linear() else {
        debug!(series = %id, "bar series needs a number y axis; skipped");
        return;
    };
    let fields = bar.y_fields();
    if fields.is_empty() {
        return;
    }
    let band_width = match &layout.x {
        AxisScale::Band { scale, .. } => scale.bandwidth(),
        AxisScale::Linear(_) => layout.plot.width() / bar.data().len().max(1) as f32 * 0.6,
    };
    let stroke = bar.stroke.unwrap_or(theme.axis_line);
    let slot_width = if bar.grouped { band_width / fields.len() as f32 } else { band_width };

    for (k, d) in bar.data().iter().enumerate() {
        let Some(cx) = d.field(bar.x_field()).and_then(|v| layout.x.position(&v)) else {
            continue;
        };
        let left = cx - band_width * 0.5;
        let (mut pos, mut neg) = (0.0_f64, 0.0_f64);
        for (j, field) in fields.iter().enumerate() {
            let Some(v) = d.field(field).and_then(|v| v.as_number()).filter(|v| v.is_finite()) else {
                continue;
            };
            let (x0, (y0, y1)) = if bar.grouped {
                (left + slot_width * j as f32, (0.0, v))
            } else if v >= 0.0 {
                pos += v;
                (left, (pos - v, pos))
            } else {
                neg += v;
                (left, (neg - v, neg))
            };
            let fill = bar.fills.get(j).copied().unwrap_or_else(|| theme.color(id.0 + j));
            scene.push(
                MarkRole::Series { id, datum: Some(k), field: j },
                MarkKind::Rect {
                    rect: PlotRect::from_ltrb(x0, y_scale.to_px(y1), x0 + slot_width, y_scale.to_px(y0)).normalized(),
                    fill,
                    stroke,
                    stroke_width: bar.line_width,
                },
            );
        }
    }
}
