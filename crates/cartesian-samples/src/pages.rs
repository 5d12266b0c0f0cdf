// File: crates/cartesian-samples/src/pages.rs
// Summary: Sample pages: chart assembly plus the controls that mutate each chart live.
// Notes:
// - Every handler receives its page context by `&mut`; no handler captures chart state.
// - "Save Chart Image" writes `<name>.png` into the chart's export directory.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use cartesian_core::{Axis, BarSeries, CartesianChart, LineSeries, Padding, Scene, SeriesId, Theme};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::animation::{Animation, AnimationScheduler, SineSweep, SpiralSweep};
use crate::controls::{ControlEvent, ControlPanel};
use crate::data::{CategoryDatum, DuplicateCategoryDatum, NumericDatum};
use crate::document::{Document, Node, NodeId, Slider};
use crate::generators::{
    category_sample_data, duplicate_category_data, generate_category_data, generate_log_data,
    generate_sin_data, generate_spiral_data, random_record_count,
};
use crate::session::write_csv;

const SAVE_LABEL: &str = "Save Chart Image";
const NICE_LABEL: &str =
    "Data domain auto-rounding (desirable for static charts but not for animated ones)";

/// Inputs shared by every page.
#[derive(Clone, Debug)]
pub struct PageSettings {
    /// Width of full-width charts.
    pub page_width: u32,
    pub theme: Theme,
    pub seed: u64,
    pub export_dir: PathBuf,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            page_width: 800,
            theme: Theme::default(),
            seed: 42,
            export_dir: PathBuf::from("target/out"),
        }
    }
}

/// One scripted interaction used to click through a page.
#[derive(Clone, Copy, Debug)]
pub struct ScriptStep {
    pub label: &'static str,
    pub control: NodeId,
    pub event: ControlEvent,
    /// The step writes an image (skipped when export is off).
    pub saves: bool,
}

impl ScriptStep {
    fn click(label: &'static str, control: NodeId) -> Self {
        Self { label, control, event: ControlEvent::Click, saves: false }
    }

    fn send(label: &'static str, control: NodeId, event: ControlEvent) -> Self {
        Self { label, control, event, saves: false }
    }

    fn save(control: NodeId) -> Self {
        Self { label: "save", control, event: ControlEvent::Click, saves: true }
    }
}

pub trait SamplePage {
    fn name(&self) -> &'static str;
    fn document(&self) -> &Document;
    fn fire(&mut self, control: NodeId, event: ControlEvent) -> anyhow::Result<()>;
    /// A click-through touching every control of the page.
    fn script(&self) -> Vec<ScriptStep>;
    /// Let pending animations run for at most `max_frames` refreshes.
    fn advance(&mut self, _max_frames: u64) -> anyhow::Result<u64> {
        Ok(0)
    }
    /// Current scene of every chart on the page, keyed by a short chart name.
    fn scenes(&mut self) -> Vec<(&'static str, Scene)>;
    /// Dump the charts' current datasets as CSV files into `dir`.
    fn write_csv(&self, dir: &Path) -> anyhow::Result<Vec<PathBuf>>;
    /// Images written by the page's save controls.
    fn downloads(&self) -> &[PathBuf];
}

fn save_chart<D: cartesian_core::Datum>(
    chart: &mut CartesianChart<D>,
    name: &str,
    downloads: &mut Vec<PathBuf>,
) -> anyhow::Result<()> {
    let path = chart
        .scene()
        .download(name)
        .with_context(|| format!("saving chart image '{name}'"))?;
    info!(path = %path.display(), "chart image saved");
    downloads.push(path);
    Ok(())
}

fn slider_value(event: &ControlEvent) -> anyhow::Result<f32> {
    match event {
        ControlEvent::Input(v) => Ok(*v as f32),
        other => bail!("expected slider input, got {other}"),
    }
}

fn toggle_value(event: &ControlEvent) -> anyhow::Result<bool> {
    match event {
        ControlEvent::Toggle(on) => Ok(*on),
        other => bail!("expected checkbox toggle, got {other}"),
    }
}

fn chart_surface<D>(title: &str, chart: &CartesianChart<D>) -> Node {
    Node::ChartSurface { title: title.to_string(), width: chart.width, height: chart.height }
}

// ---------------------------------------------------------------------------
// Category line chart
// ---------------------------------------------------------------------------

pub struct CategoryLineContext {
    pub chart: CartesianChart<CategoryDatum>,
    pub series: SeriesId,
    pub rng: StdRng,
    pub downloads: Vec<PathBuf>,
}

impl CategoryLineContext {
    fn set_data(&mut self, data: Vec<CategoryDatum>) -> anyhow::Result<()> {
        self.chart.line_series_mut(self.series)?.set_data_and_fields(data, "category", "value");
        Ok(())
    }
}

/// Category x axis over named people; buttons swap in random, empty and single-point data.
pub struct CategoryLinePage {
    pub document: Document,
    pub context: CategoryLineContext,
    controls: ControlPanel<CategoryLineContext>,
    pub save: NodeId,
    pub change_data: NodeId,
    pub no_data: NodeId,
    pub single_point: NodeId,
}

impl CategoryLinePage {
    pub const NAME: &'static str = "category-line";

    pub fn load(settings: &PageSettings) -> anyhow::Result<Self> {
        let mut chart = CartesianChart::new(Axis::category(), Axis::number());
        chart.width = settings.page_width;
        chart.height = 600;
        chart.padding = Padding::uniform(50.0);
        chart.theme = settings.theme;
        chart.export_dir = settings.export_dir.clone();
        chart.x_axis_mut().set_label_rotation(45.0);

        let mut line = LineSeries::new();
        line.line_width = 4.0;
        let series = chart.add_series(line);
        chart
            .line_series_mut(series)?
            .set_data_and_fields(category_sample_data(), "category", "value");

        let mut document = Document::new();
        document.append(chart_surface("Category line", &chart));
        document.append(Node::Break);

        let mut controls = ControlPanel::new();
        let save = controls.add(
            &mut document,
            Node::button(SAVE_LABEL),
            |_, ctx: &mut CategoryLineContext| {
                save_chart(&mut ctx.chart, "pie-chart", &mut ctx.downloads)
            },
        );
        let change_data = controls.add(
            &mut document,
            Node::button("Change data"),
            |_, ctx: &mut CategoryLineContext| {
                let n = random_record_count(&mut ctx.rng);
                let data = generate_category_data(n, &mut ctx.rng);
                ctx.set_data(data)
            },
        );
        let no_data = controls.add(
            &mut document,
            Node::button("No data"),
            |_, ctx: &mut CategoryLineContext| {
                ctx.set_data(Vec::new())
            },
        );
        let single_point = controls.add(
            &mut document,
            Node::button("Single data point"),
            |_, ctx: &mut CategoryLineContext| {
                ctx.set_data(vec![CategoryDatum::new("One", 17.0)])
            },
        );

        let context = CategoryLineContext {
            chart,
            series,
            rng: StdRng::seed_from_u64(settings.seed),
            downloads: Vec::new(),
        };
        Ok(Self { document, context, controls, save, change_data, no_data, single_point })
    }
}

impl SamplePage for CategoryLinePage {
    fn name(&self) -> &'static str { Self::NAME }
    fn document(&self) -> &Document { &self.document }

    fn fire(&mut self, control: NodeId, event: ControlEvent) -> anyhow::Result<()> {
        self.controls.fire(&mut self.document, control, event, &mut self.context)
    }

    fn script(&self) -> Vec<ScriptStep> {
        vec![
            ScriptStep::click("change-data", self.change_data),
            ScriptStep::click("no-data", self.no_data),
            ScriptStep::click("single-point", self.single_point),
            ScriptStep::click("change-data-again", self.change_data),
            ScriptStep::save(self.save),
        ]
    }

    fn scenes(&mut self) -> Vec<(&'static str, Scene)> {
        vec![("line", self.context.chart.scene())]
    }

    fn write_csv(&self, dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
        let data = self
            .context
            .chart
            .series_at(self.context.series)
            .and_then(|s| s.as_line())
            .map(|l| l.data());
        let path = dir.join("category-line.csv");
        write_csv(&path, data.unwrap_or_default())?;
        Ok(vec![path])
    }

    fn downloads(&self) -> &[PathBuf] { &self.context.downloads }
}

// ---------------------------------------------------------------------------
// Numeric line chart
// ---------------------------------------------------------------------------

pub struct NumericLineContext {
    pub chart: CartesianChart<NumericDatum>,
    pub series: SeriesId,
    pub scheduler: AnimationScheduler<NumericDatum>,
    pub downloads: Vec<PathBuf>,
}

impl NumericLineContext {
    fn set_data(&mut self, data: Vec<NumericDatum>) -> anyhow::Result<()> {
        self.chart.line_series_mut(self.series)?.set_data_and_fields(data, "x_value", "y_value");
        Ok(())
    }

    fn animate(
        &mut self,
        name: &str,
        frames: impl Iterator<Item = crate::animation::Frame<NumericDatum>> + 'static,
    ) {
        self.scheduler.start(Animation::new(name, self.series, "x_value", "y_value", frames));
    }

    /// Toggle domain rounding on every axis that supports it.
    pub fn set_nice(&mut self, nice: bool) {
        for axis in self.chart.axes_mut() {
            if axis.supports_nice() {
                axis.set_nice(nice);
            }
        }
        self.chart.mark_layout_pending();
    }
}

/// Number/number line chart with generator buttons, animations, a nice toggle and style sliders.
pub struct NumericLinePage {
    pub document: Document,
    pub context: NumericLineContext,
    controls: ControlPanel<NumericLineContext>,
    pub save: NodeId,
    pub log_data: NodeId,
    pub spiral_data: NodeId,
    pub animate_sine: NodeId,
    pub animate_spiral: NodeId,
    pub nice: NodeId,
    pub line_width: NodeId,
    pub marker_line_width: NodeId,
    pub marker_radius: NodeId,
}

impl NumericLinePage {
    pub const NAME: &'static str = "numeric-line";

    pub fn load(settings: &PageSettings) -> anyhow::Result<Self> {
        let mut chart = CartesianChart::new(Axis::number(), Axis::number());
        chart.width = 600;
        chart.height = 600;
        chart.padding = Padding::uniform(50.0);
        chart.theme = settings.theme;
        chart.export_dir = settings.export_dir.clone();
        chart.x_axis_mut().set_label_rotation(45.0);

        let mut line = LineSeries::new();
        line.line_width = 2.0;
        let series = chart.add_series(line);
        chart
            .line_series_mut(series)?
            .set_data_and_fields(generate_sin_data(), "x_value", "y_value");

        let mut document = Document::new();
        document.append(Node::Break);
        document.append(chart_surface("Numeric line", &chart));
        document.append(Node::Break);

        let mut controls = ControlPanel::new();
        let save = controls.add(
            &mut document,
            Node::button(SAVE_LABEL),
            |_, ctx: &mut NumericLineContext| {
                save_chart(&mut ctx.chart, "pie-chart", &mut ctx.downloads)
            },
        );
        let log_data = controls.add(
            &mut document,
            Node::button("Math.log data"),
            |_, ctx: &mut NumericLineContext| {
                ctx.set_data(generate_log_data())
            },
        );
        let spiral_data = controls.add(
            &mut document,
            Node::button("Spiral data"),
            |_, ctx: &mut NumericLineContext| {
                ctx.set_data(generate_spiral_data())
            },
        );
        let animate_sine = controls.add(
            &mut document,
            Node::button("Animate Math.sin data"),
            |_, ctx: &mut NumericLineContext| {
                ctx.animate("sine", SineSweep::new());
                Ok(())
            },
        );
        let animate_spiral = controls.add(
            &mut document,
            Node::button("Animate spiral data"),
            |_, ctx: &mut NumericLineContext| {
                ctx.animate("spiral", SpiralSweep::new());
                Ok(())
            },
        );

        document.append(Node::Break);
        let nice = controls.add(
            &mut document,
            Node::checkbox(NICE_LABEL, true),
            |e, ctx: &mut NumericLineContext| {
                ctx.set_nice(toggle_value(e)?);
                Ok(())
            },
        );

        document.append(Node::Break);
        let line_width = controls.add(
            &mut document,
            Node::Slider(Slider::new(0.0, 10.0, 0.5, 2.0)),
            |e, ctx: &mut NumericLineContext| {
                ctx.chart.line_series_mut(ctx.series)?.line_width = slider_value(e)?;
                Ok(())
            },
        );
        document.append(Node::Break);
        let marker_line_width = controls.add(
            &mut document,
            Node::Slider(Slider::new(0.0, 10.0, 0.5, 2.0)),
            |e, ctx: &mut NumericLineContext| {
                ctx.chart.line_series_mut(ctx.series)?.marker_line_width = slider_value(e)?;
                Ok(())
            },
        );
        document.append(Node::Break);
        let marker_radius = controls.add(
            &mut document,
            Node::Slider(Slider::new(0.0, 10.0, 0.5, 5.0)),
            |e, ctx: &mut NumericLineContext| {
                ctx.chart.line_series_mut(ctx.series)?.marker_radius = slider_value(e)?;
                Ok(())
            },
        );

        let context = NumericLineContext {
            chart,
            series,
            scheduler: AnimationScheduler::new(),
            downloads: Vec::new(),
        };
        Ok(Self {
            document,
            context,
            controls,
            save,
            log_data,
            spiral_data,
            animate_sine,
            animate_spiral,
            nice,
            line_width,
            marker_line_width,
            marker_radius,
        })
    }
}

impl SamplePage for NumericLinePage {
    fn name(&self) -> &'static str { Self::NAME }
    fn document(&self) -> &Document { &self.document }

    fn fire(&mut self, control: NodeId, event: ControlEvent) -> anyhow::Result<()> {
        self.controls.fire(&mut self.document, control, event, &mut self.context)
    }

    fn script(&self) -> Vec<ScriptStep> {
        vec![
            ScriptStep::click("log-data", self.log_data),
            ScriptStep::click("spiral-data", self.spiral_data),
            ScriptStep::send("nice-off", self.nice, ControlEvent::Toggle(false)),
            ScriptStep::click("animate-sine", self.animate_sine),
            ScriptStep::click("animate-spiral", self.animate_spiral),
            ScriptStep::send("nice-on", self.nice, ControlEvent::Toggle(true)),
            ScriptStep::send("line-width", self.line_width, ControlEvent::Input(6.0)),
            ScriptStep::send("marker-line-width", self.marker_line_width, ControlEvent::Input(1.0)),
            ScriptStep::send("marker-radius", self.marker_radius, ControlEvent::Input(3.5)),
            ScriptStep::save(self.save),
        ]
    }

    fn advance(&mut self, max_frames: u64) -> anyhow::Result<u64> {
        let ctx = &mut self.context;
        Ok(ctx.scheduler.run_to_completion(&mut ctx.chart, max_frames)?)
    }

    fn scenes(&mut self) -> Vec<(&'static str, Scene)> {
        vec![("line", self.context.chart.scene())]
    }

    fn write_csv(&self, dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
        let data = self
            .context
            .chart
            .series_at(self.context.series)
            .and_then(|s| s.as_line())
            .map(|l| l.data());
        let path = dir.join("numeric-line.csv");
        write_csv(&path, data.unwrap_or_default())?;
        Ok(vec![path])
    }

    fn downloads(&self) -> &[PathBuf] { &self.context.downloads }
}

// ---------------------------------------------------------------------------
// Duplicate categories
// ---------------------------------------------------------------------------

pub struct DuplicateCategoriesContext {
    pub line_chart: CartesianChart<DuplicateCategoryDatum>,
    pub line_series: SeriesId,
    pub bar_chart: CartesianChart<DuplicateCategoryDatum>,
    pub bar_series: SeriesId,
    pub downloads: Vec<PathBuf>,
}

/// Line and bar charts over countries whose labels repeat under distinct ids.
pub struct DuplicateCategoriesPage {
    pub document: Document,
    pub context: DuplicateCategoriesContext,
    controls: ControlPanel<DuplicateCategoriesContext>,
    pub save_line: NodeId,
    pub save_bar: NodeId,
}

impl DuplicateCategoriesPage {
    pub const NAME: &'static str = "duplicate-categories";

    pub fn load(settings: &PageSettings) -> anyhow::Result<Self> {
        let data = duplicate_category_data();

        let mut line_chart = CartesianChart::new(Axis::category(), Axis::number());
        line_chart.width = 800;
        line_chart.height = 500;
        line_chart.theme = settings.theme;
        line_chart.export_dir = settings.export_dir.clone();
        let mut line = LineSeries::new().with_data_and_fields(data.clone(), "country", "value");
        line.line_width = 4.0;
        line.tooltip = true;
        line.title = Some("Countries".into());
        let line_series = line_chart.set_series(vec![line.into()])[0];

        let mut bar_chart = CartesianChart::new(Axis::category(), Axis::number());
        bar_chart.width = 800;
        bar_chart.height = 500;
        bar_chart.theme = settings.theme;
        bar_chart.export_dir = settings.export_dir.clone();
        let mut bar = BarSeries::new();
        bar.line_width = 4.0;
        bar.tooltip = true;
        bar.set_data_and_fields(
            data,
            "country",
            vec!["value".into(), "other".into()],
            vec!["Countries".into(), "Whatever".into()],
        )?;
        let bar_series = bar_chart.set_series(vec![bar.into()])[0];

        let mut document = Document::new();
        let mut controls = ControlPanel::new();
        document.append(chart_surface("Countries (line)", &line_chart));
        document.append(Node::Break);
        let save_line = controls.add(
            &mut document,
            Node::button(SAVE_LABEL),
            |_, ctx: &mut DuplicateCategoriesContext| {
                save_chart(&mut ctx.line_chart, "line-chart", &mut ctx.downloads)
            },
        );
        document.append(Node::Break);
        document.append(chart_surface("Countries (bar)", &bar_chart));
        document.append(Node::Break);
        let save_bar = controls.add(
            &mut document,
            Node::button(SAVE_LABEL),
            |_, ctx: &mut DuplicateCategoriesContext| {
                save_chart(&mut ctx.bar_chart, "bar-chart", &mut ctx.downloads)
            },
        );

        let context = DuplicateCategoriesContext {
            line_chart,
            line_series,
            bar_chart,
            bar_series,
            downloads: Vec::new(),
        };
        Ok(Self { document, context, controls, save_line, save_bar })
    }
}

impl SamplePage for DuplicateCategoriesPage {
    fn name(&self) -> &'static str { Self::NAME }
    fn document(&self) -> &Document { &self.document }

    fn fire(&mut self, control: NodeId, event: ControlEvent) -> anyhow::Result<()> {
        self.controls.fire(&mut self.document, control, event, &mut self.context)
    }

    fn script(&self) -> Vec<ScriptStep> {
        vec![ScriptStep::save(self.save_line), ScriptStep::save(self.save_bar)]
    }

    fn scenes(&mut self) -> Vec<(&'static str, Scene)> {
        vec![("line", self.context.line_chart.scene()), ("bar", self.context.bar_chart.scene())]
    }

    fn write_csv(&self, dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
        let data = self
            .context
            .line_chart
            .series_at(self.context.line_series)
            .and_then(|s| s.as_line())
            .map(|l| l.data());
        let path = dir.join("duplicate-categories.csv");
        write_csv(&path, data.unwrap_or_default())?;
        Ok(vec![path])
    }

    fn downloads(&self) -> &[PathBuf] { &self.context.downloads }
}

/// Load every sample page in document order.
pub fn load_all(
    settings_for: impl Fn(&str) -> PageSettings,
) -> anyhow::Result<Vec<Box<dyn SamplePage>>> {
    Ok(vec![
        Box::new(CategoryLinePage::load(&settings_for(CategoryLinePage::NAME))?),
        Box::new(NumericLinePage::load(&settings_for(NumericLinePage::NAME))?),
        Box::new(DuplicateCategoriesPage::load(&settings_for(DuplicateCategoriesPage::NAME))?),
    ])
}
