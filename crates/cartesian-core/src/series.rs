// File: crates/cartesian-core/src/series.rs
// Summary: Series model for line and bar geometry, with field selectors into typed records.
// Notes:
// - Data is always replaced wholesale (`set_data*`); there is no incremental diffing.
// - Visual fields are public and can be assigned directly; the owning chart marks
//   itself for re-layout whenever a series is borrowed mutably.

use std::fmt;

use skia_safe as skia;

use crate::datum::{format_number, Datum};
use crate::error::{ChartError, Result};

/// Position of a series inside its chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeriesId(pub(crate) usize);

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    Bar,
}

impl fmt::Display for SeriesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesType::Line => f.write_str("line"),
            SeriesType::Bar => f.write_str("bar"),
        }
    }
}

/// A polyline through the records, with optional circular markers.
#[derive(Clone, Debug)]
pub struct LineSeries<D> {
    data: Vec<D>,
    x_field: String,
    y_field: String,
    pub line_width: f32,
    pub marker_line_width: f32,
    pub marker_radius: f32,
    pub tooltip: bool,
    pub title: Option<String>,
    /// Stroke color; the theme palette is used when unset.
    pub stroke: Option<skia::Color>,
    /// Marker fill; the theme's marker fill is used when unset.
    pub marker_fill: Option<skia::Color>,
}

impl<D> LineSeries<D> {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            x_field: String::new(),
            y_field: String::new(),
            line_width: 2.0,
            marker_line_width: 2.0,
            marker_radius: 5.0,
            tooltip: false,
            title: None,
            stroke: None,
            marker_fill: None,
        }
    }

    pub fn data(&self) -> &[D] { &self.data }
    pub fn x_field(&self) -> &str { &self.x_field }
    pub fn y_field(&self) -> &str { &self.y_field }

    /// Replace the data, keeping the current field selectors.
    pub fn set_data(&mut self, data: Vec<D>) { self.data = data; }

    pub fn set_fields(&mut self, x_field: impl Into<String>, y_field: impl Into<String>) {
        self.x_field = x_field.into();
        self.y_field = y_field.into();
    }

    /// Replace the data and the field selectors in one step.
    pub fn set_data_and_fields(&mut self, data: Vec<D>, x_field: impl Into<String>, y_field: impl Into<String>) {
        self.data = data;
        self.set_fields(x_field, y_field);
    }

    pub fn with_data_and_fields(mut self, data: Vec<D>, x_field: &str, y_field: &str) -> Self {
        self.set_data_and_fields(data, x_field, y_field);
        self
    }
}

impl<D> Default for LineSeries<D> {
    fn default() -> Self { Self::new() }
}

/// Vertical bars, one per record and y field; several y fields stack unless `grouped`.
#[derive(Clone, Debug)]
pub struct BarSeries<D> {
    data: Vec<D>,
    x_field: String,
    y_fields: Vec<String>,
    y_field_names: Vec<String>,
    pub line_width: f32,
    pub tooltip: bool,
    pub title: Option<String>,
    /// Place the bars of each y field side by side instead of stacking them.
    pub grouped: bool,
    /// Fill colors per y field; the theme palette is used for missing entries.
    pub fills: Vec<skia::Color>,
    /// Outline color; defaults to the theme's axis line color.
    pub stroke: Option<skia::Color>,
}

impl<D> BarSeries<D> {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            x_field: String::new(),
            y_fields: Vec::new(),
            y_field_names: Vec::new(),
            line_width: 1.0,
            tooltip: false,
            title: None,
            grouped: false,
            fills: Vec::new(),
            stroke: None,
        }
    }

    pub fn data(&self) -> &[D] { &self.data }
    pub fn x_field(&self) -> &str { &self.x_field }
    pub fn y_fields(&self) -> &[String] { &self.y_fields }

    /// Display names paired 1:1 with `y_fields`; the field names stand in when unset.
    pub fn y_field_names(&self) -> &[String] {
        if self.y_field_names.is_empty() { &self.y_fields } else { &self.y_field_names }
    }

    pub fn set_data(&mut self, data: Vec<D>) { self.data = data; }

    /// Set the y fields and their display names.
    ///
    /// `names` must be empty (use the field names) or have one entry per field;
    /// otherwise the series is left unchanged and `FieldNameMismatch` is returned.
    pub fn set_y_fields(&mut self, fields: Vec<String>, names: Vec<String>) -> Result<()> {
        if !names.is_empty() && names.len() != fields.len() {
            return Err(ChartError::FieldNameMismatch { fields: fields.len(), names: names.len() });
        }
        self.y_fields = fields;
        self.y_field_names = names;
        Ok(())
    }

    /// Replace data and all field selectors; validated like [`BarSeries::set_y_fields`].
    pub fn set_data_and_fields(
        &mut self,
        data: Vec<D>,
        x_field: impl Into<String>,
        y_fields: Vec<String>,
        y_field_names: Vec<String>,
    ) -> Result<()> {
        self.set_y_fields(y_fields, y_field_names)?;
        self.x_field = x_field.into();
        self.data = data;
        Ok(())
    }
}

impl<D> Default for BarSeries<D> {
    fn default() -> Self { Self::new() }
}

#[derive(Clone, Debug)]
pub enum Series<D> {
    Line(LineSeries<D>),
    Bar(BarSeries<D>),
}

impl<D> Series<D> {
    pub fn series_type(&self) -> SeriesType {
        match self {
            Series::Line(_) => SeriesType::Line,
            Series::Bar(_) => SeriesType::Bar,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Series::Line(s) => s.data.len(),
            Series::Bar(s) => s.data.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn title(&self) -> Option<&str> {
        match self {
            Series::Line(s) => s.title.as_deref(),
            Series::Bar(s) => s.title.as_deref(),
        }
    }

    pub fn tooltip_enabled(&self) -> bool {
        match self {
            Series::Line(s) => s.tooltip,
            Series::Bar(s) => s.tooltip,
        }
    }

    pub fn x_field(&self) -> &str {
        match self {
            Series::Line(s) => &s.x_field,
            Series::Bar(s) => &s.x_field,
        }
    }

    pub fn as_line(&self) -> Option<&LineSeries<D>> {
        match self {
            Series::Line(s) => Some(s),
            Series::Bar(_) => None,
        }
    }

    pub fn as_line_mut(&mut self) -> Option<&mut LineSeries<D>> {
        match self {
            Series::Line(s) => Some(s),
            Series::Bar(_) => None,
        }
    }

    pub fn as_bar(&self) -> Option<&BarSeries<D>> {
        match self {
            Series::Bar(s) => Some(s),
            Series::Line(_) => None,
        }
    }

    pub fn as_bar_mut(&mut self) -> Option<&mut BarSeries<D>> {
        match self {
            Series::Bar(s) => Some(s),
            Series::Line(_) => None,
        }
    }
}

impl<D: Datum> Series<D> {
    fn datum(&self, index: usize) -> Option<&D> {
        match self {
            Series::Line(s) => s.data.get(index),
            Series::Bar(s) => s.data.get(index),
        }
    }

    /// Tooltip text for record `index` and y field slot `field` (always 0 for lines),
    /// e.g. `"Countries\nFrance: 3"`.
    pub fn tooltip_text(&self, index: usize, field: usize) -> Option<String> {
        let datum = self.datum(index)?;
        let x = datum.field(self.x_field())?;
        let (heading, y_field) = match self {
            Series::Line(s) => (s.title.clone(), s.y_field.as_str()),
            Series::Bar(s) => {
                let name = s.y_field_names().get(field)?.clone();
                (Some(name), s.y_fields.get(field)?.as_str())
            }
        };
        let y = datum.field(y_field)?.as_number()?;
        let body = format!("{x}: {}", format_number(y));
        Some(match heading {
            Some(h) => format!("{h}\n{body}"),
            None => body,
        })
    }
}

impl<D> From<LineSeries<D>> for Series<D> {
    fn from(s: LineSeries<D>) -> Self { Series::Line(s) }
}

impl<D> From<BarSeries<D>> for Series<D> {
    fn from(s: BarSeries<D>) -> Self { Series::Bar(s) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bar_rejects_mismatched_names_and_keeps_state() {
        let mut bar = BarSeries::<(f64, f64)>::new();
        bar.set_data_and_fields(vec![(0.0, 1.0)], "x", strings(&["y"]), strings(&["Y"])).unwrap();

        let err = bar
            .set_data_and_fields(Vec::new(), "x", strings(&["y", "x"]), strings(&["only one"]))
            .unwrap_err();
        assert!(matches!(err, ChartError::FieldNameMismatch { fields: 2, names: 1 }));
        assert_eq!(bar.data().len(), 1);
        assert_eq!(bar.y_field_names(), &strings(&["Y"])[..]);
    }

    #[test]
    fn bar_names_default_to_fields() {
        let mut bar = BarSeries::<(f64, f64)>::new();
        bar.set_y_fields(strings(&["y"]), Vec::new()).unwrap();
        assert_eq!(bar.y_field_names(), &strings(&["y"])[..]);
    }

    #[test]
    fn line_tooltip_uses_title_and_fields() {
        let mut line = LineSeries::new().with_data_and_fields(vec![(1.0, 2.5)], "x", "y");
        line.title = Some("Sine".into());
        let series = Series::from(line);
        assert_eq!(series.tooltip_text(0, 0).as_deref(), Some("Sine\n1: 2.5"));
        assert_eq!(series.tooltip_text(1, 0), None);
    }
}
