// File: crates/cartesian-core/src/lib.rs
// Summary: Core library entry point; exports the cartesian chart model, layout and scene export.

pub mod axis;
pub mod chart;
pub mod datum;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod scale;
pub mod scene;
pub mod series;
pub mod theme;
pub mod types;

pub use axis::{Axis, AxisKind, CategoryAxis, NumberAxis};
pub use chart::{AxisScale, CartesianChart, ChartLayout, Tooltip};
pub use datum::{format_number, Category, Datum, FieldValue};
pub use error::{ChartError, Result};
pub use scene::{Mark, MarkKind, MarkRole, RenderOptions, Scene, TextAnchor};
pub use series::{BarSeries, LineSeries, Series, SeriesId, SeriesType};
pub use theme::Theme;
pub use types::Padding;
