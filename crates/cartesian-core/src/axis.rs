// File: crates/cartesian-core/src/axis.rs
// Summary: Axis model: category and number axes as one tagged type with capability queries.

use std::fmt;

use crate::datum::Category;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    Category,
    Number,
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisKind::Category => f.write_str("category"),
            AxisKind::Number => f.write_str("number"),
        }
    }
}

/// Axis over a discrete, ordered set of categories (one band per category id).
#[derive(Clone, Debug)]
pub struct CategoryAxis {
    pub title: Option<String>,
    /// Tick label rotation in degrees.
    pub label_rotation: f32,
    /// Gap between bands, as a fraction of the band step.
    pub padding_inner: f32,
    /// Gap before the first and after the last band, in band steps.
    pub padding_outer: f32,
    domain: Vec<Category>,
}

impl CategoryAxis {
    pub fn new() -> Self {
        Self { title: None, label_rotation: 0.0, padding_inner: 0.2, padding_outer: 0.3, domain: Vec::new() }
    }

    /// Categories of the last layout, in first-seen order.
    pub fn domain(&self) -> &[Category] { &self.domain }

    pub(crate) fn set_domain(&mut self, domain: Vec<Category>) { self.domain = domain; }
}

impl Default for CategoryAxis {
    fn default() -> Self { Self::new() }
}

/// Axis over a continuous numeric range.
#[derive(Clone, Debug)]
pub struct NumberAxis {
    pub title: Option<String>,
    /// Tick label rotation in degrees.
    pub label_rotation: f32,
    /// Expand the data domain to round tick boundaries.
    pub nice: bool,
    /// Desired tick count (a hint).
    pub tick_count: usize,
    /// Fixed domain overriding the one inferred from data.
    pub fixed_domain: Option<(f64, f64)>,
    domain: (f64, f64),
}

impl NumberAxis {
    pub fn new() -> Self {
        Self { title: None, label_rotation: 0.0, nice: true, tick_count: 10, fixed_domain: None, domain: (0.0, 1.0) }
    }

    /// Domain of the last layout (after nice rounding, when enabled).
    pub fn domain(&self) -> (f64, f64) { self.domain }

    pub(crate) fn set_domain(&mut self, domain: (f64, f64)) { self.domain = domain; }
}

impl Default for NumberAxis {
    fn default() -> Self { Self::new() }
}

#[derive(Clone, Debug)]
pub enum Axis {
    Category(CategoryAxis),
    Number(NumberAxis),
}

impl Axis {
    pub fn category() -> Self { Axis::Category(CategoryAxis::new()) }
    pub fn number() -> Self { Axis::Number(NumberAxis::new()) }

    pub fn kind(&self) -> AxisKind {
        match self {
            Axis::Category(_) => AxisKind::Category,
            Axis::Number(_) => AxisKind::Number,
        }
    }

    /// Whether this axis can round its domain to nice bounds.
    pub fn supports_nice(&self) -> bool {
        matches!(self, Axis::Number(_))
    }

    /// Current nice flag; `None` for axes without the capability.
    pub fn nice(&self) -> Option<bool> {
        match self {
            Axis::Number(a) => Some(a.nice),
            Axis::Category(_) => None,
        }
    }

    /// Sets the nice flag when supported. Returns whether the axis took the setting.
    pub fn set_nice(&mut self, nice: bool) -> bool {
        match self {
            Axis::Number(a) => {
                a.nice = nice;
                true
            }
            Axis::Category(_) => false,
        }
    }

    pub fn label_rotation(&self) -> f32 {
        match self {
            Axis::Category(a) => a.label_rotation,
            Axis::Number(a) => a.label_rotation,
        }
    }

    pub fn set_label_rotation(&mut self, degrees: f32) {
        match self {
            Axis::Category(a) => a.label_rotation = degrees,
            Axis::Number(a) => a.label_rotation = degrees,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Axis::Category(a) => a.title.as_deref(),
            Axis::Number(a) => a.title.as_deref(),
        }
    }

    pub fn as_number(&self) -> Option<&NumberAxis> {
        match self {
            Axis::Number(a) => Some(a),
            Axis::Category(_) => None,
        }
    }

    pub fn as_category(&self) -> Option<&CategoryAxis> {
        match self {
            Axis::Category(a) => Some(a),
            Axis::Number(_) => None,
        }
    }
}

impl From<CategoryAxis> for Axis {
    fn from(a: CategoryAxis) -> Self { Axis::Category(a) }
}

impl From<NumberAxis> for Axis {
    fn from(a: NumberAxis) -> Self { Axis::Number(a) }
}
