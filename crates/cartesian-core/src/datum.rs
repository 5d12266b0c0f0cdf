// File: crates/cartesian-core/src/datum.rs
// Summary: Record access by field name; category keys with label/identity split.

use std::fmt;

/// A categorical value: a printable label plus a stable identity.
///
/// Two categories are the same band on a category axis only when their ids match;
/// the label is what gets printed. Repeated labels with distinct ids are allowed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Category {
    label: String,
    id: String,
}

impl Category {
    /// Category whose identity is its label.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self { id: label.clone(), label }
    }

    /// Category with an identity decoupled from the printed label.
    pub fn with_id(label: impl Into<String>, id: impl Into<String>) -> Self {
        Self { label: label.into(), id: id.into() }
    }

    pub fn label(&self) -> &str { &self.label }
    pub fn id(&self) -> &str { &self.id }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self { Self::new(label) }
}

/// A single field read from a record.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Category(Category),
}

impl FieldValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(v) => Some(*v),
            FieldValue::Category(_) => None,
        }
    }

    /// Category view of the value. Numbers are keyed by their exact value and
    /// labelled with the compact form.
    pub fn to_category(&self) -> Category {
        match self {
            FieldValue::Number(v) => Category::with_id(format_number(*v), v.to_string()),
            FieldValue::Category(c) => c.clone(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(v) => f.write_str(&format_number(*v)),
            FieldValue::Category(c) => c.fmt(f),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self { FieldValue::Number(v) }
}

impl From<Category> for FieldValue {
    fn from(c: Category) -> Self { FieldValue::Category(c) }
}

/// A record whose attributes can be selected by field name.
pub trait Datum {
    /// Returns the value of `field`, or `None` when the record has no such field.
    fn field(&self, field: &str) -> Option<FieldValue>;
}

/// Plain `(x, y)` pairs expose fields `"x"` and `"y"`.
impl Datum for (f64, f64) {
    fn field(&self, field: &str) -> Option<FieldValue> {
        match field {
            "x" => Some(FieldValue::Number(self.0)),
            "y" => Some(FieldValue::Number(self.1)),
            _ => None,
        }
    }
}

/// Compact number formatting for labels and tooltips: integers without decimals,
/// everything else with at most four fractional digits and no trailing zeros.
pub fn format_number(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    if v.fract() == 0.0 && v.abs() < 1e15 {
        return format!("{v:.0}");
    }
    let s = format!("{v:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_labels_keep_distinct_identity() {
        let a = Category::with_id("France", "0");
        let b = Category::with_id("France", "2");
        assert_eq!(a.to_string(), b.to_string());
        assert_ne!(a, b);
    }

    #[test]
    fn close_numbers_stay_distinct_categories() {
        let a = FieldValue::Number(0.00001).to_category();
        let b = FieldValue::Number(0.00002).to_category();
        assert_eq!(a.label(), b.label());
        assert_ne!(a.id(), b.id());
        assert_eq!(FieldValue::Number(1.0).to_category().label(), "1");
    }

    #[test]
    fn number_formatting_is_compact() {
        assert_eq!(format_number(17.0), "17");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(2.302585), "2.3026");
        assert_eq!(format_number(-0.00001), "0");
    }
}
