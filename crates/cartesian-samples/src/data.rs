// File: crates/cartesian-samples/src/data.rs
// Summary: Record types of the sample datasets and their field/CSV views.

use cartesian_core::{format_number, Category, Datum, FieldValue};

/// A labelled value on a category axis.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryDatum {
    pub category: Category,
    pub value: f64,
}

impl CategoryDatum {
    pub fn new(label: &str, value: f64) -> Self {
        Self { category: Category::new(label), value }
    }
}

impl Datum for CategoryDatum {
    fn field(&self, field: &str) -> Option<FieldValue> {
        match field {
            "category" => Some(self.category.clone().into()),
            "value" => Some(self.value.into()),
            _ => None,
        }
    }
}

/// Country record whose label may repeat; identity lives in the category id.
#[derive(Clone, Debug, PartialEq)]
pub struct DuplicateCategoryDatum {
    pub country: Category,
    pub value: f64,
    pub other: f64,
}

impl Datum for DuplicateCategoryDatum {
    fn field(&self, field: &str) -> Option<FieldValue> {
        match field {
            "country" => Some(self.country.clone().into()),
            "value" => Some(self.value.into()),
            "other" => Some(self.other.into()),
            _ => None,
        }
    }
}

/// A point with numeric x and y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumericDatum {
    pub x_value: f64,
    pub y_value: f64,
}

impl NumericDatum {
    pub fn new(x_value: f64, y_value: f64) -> Self {
        Self { x_value, y_value }
    }
}

impl Datum for NumericDatum {
    fn field(&self, field: &str) -> Option<FieldValue> {
        match field {
            "x_value" => Some(self.x_value.into()),
            "y_value" => Some(self.y_value.into()),
            _ => None,
        }
    }
}

/// Flat row view used by the CSV dump.
pub trait CsvRecord {
    fn headers() -> &'static [&'static str];
    fn record(&self) -> Vec<String>;
}

impl CsvRecord for CategoryDatum {
    fn headers() -> &'static [&'static str] { &["category", "value"] }
    fn record(&self) -> Vec<String> {
        vec![self.category.label().to_string(), self.value.to_string()]
    }
}

impl CsvRecord for DuplicateCategoryDatum {
    fn headers() -> &'static [&'static str] { &["id", "country", "value", "other"] }
    fn record(&self) -> Vec<String> {
        vec![
            self.country.id().to_string(),
            self.country.label().to_string(),
            format_number(self.value),
            format_number(self.other),
        ]
    }
}

impl CsvRecord for NumericDatum {
    fn headers() -> &'static [&'static str] { &["x_value", "y_value"] }
    fn record(&self) -> Vec<String> {
        vec![self.x_value.to_string(), self.y_value.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_selected_by_name() {
        let d = DuplicateCategoryDatum { country: Category::with_id("France", "2"), value: 6.0, other: 2.0 };
        assert_eq!(d.field("country").map(|v| v.to_string()).as_deref(), Some("France"));
        assert_eq!(d.field("other").and_then(|v| v.as_number()), Some(2.0));
        assert_eq!(d.field("missing"), None);
        assert_eq!(NumericDatum::new(1.0, 2.0).field("y_value").and_then(|v| v.as_number()), Some(2.0));
    }
}
