// File: crates/cartesian-core/src/domain.rs
// Summary: Domain inference over all series of a chart (numeric extents, category sets).

use std::collections::HashSet;

use crate::axis::NumberAxis;
use crate::datum::{Category, Datum};
use crate::scale::nice_domain;
use crate::series::Series;

/// Which axis a value feeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dim {
    X,
    Y,
}

/// Numeric extent of every finite value feeding `dim`.
///
/// Bars contribute their stacked totals (or raw values when grouped) and the zero
/// baseline. Returns `None` when no finite value is present.
pub fn number_extent<D: Datum>(series: &[Series<D>], dim: Dim) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    let mut push = |v: f64| {
        if v.is_finite() {
            lo = lo.min(v);
            hi = hi.max(v);
        }
    };
    for s in series {
        match (s, dim) {
            (Series::Line(l), Dim::X) => {
                l.data().iter().filter_map(|d| d.field(l.x_field())?.as_number()).for_each(&mut push);
            }
            (Series::Line(l), Dim::Y) => {
                l.data().iter().filter_map(|d| d.field(l.y_field())?.as_number()).for_each(&mut push);
            }
            (Series::Bar(b), Dim::X) => {
                b.data().iter().filter_map(|d| d.field(b.x_field())?.as_number()).for_each(&mut push);
            }
            (Series::Bar(b), Dim::Y) => {
                if b.data().is_empty() {
                    continue;
                }
                push(0.0);
                for d in b.data() {
                    let values = b.y_fields().iter().filter_map(|f| d.field(f)?.as_number()).filter(|v| v.is_finite());
                    if b.grouped {
                        values.for_each(&mut push);
                    } else {
                        let (mut pos, mut neg) = (0.0, 0.0);
                        for v in values {
                            if v >= 0.0 { pos += v } else { neg += v }
                        }
                        push(pos);
                        push(neg);
                    }
                }
            }
        }
    }
    if lo.is_finite() && hi.is_finite() { Some((lo, hi)) } else { None }
}

/// Distinct categories feeding `dim`, keyed by id, in first-seen order across series.
pub fn category_domain<D: Datum>(series: &[Series<D>], dim: Dim) -> Vec<Category> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    let mut push = |c: Category| {
        if seen.insert(c.id().to_string()) {
            out.push(c);
        }
    };
    for s in series {
        match (s, dim) {
            (Series::Line(l), Dim::X) => l.data().iter().filter_map(|d| d.field(l.x_field())).for_each(|v| push(v.to_category())),
            (Series::Line(l), Dim::Y) => l.data().iter().filter_map(|d| d.field(l.y_field())).for_each(|v| push(v.to_category())),
            (Series::Bar(b), Dim::X) => b.data().iter().filter_map(|d| d.field(b.x_field())).for_each(|v| push(v.to_category())),
            (Series::Bar(b), Dim::Y) => {
                for d in b.data() {
                    b.y_fields().iter().filter_map(|f| d.field(f)).for_each(|v| push(v.to_category()));
                }
            }
        }
    }
    out
}

/// Final domain of a number axis: fixed domain, else data extent (or `[0, 1]` without
/// data), widened when degenerate, then nice-rounded when enabled.
pub fn resolve_number_domain(axis: &NumberAxis, extent: Option<(f64, f64)>) -> (f64, f64) {
    if let Some(fixed) = axis.fixed_domain {
        return fixed;
    }
    let (mut lo, mut hi) = extent.unwrap_or((0.0, 1.0));
    if (hi - lo).abs() < 1e-9 {
        lo -= 0.5;
        hi += 0.5;
    }
    if axis.nice { nice_domain(lo, hi, axis.tick_count.max(1)) } else { (lo, hi) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{BarSeries, LineSeries};

    #[test]
    fn stacked_bars_extend_to_totals_and_zero() {
        let mut bar = BarSeries::<(f64, f64)>::new();
        bar.set_data_and_fields(vec![(0.0, 3.0), (1.0, 4.0)], "x", vec!["x".into(), "y".into()], Vec::new())
            .unwrap();
        let series = vec![Series::Bar(bar)];
        assert_eq!(number_extent(&series, Dim::Y), Some((0.0, 5.0)));
    }

    #[test]
    fn extent_skips_non_finite_values() {
        let line = LineSeries::new().with_data_and_fields(vec![(0.0, f64::NEG_INFINITY), (2.0, 1.0)], "x", "y");
        let series = vec![Series::Line(line)];
        assert_eq!(number_extent(&series, Dim::Y), Some((1.0, 1.0)));
        assert_eq!(number_extent(&series, Dim::X), Some((0.0, 2.0)));
    }

    #[test]
    fn empty_number_domain_defaults_to_unit() {
        let mut axis = NumberAxis::new();
        axis.nice = false;
        assert_eq!(resolve_number_domain(&axis, None), (0.0, 1.0));
    }
}
