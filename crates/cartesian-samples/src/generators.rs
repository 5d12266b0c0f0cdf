// File: crates/cartesian-samples/src/generators.rs
// Summary: Synthetic dataset generators (random categories, sine, log, spiral) and static sample sets.
// Notes:
// - Sample positions come from an integer index (`start + k * step`); counts never drift.
// - Generators never fail; non-finite results (e.g. log of a non-positive x) are returned as-is.

use cartesian_core::Category;
use rand::Rng;

use crate::data::{CategoryDatum, DuplicateCategoryDatum, NumericDatum};

/// Step of the sine and spiral generators.
pub const STEP: f64 = 0.1;
/// Upper bound (exclusive) of generated random category counts.
pub const MAX_RANDOM_RECORDS: usize = 50;

/// Upper bound on the records a single generator call produces.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Number of samples `start + k * step` strictly below `end`, at most [`MAX_SAMPLES`].
pub fn sample_count(start: f64, end: f64, step: f64) -> usize {
    let raw = (end - start) / step;
    if step <= 0.0 || !raw.is_finite() || raw <= 0.0 {
        return 0;
    }
    let n = (raw - 1e-9).ceil();
    if n >= MAX_SAMPLES as f64 { MAX_SAMPLES } else { n as usize }
}

/// Sample positions `start, start + step, ..` strictly below `end`.
pub fn samples(start: f64, end: f64, step: f64) -> impl Iterator<Item = f64> {
    (0..sample_count(start, end, step)).map(move |k| start + step * k as f64)
}

/// `n` records labelled `A1..An` with values uniform in `[0, 10)`.
pub fn generate_category_data<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<CategoryDatum> {
    (0..n)
        .map(|i| CategoryDatum::new(&format!("A{}", i + 1), rng.gen_range(0.0..10.0)))
        .collect()
}

/// Random record count for the "Change data" control, in `[0, 50)`.
pub fn random_record_count<R: Rng + ?Sized>(rng: &mut R) -> usize {
    rng.gen_range(0..MAX_RANDOM_RECORDS)
}

/// `y = sin(x)` for x from -10 (inclusive) to 10 (exclusive).
pub fn generate_sin_data() -> Vec<NumericDatum> {
    samples(-10.0, 10.0, STEP).map(sine_point).collect()
}

pub fn sine_point(x: f64) -> NumericDatum {
    NumericDatum::new(x, x.sin())
}

/// `y = ln(x)` for x = 1, 11, 21, .. below 1000.
pub fn generate_log_data() -> Vec<NumericDatum> {
    log_data_from(1.0, 1000.0, 10.0)
}

/// `y = ln(x)` over an arbitrary range; x <= 0 yields non-finite y.
/// At most [`MAX_SAMPLES`] records are produced.
pub fn log_data_from(start: f64, end: f64, step: f64) -> Vec<NumericDatum> {
    samples(start, end, step).map(|x| NumericDatum::new(x, x.ln())).collect()
}

/// Archimedean spiral `r = 1 + θ` for θ from 1 (inclusive) to 50 (exclusive).
pub fn generate_spiral_data() -> Vec<NumericDatum> {
    samples(1.0, 50.0, STEP).map(spiral_point).collect()
}

pub fn spiral_point(theta: f64) -> NumericDatum {
    const A: f64 = 1.0;
    const B: f64 = 1.0;
    let r = A + B * theta;
    NumericDatum::new(r * theta.cos(), r * theta.sin())
}

/// Eight named people.
pub fn category_sample_data() -> Vec<CategoryDatum> {
    [("John", 3.0), ("Nige", 7.0), ("Vicky", 6.0), ("Rick", 4.0), ("Lucy", 8.0), ("Ben", 5.0), ("Barbara", 6.0), ("Maria", 3.0)]
        .into_iter()
        .map(|(name, value)| CategoryDatum::new(name, value))
        .collect()
}

/// Five countries; "France" and "Italy" repeat under distinct ids.
pub fn duplicate_category_data() -> Vec<DuplicateCategoryDatum> {
    [("France", 3.0, 2.0), ("Italy", 7.0, 3.0), ("France", 6.0, 2.0), ("Italy", 4.0, 5.0), ("Italy", 8.0, 3.0)]
        .into_iter()
        .enumerate()
        .map(|(i, (label, value, other))| DuplicateCategoryDatum {
            country: Category::with_id(label, i.to_string()),
            value,
            other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn category_data_has_requested_count_and_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in [0, 1, 49] {
            let data = generate_category_data(n, &mut rng);
            assert_eq!(data.len(), n);
            assert!(data.iter().all(|d| (0.0..10.0).contains(&d.value)));
        }
        let data = generate_category_data(3, &mut rng);
        let labels: Vec<&str> = data.iter().map(|d| d.category.label()).collect();
        assert_eq!(labels, ["A1", "A2", "A3"]);
    }

    #[test]
    fn random_count_stays_below_fifty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!((0..500).all(|_| random_record_count(&mut rng) < MAX_RANDOM_RECORDS));
    }

    #[test]
    fn sine_covers_minus_ten_to_just_under_ten() {
        let data = generate_sin_data();
        assert_eq!(data.len(), 200);
        assert_eq!(data[0].x_value, -10.0);
        let last = data[data.len() - 1];
        assert!((last.x_value - 9.9).abs() < 1e-9);
        assert!(data.iter().all(|d| (d.y_value - d.x_value.sin()).abs() < 1e-12));
    }

    #[test]
    fn log_data_counts_and_values() {
        let data = generate_log_data();
        assert_eq!(data.len(), 100);
        assert_eq!(data[1].x_value, 11.0);
        assert_eq!(data[0].y_value, 0.0);
        assert_eq!(data[99].x_value, 991.0);
    }

    #[test]
    fn log_of_non_positive_is_not_finite() {
        let data = log_data_from(-1.0, 1.0, 1.0);
        assert_eq!(data.len(), 2);
        assert!(data[0].y_value.is_nan());
        assert_eq!(data[1].y_value, f64::NEG_INFINITY);
    }

    #[test]
    fn huge_ranges_are_capped() {
        assert_eq!(sample_count(1.0, 1e12, 1e-3), MAX_SAMPLES);
        assert_eq!(sample_count(0.0, 1.0, 0.0), 0);
        assert_eq!(sample_count(1.0, 0.0, 0.1), 0);
    }

    #[test]
    fn spiral_radius_grows_with_theta() {
        let data = generate_spiral_data();
        assert_eq!(data.len(), 490);
        for (k, d) in data.iter().enumerate() {
            let theta = 1.0 + STEP * k as f64;
            let r = (d.x_value * d.x_value + d.y_value * d.y_value).sqrt();
            assert!((r - (1.0 + theta)).abs() < 1e-9);
        }
    }

    #[test]
    fn duplicate_countries_share_labels_not_ids() {
        let data = duplicate_category_data();
        assert_eq!(data[0].country.label(), data[2].country.label());
        assert_ne!(data[0].country.id(), data[2].country.id());
        assert_eq!(category_sample_data().len(), 8);
    }
}
