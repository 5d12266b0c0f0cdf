// File: crates/cartesian-core/src/scale.rs
// Summary: Linear (number axis) and band (category axis) scales plus nice tick helpers.

/// Maps a continuous data domain onto a pixel range.
///
/// The range may be inverted (y axes map `min` to the bottom pixel).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span.abs() < 1e-12 {
            return r0 + (r1 - r0) * 0.5;
        }
        r0 + ((v - d0) / span) as f32 * (r1 - r0)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        if span.abs() < f32::EPSILON {
            return d0;
        }
        d0 + ((px - r0) / span) as f64 * (d1 - d0)
    }

    /// Tick values inside the domain, `count` being a hint.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = ordered(self.domain);
        let eps = (hi - lo).abs() * 1e-9;
        nice_ticks(lo, hi, count)
            .into_iter()
            .filter(|t| *t >= lo - eps && *t <= hi + eps)
            .collect()
    }
}

/// Maps `count` discrete bands onto a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandScale {
    pub range: (f32, f32),
    pub count: usize,
    pub padding_inner: f32,
    pub padding_outer: f32,
}

impl BandScale {
    pub fn new(range: (f32, f32), count: usize) -> Self {
        Self { range, count, padding_inner: 0.2, padding_outer: 0.3 }
    }

    pub fn with_padding(mut self, inner: f32, outer: f32) -> Self {
        self.padding_inner = inner.clamp(0.0, 1.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Width of one band in pixels.
    pub fn bandwidth(&self) -> f32 {
        if self.count == 0 {
            return 0.0;
        }
        self.step() * (1.0 - self.padding_inner)
    }

    fn step(&self) -> f32 {
        let n = self.count as f32;
        let span = (self.range.1 - self.range.0).abs();
        let denom = n - self.padding_inner + 2.0 * self.padding_outer;
        if denom <= 0.0 { 0.0 } else { span / denom }
    }

    /// Left edge of band `index`.
    pub fn start(&self, index: usize) -> f32 {
        let lo = self.range.0.min(self.range.1);
        let step = self.step();
        lo + step * self.padding_outer + step * index as f32
    }

    /// Center of band `index`.
    pub fn center(&self, index: usize) -> f32 {
        self.start(index) + self.bandwidth() * 0.5
    }
}

/// Expand `(min, max)` outward to round tick boundaries.
pub fn nice_domain(min: f64, max: f64, count: usize) -> (f64, f64) {
    let ticks = nice_ticks(min, max, count);
    match (ticks.first(), ticks.last()) {
        (Some(&a), Some(&b)) if ticks.len() >= 2 => (a, b),
        _ => (min, max),
    }
}

/// Round tick values covering `[min, max]`: steps of 1, 2, 5 times a power of ten.
pub fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return vec![min];
    }
    if min > max {
        std::mem::swap(&mut min, &mut max);
    }
    let step = nice_step((max - min) / count as f64);
    if step == 0.0 {
        return vec![min, max];
    }
    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;
    let n = ((stop - start) / step).round().clamp(0.0, 10_000.0) as usize;
    (0..=n).map(|i| start + step * i as f64).collect()
}

fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 0.0;
    }
    let base = 10_f64.powf(raw.log10().floor());
    let err = raw / base;
    let nice = if err >= 7.5 {
        10.0
    } else if err >= 3.5 {
        5.0
    } else if err >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

fn ordered((a, b): (f64, f64)) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}
