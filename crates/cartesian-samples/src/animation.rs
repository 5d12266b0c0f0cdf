// File: crates/cartesian-samples/src/animation.rs
// Summary: Frame-by-frame data animations as iterators, driven by a host-owned scheduler.
// Notes:
// - One `tick` stands for one display refresh: every running animation advances one frame.
// - Each frame appends one point and reassigns the whole accumulated dataset to the series.

use cartesian_core::{CartesianChart, Datum, SeriesId};
use tracing::{debug, info};

use crate::data::NumericDatum;
use crate::generators::{sine_point, spiral_point, STEP};

/// One animation frame: the new point and whether more frames follow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame<T> {
    pub datum: T,
    pub more: bool,
}

/// `start, start + step, ..` up to and including `end`; the last value is exactly `end`.
#[derive(Clone, Debug)]
struct Steps {
    start: f64,
    end: f64,
    step: f64,
    next: usize,
    last: usize,
}

impl Steps {
    fn new(start: f64, end: f64, step: f64) -> Self {
        let raw = (end - start) / step;
        let last = if raw.is_finite() && raw > 0.0 { (raw - 1e-9).ceil() as usize } else { 0 };
        Self { start, end, step, next: 0, last }
    }
}

impl Iterator for Steps {
    type Item = (f64, bool);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.last {
            return None;
        }
        let k = self.next;
        self.next += 1;
        let v = if k == self.last { self.end } else { self.start + self.step * k as f64 };
        Some((v, k < self.last))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.last + 1).saturating_sub(self.next);
        (n, Some(n))
    }
}

/// Sine points for x from -10 to 10 inclusive.
#[derive(Clone, Debug)]
pub struct SineSweep(Steps);

impl SineSweep {
    pub fn new() -> Self { Self(Steps::new(-10.0, 10.0, STEP)) }
}

impl Default for SineSweep {
    fn default() -> Self { Self::new() }
}

impl Iterator for SineSweep {
    type Item = Frame<NumericDatum>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(x, more)| Frame { datum: sine_point(x), more })
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

/// Spiral points for θ from 1 to 50 inclusive.
#[derive(Clone, Debug)]
pub struct SpiralSweep(Steps);

impl SpiralSweep {
    pub fn new() -> Self { Self(Steps::new(1.0, 50.0, STEP)) }
}

impl Default for SpiralSweep {
    fn default() -> Self { Self::new() }
}

impl Iterator for SpiralSweep {
    type Item = Frame<NumericDatum>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(theta, more)| Frame { datum: spiral_point(theta), more })
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Running,
    Finished,
}

/// Accumulates frames into a line series.
pub struct Animation<D> {
    name: String,
    series: SeriesId,
    x_field: String,
    y_field: String,
    frames: Box<dyn Iterator<Item = Frame<D>>>,
    data: Vec<D>,
}

impl<D: Clone + Datum> Animation<D> {
    pub fn new(
        name: impl Into<String>,
        series: SeriesId,
        x_field: impl Into<String>,
        y_field: impl Into<String>,
        frames: impl Iterator<Item = Frame<D>> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            series,
            x_field: x_field.into(),
            y_field: y_field.into(),
            frames: Box::new(frames),
            data: Vec::new(),
        }
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn series(&self) -> SeriesId { self.series }
    /// Points accumulated so far.
    pub fn data(&self) -> &[D] { &self.data }

    /// Append the next frame and reassign the accumulated data to the series.
    pub fn step(&mut self, chart: &mut CartesianChart<D>) -> cartesian_core::Result<StepStatus> {
        let Some(frame) = self.frames.next() else {
            return Ok(StepStatus::Finished);
        };
        self.data.push(frame.datum);
        chart
            .line_series_mut(self.series)?
            .set_data_and_fields(self.data.clone(), self.x_field.as_str(), self.y_field.as_str());
        Ok(if frame.more { StepStatus::Running } else { StepStatus::Finished })
    }
}

/// Host-owned refresh loop. Animations are keyed by target series: starting one on a
/// series that is already animating replaces the running one.
pub struct AnimationScheduler<D> {
    running: Vec<Animation<D>>,
}

impl<D> Default for AnimationScheduler<D> {
    fn default() -> Self {
        Self { running: Vec::new() }
    }
}

impl<D: Clone + Datum> AnimationScheduler<D> {
    pub fn new() -> Self { Self::default() }

    pub fn start(&mut self, animation: Animation<D>) {
        if let Some(pos) = self.running.iter().position(|a| a.series == animation.series) {
            let old = self.running.remove(pos);
            debug!(series = %old.series, old = old.name(), new = animation.name(), "animation superseded");
        }
        info!(series = %animation.series, name = animation.name(), "animation started");
        self.running.push(animation);
    }

    /// One display refresh: step every running animation once.
    /// Returns the number of animations still running.
    pub fn tick(&mut self, chart: &mut CartesianChart<D>) -> cartesian_core::Result<usize> {
        let mut i = 0;
        while i < self.running.len() {
            match self.running[i].step(chart) {
                Ok(StepStatus::Running) => i += 1,
                Ok(StepStatus::Finished) => {
                    let done = self.running.remove(i);
                    info!(name = done.name(), points = done.data.len(), "animation finished");
                }
                Err(e) => {
                    self.running.remove(i);
                    return Err(e);
                }
            }
        }
        Ok(self.running.len())
    }

    /// Tick until idle or `max_frames` refreshes have elapsed; returns the refreshes run.
    pub fn run_to_completion(&mut self, chart: &mut CartesianChart<D>, max_frames: u64) -> cartesian_core::Result<u64> {
        let mut ticks = 0;
        while !self.is_idle() && ticks < max_frames {
            self.tick(chart)?;
            ticks += 1;
        }
        if !self.is_idle() {
            debug!(running = self.running.len(), max_frames, "frame budget exhausted");
        }
        Ok(ticks)
    }

    pub fn is_idle(&self) -> bool { self.running.is_empty() }

    /// Stop the animation targeting `series`; returns whether one was running.
    pub fn cancel(&mut self, series: SeriesId) -> bool {
        let before = self.running.len();
        self.running.retain(|a| a.series != series);
        before != self.running.len()
    }

    pub fn running(&self) -> impl Iterator<Item = &Animation<D>> { self.running.iter() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sine_sweep_ends_exactly_at_ten() {
        let frames: Vec<_> = SineSweep::new().collect();
        assert_eq!(frames.len(), 201);
        assert_eq!(frames[0].datum.x_value, -10.0);
        let last = frames[frames.len() - 1];
        assert_eq!(last.datum.x_value, 10.0);
        assert!(!last.more);
        assert!(frames[..200].iter().all(|f| f.more));
    }

    #[test]
    fn spiral_sweep_ends_at_fifty() {
        let sweep = SpiralSweep::new();
        assert_eq!(sweep.size_hint(), (491, Some(491)));
        let last = sweep.last().unwrap();
        let r = (last.datum.x_value.powi(2) + last.datum.y_value.powi(2)).sqrt();
        assert!((r - 51.0).abs() < 1e-9);
    }
}
