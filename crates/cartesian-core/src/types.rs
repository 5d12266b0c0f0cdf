// File: crates/cartesian-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings).

/// Default chart width in pixels.
pub const WIDTH: u32 = 800;
/// Default chart height in pixels.
pub const HEIGHT: u32 = 600;

/// Chart padding around the plot and its axes, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    /// Create a new padding; negative sides are clamped to zero.
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top: top.max(0.0), right: right.max(0.0), bottom: bottom.max(0.0), left: left.max(0.0) }
    }
    /// Same padding on all four sides.
    pub fn uniform(v: f32) -> Self { Self::new(v, v, v, v) }
}

impl Default for Padding {
    fn default() -> Self {
        Self::uniform(20.0)
    }
}
