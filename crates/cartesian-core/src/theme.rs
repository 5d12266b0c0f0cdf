// File: crates/cartesian-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors and the series palette.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub marker_fill: skia::Color,
    /// Series colors, assigned round-robin by series (and bar field) index.
    pub palette: [skia::Color; 6],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            title: skia::Color::from_argb(255, 20, 20, 30),
            marker_fill: skia::Color::from_argb(255, 255, 255, 255),
            palette: [
                skia::Color::from_argb(255, 0xf3, 0x62, 0x2d),
                skia::Color::from_argb(255, 0xfb, 0xa7, 0x1b),
                skia::Color::from_argb(255, 0x57, 0xb7, 0x57),
                skia::Color::from_argb(255, 0x41, 0xa9, 0xc9),
                skia::Color::from_argb(255, 0x42, 0x58, 0xc9),
                skia::Color::from_argb(255, 0x9a, 0x42, 0xc8),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 235, 235, 245),
            marker_fill: skia::Color::from_argb(255, 18, 18, 20),
            palette: [
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 40, 200, 120),
                skia::Color::from_argb(255, 255, 230, 70),
                skia::Color::from_argb(255, 220, 80, 80),
                skia::Color::from_argb(255, 180, 120, 255),
                skia::Color::from_argb(255, 96, 156, 255),
            ],
        }
    }

    /// Palette color for slot `i`, wrapping around.
    pub fn color(&self, i: usize) -> skia::Color {
        self.palette[i % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
