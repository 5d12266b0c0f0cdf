// File: crates/cartesian-core/src/scene.rs
// Summary: Renderer-agnostic mark list produced by chart layout, and its Skia raster/PNG export.

use std::path::{Path, PathBuf};

use skia_safe as skia;
use tracing::debug;

use crate::error::{ChartError, Result};
use crate::geometry::PlotRect;
use crate::series::SeriesId;

pub struct RenderOptions {
    /// Draw text marks; disable for pixel-stable output across platforms.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { draw_labels: true }
    }
}

/// What a mark belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkRole {
    Grid,
    Axis,
    Title,
    /// Data geometry. `datum` is `None` for marks spanning many records (the line path);
    /// `field` is the bar y-field slot (0 for line series).
    Series { id: SeriesId, datum: Option<usize>, field: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug)]
pub enum MarkKind {
    Path { points: Vec<(f32, f32)>, stroke: skia::Color, width: f32 },
    Marker { center: (f32, f32), radius: f32, fill: skia::Color, stroke: skia::Color, stroke_width: f32 },
    Rect { rect: PlotRect, fill: skia::Color, stroke: skia::Color, stroke_width: f32 },
    Rule { from: (f32, f32), to: (f32, f32), color: skia::Color, width: f32 },
    Text { text: String, origin: (f32, f32), size: f32, color: skia::Color, rotation: f32, anchor: TextAnchor },
}

#[derive(Clone, Debug)]
pub struct Mark {
    pub role: MarkRole,
    pub kind: MarkKind,
}

impl Mark {
    pub fn series_id(&self) -> Option<SeriesId> {
        match self.role {
            MarkRole::Series { id, .. } => Some(id),
            _ => None,
        }
    }
}

/// A laid-out chart, ready to paint or export.
#[derive(Clone, Debug)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: skia::Color,
    pub marks: Vec<Mark>,
    export_dir: PathBuf,
}

impl Scene {
    pub(crate) fn new(width: u32, height: u32, background: skia::Color, export_dir: PathBuf) -> Self {
        Self { width, height, background, marks: Vec::new(), export_dir }
    }

    pub(crate) fn push(&mut self, role: MarkRole, kind: MarkKind) {
        self.marks.push(Mark { role, kind });
    }

    /// Data marks of one series.
    pub fn marks_of(&self, id: SeriesId) -> impl Iterator<Item = &Mark> {
        self.marks.iter().filter(move |m| m.series_id() == Some(id))
    }

    /// Text of every text mark, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.marks.iter().filter_map(|m| match &m.kind {
            MarkKind::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Paint into a CPU raster surface and return straight-alpha RGBA rows.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (w, h) = (self.width.max(1), self.height.max(1));
        let mut surface = skia::surfaces::raster_n32_premul((w as i32, h as i32))
            .ok_or(ChartError::Surface { width: w, height: h })?;
        self.paint(surface.canvas(), opts);

        let info = skia::ImageInfo::new((w as i32, h as i32), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok(pixels)
    }

    /// Render to an in-memory PNG.
    pub fn to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let pixels = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(self.width.max(1), self.height.max(1), pixels)
            .ok_or(ChartError::ReadPixels)?;
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Render to a PNG file, creating parent directories as needed.
    pub fn write_png(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        debug!(path = %path.display(), marks = self.marks.len(), "wrote scene png");
        Ok(())
    }

    /// Save the scene as `<name>.png` in the chart's export directory.
    pub fn download(&self, name: &str) -> Result<PathBuf> {
        let path = self.export_dir.join(format!("{name}.png"));
        self.write_png(&RenderOptions::default(), &path)?;
        Ok(path)
    }

    fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        canvas.clear(self.background);
        let mut fonts = FontCache::default();

        for mark in &self.marks {
            match &mark.kind {
                MarkKind::Path { points, stroke, width } => {
                    if points.len() < 2 || *width <= 0.0 {
                        continue;
                    }
                    let pts: Vec<skia::Point> = points.iter().map(|&(x, y)| skia::Point::new(x, y)).collect();
                    let mut paint = stroke_paint(*stroke, *width);
                    paint.set_stroke_join(skia::paint::Join::Round);
                    canvas.draw_points(skia::canvas::PointMode::Polygon, &pts, &paint);
                }
                MarkKind::Marker { center, radius, fill, stroke, stroke_width } => {
                    canvas.draw_circle(*center, *radius, &fill_paint(*fill));
                    if *stroke_width > 0.0 {
                        canvas.draw_circle(*center, *radius, &stroke_paint(*stroke, *stroke_width));
                    }
                }
                MarkKind::Rect { rect, fill, stroke, stroke_width } => {
                    let r = rect.normalized();
                    let sk = skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom);
                    canvas.draw_rect(sk, &fill_paint(*fill));
                    if *stroke_width > 0.0 {
                        canvas.draw_rect(sk, &stroke_paint(*stroke, *stroke_width));
                    }
                }
                MarkKind::Rule { from, to, color, width } => {
                    canvas.draw_line(*from, *to, &stroke_paint(*color, *width));
                }
                MarkKind::Text { text, origin, size, color, rotation, anchor } => {
                    if !opts.draw_labels {
                        continue;
                    }
                    let font = fonts.get(*size);
                    let (advance, _) = font.measure_str(text, None);
                    let dx = match anchor {
                        TextAnchor::Start => 0.0,
                        TextAnchor::Middle => -advance * 0.5,
                        TextAnchor::End => -advance,
                    };
                    canvas.save();
                    canvas.translate(*origin);
                    if *rotation != 0.0 {
                        canvas.rotate(*rotation, None);
                    }
                    canvas.draw_str(text, (dx, 0.0), font, &fill_paint(*color));
                    canvas.restore();
                }
            }
        }
    }
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

/// One typeface lookup per paint pass; fonts keyed by size.
#[derive(Default)]
struct FontCache {
    typeface: Option<Option<skia::Typeface>>,
    fonts: Vec<(f32, skia::Font)>,
}

impl FontCache {
    fn get(&mut self, size: f32) -> &skia::Font {
        if let Some(i) = self.fonts.iter().position(|(s, _)| *s == size) {
            return &self.fonts[i].1;
        }
        let typeface = self
            .typeface
            .get_or_insert_with(|| skia::FontMgr::default().legacy_make_typeface(None::<&str>, skia::FontStyle::default()))
            .clone();
        let font = match typeface {
            Some(tf) => skia::Font::new(tf, size),
            None => {
                let mut f = skia::Font::default();
                f.set_size(size);
                f
            }
        };
        self.fonts.push((size, font));
        &self.fonts[self.fonts.len() - 1].1
    }
}
