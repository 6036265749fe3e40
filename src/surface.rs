use std::io::Cursor;

use egui::{Color32, Pos2};
use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::SurfaceError;
use crate::geometry::{self, DEFAULT_TENSION};
use crate::stroke::{Stroke, Tool};

/// Stage size of a fresh canvas, in pixels
pub const DEFAULT_SURFACE_SIZE: [u32; 2] = [500, 500];

/// Rasterizes a background image and a stroke sequence into an RGBA image.
///
/// Strokes are painted in order on the same layer as the background. Pen
/// strokes blend over what is already there; eraser strokes remove alpha
/// from it, including from the background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSurface {
    width: u32,
    height: u32,
    tension: f32,
}

impl Default for RenderSurface {
    fn default() -> Self {
        Self::new(DEFAULT_SURFACE_SIZE[0], DEFAULT_SURFACE_SIZE[1])
    }
}

impl RenderSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tension: DEFAULT_TENSION,
        }
    }

    pub fn size(&self) -> [u32; 2] {
        [self.width, self.height]
    }

    pub fn paint(&self, background: Option<&RgbaImage>, strokes: &[Stroke]) -> RgbaImage {
        let mut canvas = RgbaImage::new(self.width, self.height);

        if let Some(background) = background {
            image::imageops::overlay(&mut canvas, background, 0, 0);
        }

        for stroke in strokes {
            self.paint_stroke(&mut canvas, stroke);
        }

        canvas
    }

    fn paint_stroke(&self, canvas: &mut RgbaImage, stroke: &Stroke) {
        let path = geometry::smooth_path(stroke.points(), self.tension);
        let radius = stroke.size().get() / 2.0;

        let Some(mask) = CoverageMask::rasterize(&path, radius, self.width, self.height) else {
            return;
        };

        match stroke.tool() {
            Tool::Pen => mask.blend_over(canvas, stroke.color()),
            Tool::Eraser => mask.cut_out(canvas),
        }
    }
}

/// Per-pixel coverage of one stroke, limited to the stroke's bounding box.
///
/// Coverage within a stroke is the maximum over its segments, so a path that
/// crosses itself is still composited exactly once.
struct CoverageMask {
    x0: u32,
    y0: u32,
    width: u32,
    height: u32,
    coverage: Vec<f32>,
}

impl CoverageMask {
    fn rasterize(path: &[Pos2], radius: f32, canvas_width: u32, canvas_height: u32) -> Option<Self> {
        let (x0, y0, x1, y1) = clip_bounds(path, radius, canvas_width, canvas_height)?;
        let width = x1 - x0;
        let height = y1 - y0;
        let mut mask = Self {
            x0,
            y0,
            width,
            height,
            coverage: vec![0.0; (width * height) as usize],
        };

        // A lone point is a zero-length segment: a round dot
        let segments: Vec<(Pos2, Pos2)> = match path {
            [single] => vec![(*single, *single)],
            _ => path.windows(2).map(|w| (w[0], w[1])).collect(),
        };

        for (start, end) in segments {
            mask.cover_segment(start, end, radius);
        }

        Some(mask)
    }

    fn cover_segment(&mut self, start: Pos2, end: Pos2, radius: f32) {
        let Some((sx0, sy0, sx1, sy1)) = clip_bounds(
            &[start, end],
            radius,
            self.x0 + self.width,
            self.y0 + self.height,
        ) else {
            return;
        };

        for y in sy0.max(self.y0)..sy1 {
            for x in sx0.max(self.x0)..sx1 {
                let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                let distance = geometry::distance_to_line_segment(center, start, end);
                // One pixel of anti-aliasing around the edge
                let coverage = (radius + 0.5 - distance).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    let index = ((y - self.y0) * self.width + (x - self.x0)) as usize;
                    self.coverage[index] = self.coverage[index].max(coverage);
                }
            }
        }
    }

    fn pixels(&self) -> impl Iterator<Item = (u32, u32, f32)> + '_ {
        self.coverage.iter().enumerate().filter_map(|(i, &coverage)| {
            (coverage > 0.0).then(|| {
                let i = i as u32;
                (self.x0 + i % self.width, self.y0 + i / self.width, coverage)
            })
        })
    }

    /// Source-over with straight (unmultiplied) alpha
    fn blend_over(&self, canvas: &mut RgbaImage, color: Color32) {
        let [sr, sg, sb, sa] = color.to_srgba_unmultiplied();
        let source = [sr as f32, sg as f32, sb as f32];

        for (x, y, coverage) in self.pixels() {
            let pixel = canvas.get_pixel_mut(x, y);
            let Rgba([dr, dg, db, da]) = *pixel;

            let src_a = sa as f32 / 255.0 * coverage;
            let dst_a = da as f32 / 255.0;
            let out_a = src_a + dst_a * (1.0 - src_a);
            if out_a <= 0.0 {
                *pixel = Rgba([0, 0, 0, 0]);
                continue;
            }

            let mix = |s: f32, d: u8| {
                let c = (s * src_a + d as f32 * dst_a * (1.0 - src_a)) / out_a;
                c.round().clamp(0.0, 255.0) as u8
            };
            *pixel = Rgba([
                mix(source[0], dr),
                mix(source[1], dg),
                mix(source[2], db),
                (out_a * 255.0).round() as u8,
            ]);
        }
    }

    /// Destination-out: keep the destination only where the stroke does not cover it
    fn cut_out(&self, canvas: &mut RgbaImage) {
        for (x, y, coverage) in self.pixels() {
            let pixel = canvas.get_pixel_mut(x, y);
            let alpha = pixel.0[3] as f32 * (1.0 - coverage);
            pixel.0[3] = alpha.round() as u8;
            if pixel.0[3] == 0 {
                *pixel = Rgba([0, 0, 0, 0]);
            }
        }
    }
}

/// Pixel range `[x0, x1) x [y0, y1)` touched by `points` grown by `radius`,
/// clipped to the canvas. `None` when nothing is visible.
fn clip_bounds(points: &[Pos2], radius: f32, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
    if points.is_empty() {
        return None;
    }
    let bounds = geometry::calculate_bounds(points, radius + 1.0);

    let x0 = bounds.min.x.floor().max(0.0);
    let y0 = bounds.min.y.floor().max(0.0);
    let x1 = bounds.max.x.ceil().min(width as f32);
    let y1 = bounds.max.y.ceil().min(height as f32);

    if !(x0 < x1 && y0 < y1) {
        return None;
    }
    Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
}

/// Encode the surface as PNG
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, SurfaceError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(SurfaceError::Empty {
            width: image.width(),
            height: image.height(),
        });
    }

    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Convert a rasterized surface into something egui can upload
pub fn to_color_image(image: &RgbaImage) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(
        [image.width() as usize, image.height() as usize],
        image.as_raw(),
    )
}
