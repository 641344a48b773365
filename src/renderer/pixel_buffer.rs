//! Software RGBA surface
//!
//! Used by the native runner and by tests. Pixel coverage is point-sampled at
//! pixel centres, which is enough for axis-aligned cells and grid lines.

use glam::Vec2;

use super::Surface;
use super::palette::Rgba;

/// RGBA8 pixel buffer, row-major, straight alpha
#[derive(Debug, Clone, Default)]
pub struct PixelBuffer {
    pixels: Vec<Rgba>,
    width: u32,
    height: u32,
}

/// Source-over blend of one channel
#[inline]
fn blend_channel(src: u8, dst: u8, alpha: u16) -> u8 {
    let result = src as u16 * alpha + dst as u16 * (255 - alpha);
    ((result + 127) / 255) as u8
}

#[inline]
fn blend(src: Rgba, dst: Rgba) -> Rgba {
    match src.a {
        0 => dst,
        255 => src,
        a => {
            let a = a as u16;
            Rgba::new(
                blend_channel(src.r, dst.r, a),
                blend_channel(src.g, dst.g, a),
                blend_channel(src.b, dst.b, a),
                (a + dst.a as u16 * (255 - a) / 255) as u8,
            )
        }
    }
}

/// Squared distance from `p` to segment `a`-`b`
fn distance_sq_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    let t = if len_sq > 0.0 {
        ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    p.distance_squared(a + ab * t)
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![Rgba::TRANSPARENT; (width * height) as usize],
            width,
            height,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Raw RGBA bytes, e.g. for `ImageData` or image encoders
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Clamp a pixel-space span to covered pixel indices (by pixel centre)
    fn span(&self, start: f32, end: f32, limit: u32) -> std::ops::Range<u32> {
        let lo = (start - 0.5).ceil().max(0.0) as u32;
        let hi = ((end - 0.5).ceil().max(0.0) as u32).min(limit);
        lo.min(hi)..hi
    }

    #[inline]
    fn blend_at(&mut self, x: u32, y: u32, color: Rgba) {
        let idx = (y * self.width + x) as usize;
        self.pixels[idx] = blend(color, self.pixels[idx]);
    }
}

impl Surface for PixelBuffer {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba) {
        let xs = self.span(x, x + width, self.width);
        let ys = self.span(y, y + height, self.height);
        for py in ys {
            for px in xs.clone() {
                self.blend_at(px, py, color);
            }
        }
    }

    fn stroke_lines(&mut self, segments: &[(Vec2, Vec2)], line_width: f32, color: Rgba) {
        if self.pixels.is_empty() || segments.is_empty() {
            return;
        }
        let half = line_width / 2.0;
        let half_sq = half * half;

        // Collect coverage first so crossings are blended once
        let mut covered = Vec::new();
        for &(a, b) in segments {
            let min = a.min(b) - Vec2::splat(half);
            let max = a.max(b) + Vec2::splat(half);
            for py in self.span(min.y, max.y, self.height) {
                for px in self.span(min.x, max.x, self.width) {
                    let centre = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
                    if distance_sq_to_segment(centre, a, b) <= half_sq {
                        covered.push((py * self.width + px) as usize);
                    }
                }
            }
        }
        covered.sort_unstable();
        covered.dedup();
        for idx in covered {
            self.pixels[idx] = blend(color, self.pixels[idx]);
        }
    }

    fn draw_surface(&mut self, source: &Self) {
        let width = self.width.min(source.width);
        let height = self.height.min(source.height);
        for y in 0..height {
            for x in 0..width {
                let src = source.pixels[(y * source.width + x) as usize];
                self.blend_at(x, y, src);
            }
        }
    }
}
