//! 2D raster rendering
//!
//! The background grid is drawn once into an off-screen surface and blitted
//! every frame; live and fading cells are filled on top.

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
pub mod frame;
pub mod palette;
pub mod pixel_buffer;

#[cfg(target_arch = "wasm32")]
pub use canvas2d::Canvas2dSurface;
pub use frame::Renderer;
pub use palette::{Palette, Rgb, Rgba, Theme, cell_color, color_for_fade};
pub use pixel_buffer::PixelBuffer;

use glam::Vec2;

/// A drawable raster target
///
/// Coordinates are in pixels with the origin at the top left. Colours use
/// straight alpha and composite source-over.
pub trait Surface {
    /// (width, height) in pixels
    fn size(&self) -> (u32, u32);

    /// Resize and clear to transparent
    fn resize(&mut self, width: u32, height: u32);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba);

    /// Stroke all segments as a single path, so overlaps are painted once
    fn stroke_lines(&mut self, segments: &[(Vec2, Vec2)], line_width: f32, color: Rgba);

    /// Composite `source` onto this surface at the origin
    fn draw_surface(&mut self, source: &Self);
}
