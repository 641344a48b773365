//! `CanvasRenderingContext2d` surface (wasm32 only)

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::Surface;
use super::palette::Rgba;
use crate::error::HostError;

pub struct Canvas2dSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    /// Wrap an existing canvas element
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, HostError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(HostError::NoContext2d)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| HostError::NoContext2d)?;
        Ok(Self { canvas, ctx })
    }

    /// Detached canvas for off-screen caching
    pub fn offscreen(document: &Document) -> Result<Self, HostError> {
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| HostError::NotACanvas("offscreen".into()))?;
        Self::new(canvas)
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for Canvas2dSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, width: u32, height: u32) {
        // Assigning either dimension clears the bitmap
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn stroke_lines(&mut self, segments: &[(Vec2, Vec2)], line_width: f32, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(line_width as f64);
        for (a, b) in segments {
            self.ctx.move_to(a.x as f64, a.y as f64);
            self.ctx.line_to(b.x as f64, b.y as f64);
        }
        self.ctx.stroke();
    }

    fn draw_surface(&mut self, source: &Self) {
        let _ = self
            .ctx
            .draw_image_with_html_canvas_element(&source.canvas, 0.0, 0.0);
    }
}
