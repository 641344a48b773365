//! Frame rendering with a cached background layer

use glam::Vec2;

use super::Surface;
use super::palette::{Palette, Rgba, Theme, cell_color};
use crate::consts::{MAJOR_CROSS_ARM, MAJOR_GRID_EVERY};
use crate::sim::LifeState;

/// Minor grid line width (px)
const GRID_LINE_WIDTH: f32 = 1.0;
/// Major grid cross line width (px)
const MAJOR_LINE_WIDTH: f32 = 1.2;

/// Everything the background depends on; a change forces a redraw
#[derive(Debug, Clone, Copy, PartialEq)]
struct BackgroundKey {
    width_px: u32,
    height_px: u32,
    cell_px: u32,
    columns: usize,
    rows: usize,
    theme: Theme,
}

impl BackgroundKey {
    fn of(life: &LifeState, theme: Theme) -> Self {
        let viewport = life.viewport();
        Self {
            width_px: viewport.x.round() as u32,
            height_px: viewport.y.round() as u32,
            cell_px: life.cell_px(),
            columns: life.width(),
            rows: life.height(),
            theme,
        }
    }
}

/// Draws `LifeState` frames onto a surface
pub struct Renderer<S: Surface> {
    background: S,
    cached: Option<BackgroundKey>,
    background_redraws: u64,
}

impl<S: Surface> Renderer<S> {
    /// `background` is the off-screen surface used as the grid cache
    pub fn new(background: S) -> Self {
        Self {
            background,
            cached: None,
            background_redraws: 0,
        }
    }

    /// Force the background to be rebuilt on the next frame
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// How many times the background cache has been rebuilt
    pub fn background_redraws(&self) -> u64 {
        self.background_redraws
    }

    /// Draw one frame: cached background, then every visible cell outside
    /// the logo mask
    pub fn render(&mut self, target: &mut S, life: &LifeState, theme: Theme) {
        let key = BackgroundKey::of(life, theme);
        if self.cached != Some(key) {
            self.background.resize(key.width_px, key.height_px);
            draw_background(
                &mut self.background,
                key.width_px as f32,
                key.height_px as f32,
                key.columns,
                key.rows,
                key.cell_px as f32,
                theme.palette(),
            );
            self.cached = Some(key);
            self.background_redraws += 1;
            log::debug!(
                "Background rebuilt ({}x{}, {})",
                key.width_px,
                key.height_px,
                theme.as_str()
            );
        }

        if target.size() != (key.width_px, key.height_px) {
            target.resize(key.width_px, key.height_px);
        }
        target.draw_surface(&self.background);
        draw_cells(target, life, theme);
    }
}

/// Theme fill, a line on every cell edge, and a small cross every
/// `MAJOR_GRID_EVERY` cells
pub fn draw_background<S: Surface>(
    surface: &mut S,
    width: f32,
    height: f32,
    columns: usize,
    rows: usize,
    cell: f32,
    palette: &Palette,
) {
    surface.fill_rect(0.0, 0.0, width, height, palette.background.opaque());

    // Half-pixel offset lands 1px lines on a single pixel column/row
    let mut lines = Vec::with_capacity(columns + rows + 2);
    for x in 0..=columns {
        let px = x as f32 * cell + 0.5;
        lines.push((Vec2::new(px, 0.0), Vec2::new(px, height)));
    }
    for y in 0..=rows {
        let py = y as f32 * cell + 0.5;
        lines.push((Vec2::new(0.0, py), Vec2::new(width, py)));
    }
    let (rgb, alpha) = palette.grid_line;
    surface.stroke_lines(&lines, GRID_LINE_WIDTH, Rgba::with_alpha(rgb, alpha));

    let (rgb, alpha) = palette.grid_major;
    let major = Rgba::with_alpha(rgb, alpha);
    for by in (0..=rows).step_by(MAJOR_GRID_EVERY) {
        for bx in (0..=columns).step_by(MAJOR_GRID_EVERY) {
            let c = Vec2::new(bx as f32 * cell, by as f32 * cell);
            let arm_x = Vec2::new(MAJOR_CROSS_ARM, 0.0);
            let arm_y = Vec2::new(0.0, MAJOR_CROSS_ARM);
            surface.stroke_lines(
                &[(c - arm_x, c + arm_x), (c - arm_y, c + arm_y)],
                MAJOR_LINE_WIDTH,
                major,
            );
        }
    }
}

/// Fill live and fading cells; dead cells and the logo mask are skipped
pub fn draw_cells<S: Surface>(surface: &mut S, life: &LifeState, theme: Theme) {
    let mask = life.mask();
    let cell = life.cell_px() as f32;
    for (x, y, value) in life.grid().iter() {
        if mask.contains(x as i32, y as i32) {
            continue;
        }
        if let Some(color) = cell_color(value, theme) {
            surface.fill_rect(x as f32 * cell, y as f32 * cell, cell, cell, color.opaque());
        }
    }
}
