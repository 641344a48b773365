//! Simulation state and its query/control surface
//!
//! `LifeState` bundles the grid, the logo mask and the seeded RNG, and is the
//! only thing the renderer and the loop controller talk to.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::grid::{Cell, Grid, Stats};
use super::mask::ExclusionRect;
use super::patterns::{Pattern, seed_random};
use super::step::step;
use crate::tuning::LifeConfig;

#[derive(Debug, Clone)]
pub struct LifeState {
    grid: Grid,
    mask: ExclusionRect,
    /// Viewport size in pixels
    viewport: Vec2,
    cell_px: u32,
    /// Generations since the last resize or reset
    generation: u64,
    rng: Pcg32,
    config: LifeConfig,
}

impl LifeState {
    /// Create an empty (0x0) state; call `resize` once the viewport is known
    pub fn new(seed: u64, config: LifeConfig) -> Self {
        Self {
            grid: Grid::default(),
            mask: ExclusionRect::EMPTY,
            viewport: Vec2::ZERO,
            cell_px: config.desktop_cell_px,
            generation: 0,
            rng: Pcg32::seed_from_u64(seed),
            config,
        }
    }

    /// Recompute grid dimensions and the logo mask for a new viewport.
    /// The grid is reallocated zero-filled.
    pub fn resize(&mut self, viewport: Vec2, cell_px: u32) {
        let cell_px = cell_px.max(1);
        let viewport = viewport.max(Vec2::ZERO);
        let width = (viewport.x / cell_px as f32).ceil() as usize;
        let height = (viewport.y / cell_px as f32).ceil() as usize;

        self.viewport = viewport;
        self.cell_px = cell_px;
        self.grid.resize(width, height);
        self.mask = ExclusionRect::compute(viewport, cell_px, width, height, &self.config);
        self.generation = 0;
        log::info!(
            "Grid resized to {}x{} cells ({}px) for {}x{} viewport, mask {:?}",
            width,
            height,
            cell_px,
            viewport.x,
            viewport.y,
            self.mask
        );
    }

    /// Advance one generation
    pub fn step(&mut self) {
        step(&mut self.grid);
        self.generation += 1;
    }

    /// Force a cell alive from pointer input. Ignored outside the grid or
    /// inside the logo mask. Returns whether the cell was written.
    pub fn paint(&mut self, x: i32, y: i32) -> bool {
        if self.mask.contains(x, y) {
            return false;
        }
        self.grid.set_alive(x, y)
    }

    /// Grid cell under a pixel position, if any
    pub fn cell_at(&self, pos: Vec2) -> Option<(i32, i32)> {
        if pos.x < 0.0 || pos.y < 0.0 {
            return None;
        }
        let cell = self.cell_px as f32;
        let x = (pos.x / cell).floor() as i32;
        let y = (pos.y / cell).floor() as i32;
        self.grid.in_bounds(x, y).then_some((x, y))
    }

    /// Stamp one random pattern; `None` only if no pattern fits this grid
    pub fn seed(&mut self) -> Option<&'static Pattern> {
        seed_random(&mut self.grid, &mut self.rng).map(|(pattern, _)| pattern)
    }

    /// Zero every cell
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    pub fn stats(&self) -> Stats {
        self.grid.stats()
    }

    /// Cell value with toroidal wraparound
    #[inline]
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        self.grid.get(x, y)
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn mask(&self) -> ExclusionRect {
        self.mask
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    #[inline]
    pub fn cell_px(&self) -> u32 {
        self.cell_px
    }

    #[inline]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }
}
