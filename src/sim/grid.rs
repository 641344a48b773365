//! Double-buffered toroidal cell grid

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{ALIVE, DEAD};

/// A single cell: `ALIVE`, `DEAD`, or a positive fade counter
pub type Cell = i8;

/// Alive/dead population snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub alive: usize,
    /// Everything not alive, fading cells included
    pub dead: usize,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alive: {}  Dead: {}", self.alive, self.dead)
    }
}

/// Flat row-major grid with a scratch buffer for the next generation
#[derive(Debug, Clone, Default)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    scratch: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        let len = width * height;
        Self {
            width,
            height,
            cells: vec![DEAD; len],
            scratch: vec![DEAD; len],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Reallocate both buffers zero-filled. Always discards prior content.
    pub fn resize(&mut self, width: usize, height: usize) {
        *self = Self::new(width, height);
    }

    /// Zero every cell
    pub fn clear(&mut self) {
        self.cells.fill(DEAD);
        self.scratch.fill(DEAD);
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Whether (x, y) is inside the grid (no wraparound)
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Read a cell, wrapping both axes. Returns `DEAD` on an empty grid.
    pub fn get(&self, x: i32, y: i32) -> Cell {
        if self.is_empty() {
            return DEAD;
        }
        let x = x.rem_euclid(self.width as i32) as usize;
        let y = y.rem_euclid(self.height as i32) as usize;
        self.cells[self.index(x, y)]
    }

    /// Force a cell alive. Returns false (and does nothing) when out of bounds.
    pub fn set_alive(&mut self, x: i32, y: i32) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.index(x as usize, y as usize);
        self.cells[idx] = ALIVE;
        true
    }

    #[cfg(test)]
    pub(crate) fn set_raw(&mut self, x: usize, y: usize, value: Cell) {
        let idx = self.index(x, y);
        self.cells[idx] = value;
    }

    /// Current generation, row-major
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Current buffer for reading and scratch buffer for writing
    pub(crate) fn buffers_mut(&mut self) -> (&[Cell], &mut [Cell]) {
        (&self.cells, &mut self.scratch)
    }

    /// Promote the scratch buffer to current
    pub(crate) fn swap(&mut self) {
        std::mem::swap(&mut self.cells, &mut self.scratch);
    }

    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|&&v| v == ALIVE).count()
    }

    pub fn stats(&self) -> Stats {
        let alive = self.count_alive();
        Stats {
            alive,
            dead: self.len() - alive,
        }
    }

    /// Iterate `(x, y, value)` over the current generation
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &v)| (i % width, i / width, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FADE_STEPS;

    #[test]
    fn test_stats_label() {
        let stats = Stats { alive: 12, dead: 3376 };
        assert_eq!(stats.to_string(), "Alive: 12  Dead: 3376");
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(7, 5);
        assert_eq!(grid.len(), 35);
        assert_eq!(grid.count_alive(), 0);
        assert!(grid.cells().iter().all(|&v| v == DEAD));
    }

    #[test]
    fn test_get_wraps_both_axes() {
        let mut grid = Grid::new(4, 3);
        assert!(grid.set_alive(3, 2));
        assert_eq!(grid.get(-1, -1), ALIVE);
        assert_eq!(grid.get(7, 5), ALIVE);
        assert_eq!(grid.get(0, 0), DEAD);
    }

    #[test]
    fn test_set_alive_out_of_bounds_is_noop() {
        let mut grid = Grid::new(4, 4);
        assert!(!grid.set_alive(-1, 0));
        assert!(!grid.set_alive(0, 4));
        assert!(!grid.set_alive(4, 0));
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_stats_counts_fading_as_dead() {
        let mut grid = Grid::new(3, 3);
        grid.set_alive(0, 0);
        grid.set_alive(1, 1);
        grid.set_raw(2, 0, FADE_STEPS);
        grid.set_raw(0, 1, 1);
        let stats = grid.stats();
        assert_eq!(stats.alive, 2);
        assert_eq!(stats.dead, 7);
    }

    #[test]
    fn test_resize_resets_state() {
        let mut grid = Grid::new(5, 5);
        for i in 0..5 {
            grid.set_alive(i, i);
        }
        grid.resize(8, 6);
        assert_eq!((grid.width(), grid.height()), (8, 6));
        assert_eq!(grid.len(), 48);
        assert!(grid.cells().iter().all(|&v| v == DEAD));

        // Same dimensions still clears
        grid.set_alive(2, 2);
        grid.resize(8, 6);
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_empty_grid_reads_dead() {
        let grid = Grid::new(0, 0);
        assert_eq!(grid.get(3, -2), DEAD);
        assert_eq!(grid.stats(), Stats::default());
    }

    #[test]
    fn test_iter_coordinates() {
        let mut grid = Grid::new(3, 2);
        grid.set_alive(2, 1);
        let alive: Vec<_> = grid.iter().filter(|&(_, _, v)| v == ALIVE).collect();
        assert_eq!(alive, vec![(2, 1, ALIVE)]);
    }
}
