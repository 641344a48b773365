//! Generation step
//!
//! Conway B3/S23 with a fade trail: a cell that dies enters `FADE_STEPS` and
//! counts down to zero. Only `ALIVE` neighbours count toward births and
//! survival, so fading cells are purely visual.

use super::grid::{Cell, Grid};
use crate::consts::{ALIVE, DEAD, FADE_STEPS};

/// Next value of a cell given its current value and live neighbour count
#[inline]
pub fn next_cell(current: Cell, live_neighbors: u8) -> Cell {
    if current == ALIVE {
        if live_neighbors == 2 || live_neighbors == 3 {
            ALIVE
        } else {
            FADE_STEPS
        }
    } else if live_neighbors == 3 {
        // Birth overrides any fade counter
        ALIVE
    } else if current > 0 {
        current - 1
    } else {
        DEAD
    }
}

/// Count `ALIVE` cells in the Moore neighbourhood of (x, y), wrapping edges.
///
/// `cells` is row-major with the given dimensions; (x, y) must be in bounds.
pub fn live_neighbors(cells: &[Cell], width: usize, height: usize, x: usize, y: usize) -> u8 {
    // Wrap by adding `size - 1` so the index math stays unsigned
    let xs = [(x + width - 1) % width, x, (x + 1) % width];
    let ys = [(y + height - 1) % height, y, (y + 1) % height];

    let mut count = 0;
    for (j, &ny) in ys.iter().enumerate() {
        let row = ny * width;
        for (i, &nx) in xs.iter().enumerate() {
            if i == 1 && j == 1 {
                continue;
            }
            if cells[row + nx] == ALIVE {
                count += 1;
            }
        }
    }
    count
}

/// Advance the grid by one generation
pub fn step(grid: &mut Grid) {
    let (width, height) = (grid.width(), grid.height());
    if width == 0 || height == 0 {
        return;
    }

    let (current, next) = grid.buffers_mut();
    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let n = live_neighbors(current, width, height, x, y);
            next[idx] = next_cell(current[idx], n);
        }
    }
    grid.swap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn alive_set(grid: &Grid) -> Vec<(usize, usize)> {
        grid.iter()
            .filter(|&(_, _, v)| v == ALIVE)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn test_isolated_cell_dies() {
        let mut grid = Grid::new(3, 3);
        grid.set_alive(1, 1);
        step(&mut grid);
        assert_eq!(grid.count_alive(), 0);
        assert_eq!(grid.get(1, 1), FADE_STEPS);
        // Neighbours never had 3 live neighbours, so stay fully dead
        assert_eq!(grid.get(0, 0), DEAD);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut grid = Grid::new(8, 8);
        for x in 2..5 {
            grid.set_alive(x, 3);
        }
        let horizontal = alive_set(&grid);

        step(&mut grid);
        assert_eq!(alive_set(&grid), vec![(3, 2), (3, 3), (3, 4)]);

        step(&mut grid);
        assert_eq!(alive_set(&grid), horizontal);
    }

    #[test]
    fn test_block_is_still_life() {
        let mut grid = Grid::new(6, 6);
        for (x, y) in [(2, 2), (3, 2), (2, 3), (3, 3)] {
            grid.set_alive(x, y);
        }
        let before = grid.cells().to_vec();
        step(&mut grid);
        assert_eq!(grid.cells(), &before[..]);
    }

    #[test]
    fn test_fade_sequence() {
        let mut grid = Grid::new(5, 5);
        grid.set_alive(2, 2);
        step(&mut grid);

        let mut seen = vec![grid.get(2, 2)];
        for _ in 0..FADE_STEPS {
            step(&mut grid);
            seen.push(grid.get(2, 2));
            assert_eq!(grid.count_alive(), 0);
        }
        let expected: Vec<Cell> = (0..=FADE_STEPS).rev().collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_rebirth_overrides_fade() {
        assert_eq!(next_cell(1, 3), ALIVE);
        assert_eq!(next_cell(FADE_STEPS, 3), ALIVE);

        // Centre cell at fade 1 with a live triple directly above it
        let mut grid = Grid::new(5, 5);
        grid.set_raw(2, 2, 1);
        for x in 1..4 {
            grid.set_alive(x, 1);
        }
        step(&mut grid);
        assert_eq!(grid.get(2, 2), ALIVE);
    }

    #[test]
    fn test_survival_and_overcrowding() {
        assert_eq!(next_cell(ALIVE, 0), FADE_STEPS);
        assert_eq!(next_cell(ALIVE, 1), FADE_STEPS);
        assert_eq!(next_cell(ALIVE, 2), ALIVE);
        assert_eq!(next_cell(ALIVE, 3), ALIVE);
        assert_eq!(next_cell(ALIVE, 4), FADE_STEPS);
        assert_eq!(next_cell(DEAD, 2), DEAD);
        assert_eq!(next_cell(2, 2), 1);
    }

    #[test]
    fn test_toroidal_corner_neighbor() {
        let mut grid = Grid::new(5, 4);
        grid.set_alive(4, 3);
        assert_eq!(live_neighbors(grid.cells(), 5, 4, 0, 0), 1);
        assert_eq!(live_neighbors(grid.cells(), 5, 4, 4, 3), 0);
    }

    #[test]
    fn test_glider_wraps_around_edges() {
        // A glider returns to its shape shifted by (1, 1) every 4 generations;
        // after 4 * size generations on a square torus it is back where it began
        let mut grid = Grid::new(8, 8);
        for (x, y) in [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)] {
            grid.set_alive(x, y);
        }
        let start = alive_set(&grid);
        for _ in 0..32 {
            step(&mut grid);
        }
        assert_eq!(alive_set(&grid), start);
    }

    #[test]
    fn test_empty_grid_step_is_noop() {
        let mut grid = Grid::new(0, 0);
        step(&mut grid);
        assert!(grid.is_empty());
    }

    proptest! {
        #[test]
        fn prop_dead_cell_fade_is_monotone(steps in 1usize..8) {
            let mut grid = Grid::new(9, 9);
            grid.set_alive(4, 4);
            step(&mut grid);
            let mut prev = grid.get(4, 4);
            prop_assert_eq!(prev, FADE_STEPS);
            for _ in 0..steps {
                step(&mut grid);
                let v = grid.get(4, 4);
                prop_assert!(v >= 0 && v <= prev);
                prop_assert!(prev == 0 || v == prev - 1);
                prop_assert_eq!(grid.count_alive(), 0);
                prev = v;
            }
        }

        #[test]
        fn prop_neighbor_count_is_translation_invariant(
            x in 0usize..7, y in 0usize..5, dx in 0usize..7, dy in 0usize..5,
        ) {
            let (w, h) = (7usize, 5usize);
            let mut a = Grid::new(w, h);
            let mut b = Grid::new(w, h);
            a.set_alive(x as i32, y as i32);
            b.set_alive(((x + dx) % w) as i32, ((y + dy) % h) as i32);
            for cy in 0..h {
                for cx in 0..w {
                    prop_assert_eq!(
                        live_neighbors(a.cells(), w, h, cx, cy),
                        live_neighbors(b.cells(), w, h, (cx + dx) % w, (cy + dy) % h)
                    );
                }
            }
        }
    }
}
