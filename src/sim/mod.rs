//! Cellular automaton module
//!
//! Everything that decides which cells are alive lives here. This module must
//! stay free of rendering and platform dependencies:
//! - Flat row-major grid, toroidal neighbour reads
//! - Seeded RNG only
//! - Steps read the current buffer and write the scratch buffer, never in place

pub mod grid;
pub mod mask;
pub mod patterns;
pub mod state;
pub mod step;

pub use grid::{Cell, Grid, Stats};
pub use mask::ExclusionRect;
pub use patterns::{PATTERNS, Pattern, seed_random};
pub use state::LifeState;
pub use step::{live_neighbors, next_cell, step};
