//! Life Hero - Conway's Game of Life hero background
//!
//! Core modules:
//! - `sim`: Toroidal cellular automaton (grid, rules, patterns, logo mask)
//! - `renderer`: Raster surface abstraction and frame drawing
//! - `controller`: Play/pause/reset state machine and frame governor
//! - `tuning`: Data-driven constants
//! - `settings`: Persisted user preferences

pub mod controller;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use controller::{FrameOutcome, HeroState, LoopController, RunPhase};
pub use error::HostError;
pub use renderer::{Renderer, Surface, Theme};
pub use settings::Settings;
pub use sim::{LifeState, Stats};
pub use tuning::LifeConfig;

/// Fixed simulation constants
pub mod consts {
    use crate::sim::Cell;

    /// Sentinel for a live cell
    pub const ALIVE: Cell = -1;
    /// Dead, fully faded cell
    pub const DEAD: Cell = 0;
    /// Generations a dead cell stays visible while fading out
    pub const FADE_STEPS: Cell = 2;

    /// Major grid crosses are drawn every this many cells
    pub const MAJOR_GRID_EVERY: usize = 4;
    /// Half length of a major grid cross arm (pixels)
    pub const MAJOR_CROSS_ARM: f32 = 6.0;
}
