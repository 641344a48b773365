//! Play/pause state machine and frame cadence
//!
//! The host calls `frame(now)` from every animation frame and forwards
//! pointer, resize and button events. Time is a millisecond clock supplied by
//! the caller (`performance.now()` in the browser), so the controller is fully
//! deterministic under test.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::ALIVE;
use crate::renderer::Theme;
use crate::sim::{LifeState, Stats};
use crate::tuning::LifeConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunPhase {
    /// Grid static, timers stopped
    #[default]
    Idle,
    /// Stepping on the governed schedule
    Running,
}

/// UI-facing state shared with the page chrome
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HeroState {
    pub phase: RunPhase,
    pub theme: Theme,
    pub stats: Stats,
}

/// What the host should do after a `frame` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// A generation was computed; redraw
    Stepped,
    /// Nothing stepped but the picture changed; redraw
    Redraw,
    /// Nothing to do
    Idle,
}

/// Repeating deadline timer polled from the frame loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    period_ms: f64,
    next_due: Option<f64>,
}

impl Interval {
    pub fn new(period_ms: f64) -> Self {
        Self {
            period_ms,
            next_due: None,
        }
    }

    /// Arm the timer; the first fire is one period from `now`
    pub fn start(&mut self, now: f64) {
        self.next_due = Some(now + self.period_ms);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Fires at most once per call. Missed periods are dropped and the next
    /// deadline is rebased on `now`.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                let next = due + self.period_ms;
                self.next_due = Some(if next <= now { now + self.period_ms } else { next });
                true
            }
            _ => false,
        }
    }
}

pub struct LoopController {
    life: LifeState,
    state: HeroState,
    /// Current generation rate; 0 after reset
    fps: u32,
    /// Time of the last step; `-inf` makes the next frame step at once
    last_step: f64,
    seed_timer: Interval,
    ramp_timer: Interval,
    hovering: bool,
    dirty: bool,
}

impl LoopController {
    pub fn new(config: LifeConfig, rng_seed: u64, theme: Theme) -> Self {
        let config = config.validated();
        let seed_timer = Interval::new(config.seed_period_ms);
        let ramp_timer = Interval::new(config.ramp_period_ms);
        Self {
            life: LifeState::new(rng_seed, config),
            state: HeroState {
                phase: RunPhase::Idle,
                theme,
                stats: Stats::default(),
            },
            fps: 0,
            last_step: f64::NEG_INFINITY,
            seed_timer,
            ramp_timer,
            hovering: false,
            dirty: true,
        }
    }

    /// Start running: seed once, arm the seed timer and ramp fps up from 1
    pub fn play(&mut self, now: f64) {
        if self.state.phase == RunPhase::Running {
            return;
        }
        self.state.phase = RunPhase::Running;
        self.life.seed();
        self.seed_timer.start(now);
        self.fps = 1;
        self.ramp_timer.start(now);
        self.last_step = f64::NEG_INFINITY;
        self.refresh_stats();
        self.dirty = true;
        log::info!("Life running");
    }

    pub fn pause(&mut self) {
        if self.state.phase == RunPhase::Idle {
            return;
        }
        self.state.phase = RunPhase::Idle;
        self.seed_timer.stop();
        self.ramp_timer.stop();
        log::info!("Life paused at generation {}", self.life.generation());
    }

    pub fn toggle_play(&mut self, now: f64) {
        match self.state.phase {
            RunPhase::Idle => self.play(now),
            RunPhase::Running => self.pause(),
        }
    }

    /// Stop everything and clear the board
    pub fn reset(&mut self) {
        self.state.phase = RunPhase::Idle;
        self.seed_timer.stop();
        self.ramp_timer.stop();
        self.fps = 0;
        self.life.clear();
        self.state.stats = Stats::default();
        self.dirty = true;
        log::info!("Life reset");
    }

    pub fn on_pointer_enter(&mut self, now: f64) {
        self.hovering = true;
        if self.state.phase == RunPhase::Idle {
            self.play(now);
        }
    }

    pub fn on_pointer_leave(&mut self) {
        self.hovering = false;
    }

    /// Paint the cell under the cursor (pixel coordinates relative to the
    /// canvas) while it hovers the canvas, running or not.
    pub fn on_pointer_move(&mut self, pos: Vec2) {
        if !self.hovering {
            return;
        }
        let Some((x, y)) = self.life.cell_at(pos) else {
            return;
        };
        if self.life.cell(x, y) == ALIVE {
            return;
        }
        if self.life.paint(x, y) {
            self.refresh_stats();
            self.dirty = true;
        }
    }

    /// New viewport size in CSS pixels. Discards the current board.
    pub fn on_resize(&mut self, viewport: Vec2) {
        let cell_px = self.life.config().cell_px_for(viewport.x);
        self.life.resize(viewport, cell_px);
        self.refresh_stats();
        self.dirty = true;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if self.state.theme != theme {
            self.state.theme = theme;
            self.dirty = true;
        }
    }

    pub fn toggle_theme(&mut self) {
        self.set_theme(self.state.theme.toggled());
    }

    /// Poll timers, then step if the governor allows it
    pub fn frame(&mut self, now: f64) -> FrameOutcome {
        if self.seed_timer.poll(now) && self.life.seed().is_some() {
            self.refresh_stats();
            self.dirty = true;
        }

        if self.ramp_timer.poll(now) {
            let max_fps = self.life.config().max_fps;
            self.fps = (self.fps + 1).min(max_fps);
            if self.fps >= max_fps {
                self.ramp_timer.stop();
                log::debug!("Frame rate ramp finished at {} fps", self.fps);
            }
        }

        if self.state.phase == RunPhase::Running {
            let step_ms = 1000.0 / self.fps.max(1) as f64;
            if now - self.last_step >= step_ms {
                self.life.step();
                self.last_step = now;
                self.refresh_stats();
                self.dirty = false;
                return FrameOutcome::Stepped;
            }
        }

        if std::mem::take(&mut self.dirty) {
            FrameOutcome::Redraw
        } else {
            FrameOutcome::Idle
        }
    }

    fn refresh_stats(&mut self) {
        self.state.stats = self.life.stats();
    }

    pub fn stats(&self) -> Stats {
        self.state.stats
    }

    pub fn state(&self) -> &HeroState {
        &self.state
    }

    pub fn phase(&self) -> RunPhase {
        self.state.phase
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn life(&self) -> &LifeState {
        &self.life
    }
}
