//! Data-driven simulation tuning
//!
//! Defaults match the hero background as shipped. The browser host can
//! override any subset through a JSON `data-life-config` attribute.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Frame rate the ramp climbs to (generations per second)
    pub max_fps: u32,
    /// Interval between pattern injections (ms)
    pub seed_period_ms: f64,
    /// Interval between +1 fps ramp steps (ms)
    pub ramp_period_ms: f64,
    /// Viewports narrower than this use the mobile layout
    pub mobile_breakpoint_px: f32,
    /// Cell size below the breakpoint
    pub mobile_cell_px: u32,
    /// Cell size at or above the breakpoint
    pub desktop_cell_px: u32,
    /// Characters in the overlay label, used to estimate its width
    pub label_chars: u32,
    /// Horizontal padding added around the estimated label width (px)
    pub label_padding_px: f32,
    /// Fixed RNG seed; the host picks one from the clock when unset
    pub rng_seed: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            max_fps: 10,
            seed_period_ms: 5_000.0,
            ramp_period_ms: 1_000.0,
            mobile_breakpoint_px: 1000.0,
            mobile_cell_px: 35,
            desktop_cell_px: 25,
            label_chars: 11,
            label_padding_px: 160.0,
            rng_seed: None,
        }
    }
}

impl LifeConfig {
    /// Parse a (possibly partial) JSON object; missing keys take defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::validated)
    }

    /// Clamp values that would stall or divide by zero
    pub fn validated(mut self) -> Self {
        self.max_fps = self.max_fps.max(1);
        self.mobile_cell_px = self.mobile_cell_px.max(1);
        self.desktop_cell_px = self.desktop_cell_px.max(1);
        if !(self.seed_period_ms >= 1.0) {
            self.seed_period_ms = 1.0;
        }
        if !(self.ramp_period_ms >= 1.0) {
            self.ramp_period_ms = 1.0;
        }
        self
    }

    #[inline]
    pub fn is_mobile(&self, viewport_width: f32) -> bool {
        viewport_width < self.mobile_breakpoint_px
    }

    /// Cell size in pixels for a viewport of the given width
    pub fn cell_px_for(&self, viewport_width: f32) -> u32 {
        if self.is_mobile(viewport_width) {
            self.mobile_cell_px
        } else {
            self.desktop_cell_px
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = LifeConfig::from_json(r#"{"max_fps": 24, "rng_seed": 5}"#).unwrap();
        assert_eq!(config.max_fps, 24);
        assert_eq!(config.rng_seed, Some(5));
        assert_eq!(config.desktop_cell_px, 25);
        assert_eq!(config.seed_period_ms, 5_000.0);
    }

    #[test]
    fn test_validated_clamps() {
        let config = LifeConfig::from_json(
            r#"{"max_fps": 0, "mobile_cell_px": 0, "seed_period_ms": -3, "ramp_period_ms": 0}"#,
        )
        .unwrap();
        assert_eq!(config.max_fps, 1);
        assert_eq!(config.mobile_cell_px, 1);
        assert_eq!(config.seed_period_ms, 1.0);
        assert_eq!(config.ramp_period_ms, 1.0);
    }

    #[test]
    fn test_bad_json_is_error() {
        assert!(LifeConfig::from_json("{max_fps:").is_err());
    }

    #[test]
    fn test_cell_size_by_breakpoint() {
        let config = LifeConfig::default();
        assert_eq!(config.cell_px_for(390.0), 35);
        assert_eq!(config.cell_px_for(999.9), 35);
        assert_eq!(config.cell_px_for(1000.0), 25);
        assert_eq!(config.cell_px_for(1920.0), 25);
    }
}
