//! Logo exclusion rectangle
//!
//! The hero overlays a name label on the canvas. Cells under it are never
//! drawn and cannot be painted, though they are still simulated.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::LifeConfig;

/// Largest label font size (px)
const MAX_FONT_PX: f32 = 160.0;
/// Label font size as a fraction of viewport width
const FONT_VW: f32 = 0.18;
/// Approximate glyph advance relative to font size
const CHAR_WIDTH_EM: f32 = 0.6;
/// Letter spacing relative to font size
const LETTER_SPACING_EM: f32 = 0.08;
/// Letter spacing is budgeted for this many gaps
const LETTER_SPACING_GAPS: f32 = 10.0;
/// Label box height relative to font size
const LINE_HEIGHT_EM: f32 = 1.4;

/// Protected area on narrow viewports, as a fraction of grid dimensions
const MOBILE_WIDTH_FRACTION: f32 = 0.8;
const MOBILE_HEIGHT_FRACTION: f32 = 0.4;

/// Inclusive rectangle in cell coordinates; may extend past the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionRect {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Default for ExclusionRect {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl ExclusionRect {
    /// Contains no cell
    pub const EMPTY: Self = Self {
        left: 0,
        right: -1,
        top: 0,
        bottom: -1,
    };

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        y >= self.top && y <= self.bottom && x >= self.left && x <= self.right
    }

    pub fn is_empty(&self) -> bool {
        self.left > self.right || self.top > self.bottom
    }

    /// Compute the rectangle for a viewport.
    ///
    /// Narrow viewports protect a large centred band sized from the grid.
    /// Wide viewports estimate the label's rendered box from its font size.
    pub fn compute(
        viewport: Vec2,
        cell_px: u32,
        grid_width: usize,
        grid_height: usize,
        config: &LifeConfig,
    ) -> Self {
        if config.is_mobile(viewport.x) {
            Self::centred_band(grid_width, grid_height)
        } else {
            Self::label_box(viewport, cell_px, config)
        }
    }

    fn centred_band(grid_width: usize, grid_height: usize) -> Self {
        let cx = (grid_width / 2) as i32;
        let cy = (grid_height / 2) as i32;
        let half_w = ((grid_width as f32 * MOBILE_WIDTH_FRACTION).floor() as i32) / 2;
        let half_h = ((grid_height as f32 * MOBILE_HEIGHT_FRACTION).floor() as i32) / 2;
        Self {
            left: cx - half_w,
            right: cx + half_w,
            top: cy - half_h,
            bottom: cy + half_h,
        }
    }

    fn label_box(viewport: Vec2, cell_px: u32, config: &LifeConfig) -> Self {
        let font = (viewport.x * FONT_VW).min(MAX_FONT_PX);
        let text_width = config.label_chars as f32 * font * CHAR_WIDTH_EM
            + font * LETTER_SPACING_EM * LETTER_SPACING_GAPS;
        let size = Vec2::new(text_width + config.label_padding_px, font * LINE_HEIGHT_EM);
        let origin = (viewport - size) / 2.0;
        let cell = cell_px.max(1) as f32;

        Self {
            left: (origin.x / cell).floor() as i32 - 1,
            right: ((origin.x + size.x) / cell).ceil() as i32,
            top: (origin.y / cell).floor() as i32 - 1,
            bottom: ((origin.y + size.y) / cell).ceil() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_contains_nothing() {
        let rect = ExclusionRect::EMPTY;
        assert!(rect.is_empty());
        assert!(!rect.contains(0, 0));
        assert!(!rect.contains(-1, -1));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let rect = ExclusionRect {
            left: 2,
            right: 4,
            top: 1,
            bottom: 3,
        };
        assert!(rect.contains(2, 1));
        assert!(rect.contains(4, 3));
        assert!(!rect.contains(5, 3));
        assert!(!rect.contains(2, 0));
    }

    #[test]
    fn test_mobile_band() {
        // 390x844 at 35px: 12x25 grid
        let config = LifeConfig::default();
        let rect = ExclusionRect::compute(Vec2::new(390.0, 844.0), 35, 12, 25, &config);
        // centre (6, 12), 80% of 12 = 9 -> half 4, 40% of 25 = 10 -> half 5
        assert_eq!(
            rect,
            ExclusionRect {
                left: 2,
                right: 10,
                top: 7,
                bottom: 17
            }
        );
    }

    #[test]
    fn test_desktop_label_box() {
        // 1920x1080 at 25px. font 160, text 11*96 + 128 = 1184, tw 1344, th 224
        // left = 288, top = 428
        let config = LifeConfig::default();
        let rect = ExclusionRect::compute(Vec2::new(1920.0, 1080.0), 25, 77, 44, &config);
        assert_eq!(
            rect,
            ExclusionRect {
                left: 10,
                right: 66,
                top: 16,
                bottom: 27
            }
        );
    }

    #[test]
    fn test_desktop_box_is_centred() {
        let config = LifeConfig::default();
        let rect = ExclusionRect::compute(Vec2::new(1200.0, 800.0), 25, 48, 32, &config);
        let left_margin = rect.left;
        let right_margin = 47 - rect.right;
        assert!((left_margin - right_margin).abs() <= 2);
        assert!(rect.top > 0 && rect.bottom < 31);
    }

    #[test]
    fn test_label_box_can_exceed_narrow_desktop() {
        // Just above the breakpoint the estimated label is wider than the canvas
        let config = LifeConfig {
            mobile_breakpoint_px: 300.0,
            ..LifeConfig::default()
        };
        let rect = ExclusionRect::compute(Vec2::new(400.0, 300.0), 25, 16, 12, &config);
        assert!(rect.left < 0);
        assert!(rect.right >= 16);
    }
}
