//! Theme colours

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::consts::FADE_STEPS;
use crate::sim::Cell;

/// Page theme signalled by the surrounding app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }
}

/// Opaque colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn grey(v: u8) -> Self {
        Self::new(v, v, v)
    }

    pub const fn opaque(self) -> Rgba {
        Rgba::new(self.r, self.g, self.b, 255)
    }

    /// Linear interpolation toward `other` by `t` in [0, 1], rounded
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

/// Colour with straight alpha; doubles as the pixel format of `PixelBuffer`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// `rgb` with a CSS-style 0.0-1.0 alpha
    pub fn with_alpha(rgb: Rgb, alpha: f32) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b, (alpha.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// CSS colour string for canvas fill/stroke styles
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("rgb({},{},{})", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a as f32 / 255.0)
        }
    }
}

/// Per-theme colour table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Rgb,
    pub alive: Rgb,
    /// Colour of a cell that has fully faded out
    pub faded: Rgb,
    /// Colour of a cell that died this generation
    pub just_died: Rgb,
    /// Minor grid line colour and alpha
    pub grid_line: (Rgb, f32),
    /// Major grid cross colour and alpha
    pub grid_major: (Rgb, f32),
}

pub const LIGHT: Palette = Palette {
    background: Rgb::grey(0xff),
    alive: Rgb::grey(0x44),
    faded: Rgb::grey(255),
    just_died: Rgb::grey(68),
    grid_line: (Rgb::grey(0), 0.03),
    grid_major: (Rgb::grey(0), 0.12),
};

pub const DARK: Palette = Palette {
    background: Rgb::grey(0x1a),
    alive: Rgb::grey(0xbb),
    faded: Rgb::grey(26),
    just_died: Rgb::grey(187),
    grid_line: (Rgb::grey(255), 0.05),
    grid_major: (Rgb::grey(255), 0.15),
};

/// Colour of a fading cell: `fade / max_fade` of the way from fully faded to
/// just died
pub fn color_for_fade(fade: Cell, max_fade: Cell, theme: Theme) -> Rgb {
    let palette = theme.palette();
    let t = if max_fade > 0 {
        fade as f32 / max_fade as f32
    } else {
        0.0
    };
    palette.faded.lerp(palette.just_died, t)
}

/// Fill colour for a cell value, `None` when nothing should be drawn
pub fn cell_color(value: Cell, theme: Theme) -> Option<Rgb> {
    match value {
        crate::consts::ALIVE => Some(theme.palette().alive),
        v if v > 0 => Some(color_for_fade(v, FADE_STEPS, theme)),
        _ => None,
    }
}
