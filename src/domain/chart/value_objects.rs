use derive_more::Constructor;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

use crate::domain::order_book::Side;

/// Value Object - Canvas size in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Constructor, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }

    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }
}

/// Value Object - Point in canvas pixel space
#[derive(Debug, Clone, Copy, PartialEq, Default, Constructor, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Value Object - User toggles for optional layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub show_grid: bool,
    pub show_points: bool,
    pub show_center_line: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self { show_grid: true, show_points: true, show_center_line: true }
    }
}

/// One toggleable layer of [`ViewConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr)]
pub enum ViewFlag {
    #[strum(serialize = "Grid")]
    Grid,
    #[strum(serialize = "Points")]
    Points,
    #[strum(serialize = "Center")]
    CenterLine,
}

impl ViewConfig {
    pub fn is_enabled(&self, flag: ViewFlag) -> bool {
        match flag {
            ViewFlag::Grid => self.show_grid,
            ViewFlag::Points => self.show_points,
            ViewFlag::CenterLine => self.show_center_line,
        }
    }

    pub fn set(&mut self, flag: ViewFlag, enabled: bool) {
        match flag {
            ViewFlag::Grid => self.show_grid = enabled,
            ViewFlag::Points => self.show_points = enabled,
            ViewFlag::CenterLine => self.show_center_line = enabled,
        }
    }

    pub fn toggle(&mut self, flag: ViewFlag) {
        self.set(flag, !self.is_enabled(flag));
    }
}

/// Value Object - Color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    pub fn to_hex(&self) -> u32 {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// `#rrggbb`, alpha is applied separately through the surface's global alpha
    pub fn to_css_hex(&self) -> String {
        format!("#{:06x}", self.to_hex())
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self { a: alpha, ..*self }
    }
}

/// Value Object - Light or dark page background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay, EnumString, AsRefStr, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    #[strum(serialize = "light")]
    Light,
    #[strum(serialize = "dark")]
    Dark,
}

const UP_COLOR: u32 = 0x26a69a;
const DOWN_COLOR: u32 = 0xef5350;
const GREY_300: u32 = 0xe0e0e0;
const GREY_400: u32 = 0xbdbdbd;
const GREY_600: u32 = 0x757575;
const GREY_800: u32 = 0x424242;

/// Value Object - Colors and stroke metrics for one chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthTheme {
    pub buy: Color,
    pub sell: Color,
    pub grid: Color,
    pub axis: Color,
    pub center_line: Color,
    pub crosshair: Color,
    pub hover_shade: Color,
    pub area_alpha: f32,
    pub line_width: f64,
    pub marker_radius: f64,
    pub axis_width: f64,
    pub hair_width: f64,
    pub crosshair_dash: [f64; 2],
}

impl DepthTheme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        let (axis, divider) = match mode {
            ThemeMode::Light => (GREY_800, GREY_600),
            ThemeMode::Dark => (GREY_300, GREY_400),
        };
        Self {
            buy: Color::from_hex(UP_COLOR),
            sell: Color::from_hex(DOWN_COLOR),
            grid: Color::from_hex(GREY_300),
            axis: Color::from_hex(axis),
            center_line: Color::from_hex(divider),
            crosshair: Color::from_hex(divider),
            hover_shade: Color::from_hex(GREY_300).with_alpha(0.2),
            area_alpha: 0.1,
            line_width: 1.4,
            marker_radius: 3.0,
            axis_width: 2.0,
            hair_width: 1.0,
            crosshair_dash: [4.0, 2.0],
        }
    }

    pub fn side_color(&self, side: Side) -> Color {
        match side {
            Side::Buy => self.buy,
            Side::Sell => self.sell,
        }
    }
}

impl Default for DepthTheme {
    fn default() -> Self {
        Self::for_mode(ThemeMode::Light)
    }
}
