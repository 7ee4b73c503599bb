//! Light/dark theme detection from the active egui visuals.

use crate::constants::DARK_LIGHTNESS_THRESHOLD;
use eframe::egui::{Color32, Visuals};

/// Theme variant used to pick glass colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Classifies a window background color.
    pub fn from_window_color(color: Color32) -> Self {
        if lightness(color) < DARK_LIGHTNESS_THRESHOLD {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Classifies the window fill of the given visuals.
    pub fn from_visuals(visuals: &Visuals) -> Self {
        Self::from_window_color(visuals.window_fill)
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// HSL lightness of a color, in `0..=255`.
pub fn lightness(color: Color32) -> u8 {
    let [r, g, b, _] = color.to_srgba_unmultiplied();
    let max = r.max(g).max(b) as u16;
    let min = r.min(g).min(b) as u16;
    ((max + min) / 2) as u8
}
