//! Theme-dependent colors for the glass toolbar and its tool buttons.

use crate::theme::Theme;
use eframe::egui::Color32;

/// Every color the glass style paints with, resolved for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlassPalette {
    pub hover: Color32,
    pub press: Color32,
    pub gradient_start: Color32,
    pub gradient_end: Color32,
    pub border: Color32,
    pub inner_shadow: Color32,
}

impl GlassPalette {
    pub fn for_theme(theme: Theme) -> Self {
        let rgba = Color32::from_rgba_unmultiplied;
        match theme {
            Theme::Dark => Self {
                hover: rgba(80, 80, 85, 100),
                press: rgba(60, 60, 65, 150),
                gradient_start: rgba(40, 40, 45, 204),
                gradient_end: rgba(30, 30, 35, 204),
                border: rgba(255, 255, 255, 40),
                inner_shadow: rgba(0, 0, 0, 30),
            },
            Theme::Light => Self {
                hover: rgba(200, 200, 200, 100),
                press: rgba(180, 180, 180, 150),
                gradient_start: rgba(255, 255, 255, 178),
                gradient_end: rgba(245, 245, 250, 178),
                border: rgba(0, 0, 0, 40),
                inner_shadow: rgba(0, 0, 0, 20),
            },
        }
    }
}
