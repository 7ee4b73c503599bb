//! Color constants for the page view.

use eframe::egui::Color32;

pub const PAGE_FILL: Color32 = Color32::from_rgb(252, 252, 250);
pub const PAGE_BORDER: Color32 = Color32::from_rgb(200, 200, 205);
pub const PAGE_SHADOW: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 60);
pub const TEXT_LINE: Color32 = Color32::from_rgb(205, 208, 215);
pub const HEADING_LINE: Color32 = Color32::from_rgb(120, 125, 140);
