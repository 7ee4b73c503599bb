//! Anchored placement of a floating widget against its parent.

use crate::constants::ANCHOR_MARGIN;
use eframe::egui::{Pos2, Rect, Vec2, vec2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of six fixed placements along the top or bottom edge of the parent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Anchor {
    #[default]
    TopCenter,
    TopLeft,
    TopRight,
    BottomCenter,
    BottomLeft,
    BottomRight,
}

impl Anchor {
    pub const ALL: [Anchor; 6] = [
        Anchor::TopCenter,
        Anchor::TopLeft,
        Anchor::TopRight,
        Anchor::BottomCenter,
        Anchor::BottomLeft,
        Anchor::BottomRight,
    ];

    /// Offset of the widget's top-left corner from the parent's top-left corner.
    pub fn offset(self, parent: Vec2, widget: Vec2) -> Vec2 {
        let left = ANCHOR_MARGIN;
        let center = (parent.x - widget.x) / 2.0;
        let right = parent.x - widget.x - ANCHOR_MARGIN;
        let top = ANCHOR_MARGIN;
        let bottom = parent.y - widget.y - ANCHOR_MARGIN;

        match self {
            Anchor::TopCenter => vec2(center, top),
            Anchor::TopLeft => vec2(left, top),
            Anchor::TopRight => vec2(right, top),
            Anchor::BottomCenter => vec2(center, bottom),
            Anchor::BottomLeft => vec2(left, bottom),
            Anchor::BottomRight => vec2(right, bottom),
        }
    }

    /// Absolute top-left position of a widget of `widget` size anchored in `parent`.
    pub fn place(self, parent: Rect, widget: Vec2) -> Pos2 {
        parent.min + self.offset(parent.size(), widget)
    }

    pub fn label(self) -> &'static str {
        match self {
            Anchor::TopCenter => "Top center",
            Anchor::TopLeft => "Top left",
            Anchor::TopRight => "Top right",
            Anchor::BottomCenter => "Bottom center",
            Anchor::BottomLeft => "Bottom left",
            Anchor::BottomRight => "Bottom right",
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
