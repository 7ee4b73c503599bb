//! Press-move-release window dragging.

use eframe::egui::{PointerButton, Pos2, Vec2};

#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    dragging: bool,
    grab_offset: Vec2,
}

impl DragState {
    /// Begins a drag on primary press, remembering where the pointer grabbed the window.
    pub fn press(&mut self, button: PointerButton, pointer: Pos2, window_origin: Pos2) -> bool {
        if button != PointerButton::Primary {
            return false;
        }
        self.dragging = true;
        self.grab_offset = pointer - window_origin;
        true
    }

    /// New window origin tracking `pointer`, if a drag is in progress.
    pub fn drag_to(&self, pointer: Pos2) -> Option<Pos2> {
        self.dragging.then(|| pointer - self.grab_offset)
    }

    pub fn release(&mut self, button: PointerButton) -> bool {
        if button != PointerButton::Primary {
            return false;
        }
        self.dragging = false;
        true
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}
