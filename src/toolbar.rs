//! Toolbar content hosted by the floating glass container.

use crate::style::{Primitive, PrimitiveStyle, StyleOption, StyleState};
use eframe::egui::{self, Id, Sense, Shape, TextStyle, Ui, vec2};
use std::cell::RefCell;
use std::rc::Rc;

/// A toolbar owned by the application and lent to a container.
pub type SharedToolbar = Rc<RefCell<Toolbar>>;

/// Padding between a tool button's label and its edge.
const BUTTON_PADDING: egui::Vec2 = vec2(8.0, 5.0);

/// Width reserved for a separator.
const SEPARATOR_WIDTH: f32 = 9.0;

/// A clickable toolbar entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolAction {
    pub id: String,
    pub label: String,
    pub tooltip: Option<String>,
    pub enabled: bool,
}

impl ToolAction {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            tooltip: None,
            enabled: true,
        }
    }

    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarItem {
    Action(ToolAction),
    Separator,
}

/// A horizontal row of tool buttons.
#[derive(Debug, Clone, Default)]
pub struct Toolbar {
    items: Vec<ToolbarItem>,
    transparent_background: bool,
    host: Option<Id>,
}

impl Toolbar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps the toolbar for sharing with a container.
    pub fn shared(self) -> SharedToolbar {
        Rc::new(RefCell::new(self))
    }

    pub fn with_action(mut self, action: ToolAction) -> Self {
        self.items.push(ToolbarItem::Action(action));
        self
    }

    pub fn with_separator(mut self) -> Self {
        self.items.push(ToolbarItem::Separator);
        self
    }

    pub fn items(&self) -> &[ToolbarItem] {
        &self.items
    }

    pub fn action_mut(&mut self, id: &str) -> Option<&mut ToolAction> {
        self.items.iter_mut().find_map(|item| match item {
            ToolbarItem::Action(action) if action.id == id => Some(action),
            _ => None,
        })
    }

    pub fn set_enabled(&mut self, id: &str, enabled: bool) {
        if let Some(action) = self.action_mut(id) {
            action.enabled = enabled;
        }
    }

    /// Skips painting the toolbar panel so whatever is behind shows through.
    pub fn set_transparent_background(&mut self, transparent: bool) {
        self.transparent_background = transparent;
    }

    pub fn has_transparent_background(&self) -> bool {
        self.transparent_background
    }

    /// Container currently hosting this toolbar.
    pub fn host(&self) -> Option<Id> {
        self.host
    }

    pub(crate) fn set_host(&mut self, host: Option<Id>) {
        self.host = host;
    }

    /// Renders the toolbar and returns the id of the action clicked this frame.
    pub fn show(&self, ui: &mut Ui, style: &dyn PrimitiveStyle) -> Option<String> {
        let panel_idx = ui.painter().add(Shape::Noop);

        let inner = ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            let mut clicked = None;
            for item in &self.items {
                match item {
                    ToolbarItem::Action(action) => {
                        if tool_button(ui, style, action) {
                            clicked = Some(action.id.clone());
                        }
                    }
                    ToolbarItem::Separator => separator(ui, style),
                }
            }
            clicked
        });

        if !self.transparent_background {
            let option = StyleOption::new(inner.response.rect);
            let shapes = style.draw_primitive(Primitive::PanelToolBar, &option, ui.visuals());
            ui.painter().set(panel_idx, Shape::Vec(shapes));
        }

        if let Some(id) = &inner.inner {
            log::debug!("Toolbar action triggered: {id}");
        }
        inner.inner
    }
}

fn tool_button(ui: &mut Ui, style: &dyn PrimitiveStyle, action: &ToolAction) -> bool {
    let text_color = if action.enabled {
        ui.visuals().text_color()
    } else {
        ui.visuals().weak_text_color()
    };
    let font_id = TextStyle::Button.resolve(ui.style());
    let galley = ui
        .painter()
        .layout_no_wrap(action.label.clone(), font_id, text_color);

    let sense = if action.enabled {
        Sense::click()
    } else {
        Sense::hover()
    };
    let (rect, response) = ui.allocate_exact_size(galley.size() + 2.0 * BUTTON_PADDING, sense);

    if ui.is_rect_visible(rect) {
        let state = StyleState {
            hovered: action.enabled && response.hovered(),
            pressed: action.enabled && response.is_pointer_button_down_on(),
            enabled: action.enabled,
        };
        let option = StyleOption::new(rect).with_state(state);
        ui.painter()
            .extend(style.draw_primitive(Primitive::PanelButtonTool, &option, ui.visuals()));
        let text_pos = rect.center() - galley.size() / 2.0;
        ui.painter().galley(text_pos, galley, text_color);
    }

    let response = match &action.tooltip {
        Some(tooltip) => response.on_hover_text(tooltip.as_str()),
        None => response,
    };
    response.clicked()
}

fn separator(ui: &mut Ui, style: &dyn PrimitiveStyle) {
    let height = ui.text_style_height(&TextStyle::Button) + 2.0 * BUTTON_PADDING.y;
    let (rect, _) = ui.allocate_exact_size(vec2(SEPARATOR_WIDTH, height), Sense::hover());
    let option = StyleOption::new(rect);
    ui.painter()
        .extend(style.draw_primitive(Primitive::ToolBarSeparator, &option, ui.visuals()));
}
