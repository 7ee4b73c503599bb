//! Primitive painting for toolbar widgets, with a glass proxy over a base style.

use crate::constants::TOOL_BUTTON_RADIUS;
use crate::palette::GlassPalette;
use crate::theme::Theme;
use eframe::egui::{Rect, Shape, Visuals};

/// Primitive elements a toolbar asks its style to paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// Background of a tool button.
    PanelButtonTool,
    /// Background of a whole toolbar.
    PanelToolBar,
    /// Divider between groups of tool buttons.
    ToolBarSeparator,
}

/// Interaction state of the widget being painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleState {
    pub hovered: bool,
    pub pressed: bool,
    pub enabled: bool,
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            hovered: false,
            pressed: false,
            enabled: true,
        }
    }
}

/// Geometry and state handed to [`PrimitiveStyle::draw_primitive`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleOption {
    pub rect: Rect,
    pub state: StyleState,
}

impl StyleOption {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            state: StyleState::default(),
        }
    }

    pub fn with_state(mut self, state: StyleState) -> Self {
        self.state = state;
        self
    }
}

/// Turns a primitive into shapes for the painter.
pub trait PrimitiveStyle {
    fn draw_primitive(&self, element: Primitive, option: &StyleOption, visuals: &Visuals)
    -> Vec<Shape>;
}

/// Plain egui look, driven entirely by the active [`Visuals`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseStyle;

impl PrimitiveStyle for BaseStyle {
    fn draw_primitive(
        &self,
        element: Primitive,
        option: &StyleOption,
        visuals: &Visuals,
    ) -> Vec<Shape> {
        let rect = option.rect;
        match element {
            Primitive::PanelButtonTool => {
                let state = option.state;
                if !state.enabled {
                    return Vec::new();
                }
                // Tool buttons stay flat until interacted with.
                let widget = if state.pressed {
                    &visuals.widgets.active
                } else if state.hovered {
                    &visuals.widgets.hovered
                } else {
                    return Vec::new();
                };
                vec![Shape::rect_filled(
                    rect,
                    widget.corner_radius,
                    widget.weak_bg_fill,
                )]
            }
            Primitive::PanelToolBar => vec![Shape::rect_filled(rect, 0.0, visuals.panel_fill)],
            Primitive::ToolBarSeparator => vec![Shape::vline(
                rect.center().x,
                rect.y_range().shrink(2.0),
                visuals.widgets.noninteractive.bg_stroke,
            )],
        }
    }
}

/// Glassmorphism proxy: rounded translucent highlights on tool buttons,
/// everything else left to the wrapped base style.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlassStyle<B = BaseStyle> {
    base: B,
}

impl<B: PrimitiveStyle> GlassStyle<B> {
    pub fn new(base: B) -> Self {
        Self { base }
    }
}

impl<B: PrimitiveStyle> PrimitiveStyle for GlassStyle<B> {
    fn draw_primitive(
        &self,
        element: Primitive,
        option: &StyleOption,
        visuals: &Visuals,
    ) -> Vec<Shape> {
        if element != Primitive::PanelButtonTool {
            return self.base.draw_primitive(element, option, visuals);
        }

        let palette = GlassPalette::for_theme(Theme::from_visuals(visuals));
        let mut shapes = Vec::new();
        if option.state.hovered {
            shapes.push(Shape::rect_filled(
                option.rect,
                TOOL_BUTTON_RADIUS,
                palette.hover,
            ));
        }
        if option.state.pressed {
            shapes.push(Shape::rect_filled(
                option.rect,
                TOOL_BUTTON_RADIUS,
                palette.press,
            ));
        }
        shapes
    }
}
