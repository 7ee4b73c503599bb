//! Frameless floating container that paints a glass background around a hosted toolbar.
//!
//! All state changes go through plain methods so the container can be driven by
//! egui's input in [`GlassToolbar::show_in`] or directly by a test clock.

use crate::anchor::Anchor;
use crate::animation::{AutoHideTimer, FadeAnimation, FadeCompletion};
use crate::constants::{
    BACKGROUND_RADIUS, BORDER_WIDTH, CONTENT_MARGIN, DEFAULT_AUTO_HIDE_TIMEOUT_MS, SHADOW_INSET,
    SHADOW_OPACITY, SHADOW_RADIUS,
};
use crate::drag::DragState;
use crate::palette::GlassPalette;
use crate::settings::ToolbarSettings;
use crate::shapes::{gradient_rounded_rect, rounded_rect_points, rounded_rect_stroke};
use crate::style::GlassStyle;
use crate::theme::Theme;
use crate::toolbar::SharedToolbar;
use eframe::egui::{self, Id, PointerButton, Pos2, Rect, Sense, Shape, Stroke, Vec2};
use std::hash::Hash;
use std::rc::Rc;
use std::time::Duration;

/// Floating, draggable toolbar host with fade animations and auto-hide.
pub struct GlassToolbar {
    id: Id,
    toolbar: Option<SharedToolbar>,
    style: GlassStyle,
    position: Anchor,
    auto_hide_enabled: bool,
    auto_hide_timeout_ms: u32,
    opacity: f32,
    visible: bool,

    /// Window origin in screen points.
    pos: Pos2,
    /// Last measured outer size, including content margins.
    size: Vec2,
    parent: Option<Rect>,
    pointer_inside: bool,

    drag: DragState,
    fade: FadeAnimation,
    auto_hide_timer: AutoHideTimer,
    /// Latest time seen by [`GlassToolbar::tick`].
    now: f64,
}

impl GlassToolbar {
    pub fn new(id_salt: impl Hash) -> Self {
        Self {
            id: Id::new(id_salt),
            toolbar: None,
            style: GlassStyle::default(),
            position: Anchor::default(),
            auto_hide_enabled: false,
            auto_hide_timeout_ms: DEFAULT_AUTO_HIDE_TIMEOUT_MS,
            opacity: 1.0,
            visible: false,
            pos: Pos2::ZERO,
            size: Vec2::ZERO,
            parent: None,
            pointer_inside: false,
            drag: DragState::default(),
            fade: FadeAnimation::default(),
            auto_hide_timer: AutoHideTimer::default(),
            now: 0.0,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    /// Hosts `toolbar`, releasing any previously hosted one.
    ///
    /// Passing the toolbar that is already hosted does nothing.
    pub fn set_toolbar(&mut self, toolbar: Option<SharedToolbar>) {
        let unchanged = match (&self.toolbar, &toolbar) {
            (Some(current), Some(new)) => Rc::ptr_eq(current, new),
            (None, None) => true,
            _ => false,
        };
        if unchanged {
            return;
        }

        if let Some(previous) = self.toolbar.take() {
            previous.borrow_mut().set_host(None);
            log::debug!("Released toolbar from {:?}", self.id);
        }

        if let Some(toolbar) = &toolbar {
            let mut hosted = toolbar.borrow_mut();
            hosted.set_host(Some(self.id));
            hosted.set_transparent_background(true);
            log::debug!("Hosting toolbar in {:?}", self.id);
        }
        self.toolbar = toolbar;
        // Forces a resize on the next frame, which re-anchors the container.
        self.size = Vec2::ZERO;
    }

    pub fn toolbar(&self) -> Option<&SharedToolbar> {
        self.toolbar.as_ref()
    }

    pub fn set_position(&mut self, position: Anchor) {
        self.position = position;
        self.update_position();
    }

    pub fn position(&self) -> Anchor {
        self.position
    }

    /// Current top-left corner in screen points.
    pub fn pos(&self) -> Pos2 {
        self.pos
    }

    /// Outer size of the container: the hosted toolbar plus content margins.
    pub fn size_hint(&self) -> Vec2 {
        self.size
    }

    /// Geometry the anchor is resolved against.
    pub fn set_parent_rect(&mut self, parent: Rect) {
        self.parent = Some(parent);
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.pos, self.size)
    }

    fn update_position(&mut self) {
        let Some(parent) = self.parent else {
            return;
        };
        self.pos = self.position.place(parent, self.size);
    }

    pub fn set_auto_hide_enabled(&mut self, enabled: bool) {
        self.auto_hide_enabled = enabled;
        if enabled {
            self.reset_auto_hide_timer();
        } else {
            self.auto_hide_timer.stop();
        }
    }

    pub fn is_auto_hide_enabled(&self) -> bool {
        self.auto_hide_enabled
    }

    /// Idle time before fading out. Takes effect the next time the timer starts.
    pub fn set_auto_hide_timeout(&mut self, milliseconds: u32) {
        self.auto_hide_timeout_ms = milliseconds;
    }

    pub fn auto_hide_timeout(&self) -> u32 {
        self.auto_hide_timeout_ms
    }

    /// Whether an auto-hide countdown is pending.
    pub fn is_auto_hide_pending(&self) -> bool {
        self.auto_hide_timer.is_active()
    }

    fn reset_auto_hide_timer(&mut self) {
        if self.auto_hide_enabled {
            self.auto_hide_timer.start(self.now, self.auto_hide_timeout_ms);
        }
    }

    /// Sets the opacity, clamped to `0.0..=1.0`.
    pub fn set_opacity(&mut self, opacity: f32) {
        // NaN has no meaningful clamp; treat it as fully transparent.
        self.opacity = if opacity.is_nan() {
            0.0
        } else {
            opacity.clamp(0.0, 1.0)
        };
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_animating(&self) -> bool {
        self.fade.is_running()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Shows the container immediately at its current opacity.
    pub fn show(&mut self) {
        if self.visible {
            return;
        }
        self.visible = true;
        self.on_show();
    }

    /// Hides the container immediately.
    pub fn hide(&mut self) {
        if !self.visible {
            return;
        }
        self.visible = false;
        self.pointer_inside = false;
        self.drag.release(PointerButton::Primary);
    }

    /// Shows the container and fades it to full opacity.
    pub fn show_animated(&mut self) {
        self.show();
        self.fade.stop();
        self.fade.start(self.now, self.opacity, 1.0, None);
    }

    /// Fades the container out and hides it once transparent.
    pub fn hide_animated(&mut self) {
        self.fade.stop();
        self.fade
            .start(self.now, self.opacity, 0.0, Some(FadeCompletion::Hide));
    }

    fn on_show(&mut self) {
        self.update_position();
        if self.auto_hide_enabled {
            self.reset_auto_hide_timer();
        }
    }

    pub fn apply_settings(&mut self, settings: &ToolbarSettings) {
        self.set_auto_hide_timeout(settings.auto_hide_timeout_ms);
        self.set_opacity(settings.opacity);
        self.set_position(settings.anchor);
        self.set_auto_hide_enabled(settings.auto_hide);
    }

    pub fn settings(&self) -> ToolbarSettings {
        ToolbarSettings {
            anchor: self.position,
            auto_hide: self.auto_hide_enabled,
            auto_hide_timeout_ms: self.auto_hide_timeout_ms,
            opacity: self.opacity,
        }
    }

    /// Advances the clock, firing the auto-hide timer and stepping the fade.
    pub fn tick(&mut self, now: f64) {
        self.now = now;

        if self.auto_hide_timer.poll(now) {
            log::debug!("Auto-hide timeout elapsed, fading out");
            self.hide_animated();
        }

        if let Some(step) = self.fade.tick(now) {
            self.set_opacity(step.value);
            if step.completed == Some(FadeCompletion::Hide) {
                self.hide();
            }
        }
    }

    pub fn on_pointer_pressed(&mut self, button: PointerButton, pointer: Pos2) {
        self.drag.press(button, pointer, self.pos);
    }

    pub fn on_pointer_moved(&mut self, pointer: Pos2) {
        if let Some(pos) = self.drag.drag_to(pointer) {
            self.pos = pos;
        }
    }

    pub fn on_pointer_released(&mut self, button: PointerButton) {
        self.drag.release(button);
    }

    pub fn on_pointer_entered(&mut self) {
        self.pointer_inside = true;
        if self.auto_hide_enabled {
            self.auto_hide_timer.stop();
            if self.opacity < 1.0 {
                self.show_animated();
            }
        }
    }

    pub fn on_pointer_left(&mut self) {
        self.pointer_inside = false;
        if self.auto_hide_enabled {
            self.reset_auto_hide_timer();
        }
    }

    pub fn on_resize(&mut self, size: Vec2) {
        self.size = size;
        self.update_position();
    }

    /// Glass background for a container occupying `rect`.
    pub fn paint_shapes(rect: Rect, theme: Theme, opacity: f32) -> Vec<Shape> {
        let palette = GlassPalette::for_theme(theme);
        let from = palette.gradient_start.gamma_multiply(opacity);
        let to = palette.gradient_end.gamma_multiply(opacity);

        let background = gradient_rounded_rect(rect, BACKGROUND_RADIUS, from, to);
        let border = rounded_rect_stroke(
            rect.shrink(BORDER_WIDTH / 2.0),
            BACKGROUND_RADIUS,
            Stroke::new(BORDER_WIDTH, palette.border.gamma_multiply(opacity)),
        );

        let shadow_rect = rect.shrink(SHADOW_INSET);
        let shadow = Shape::convex_polygon(
            rounded_rect_points(shadow_rect, SHADOW_RADIUS),
            palette.inner_shadow.gamma_multiply(opacity * SHADOW_OPACITY),
            Stroke::NONE,
        );

        vec![background, border, shadow]
    }

    /// Runs one frame: applies input, paints, and returns the id of a clicked action.
    pub fn show_in(&mut self, ctx: &egui::Context, parent: Rect) -> Option<String> {
        self.set_parent_rect(parent);
        self.tick(ctx.input(|i| i.time));

        if !self.visible {
            return None;
        }

        let theme = Theme::from_visuals(&ctx.style().visuals);
        let opacity = self.opacity;
        let drag_id = self.id.with("drag");
        let drag_rect = self.rect();
        let toolbar = self.toolbar.clone();
        let style = self.style;

        let area = egui::Area::new(self.id)
            .order(egui::Order::Foreground)
            .fixed_pos(self.pos)
            .constrain(false)
            .show(ctx, |ui| {
                let background = ui.painter().clone();
                let background_idx = background.add(Shape::Noop);

                // Registered before the toolbar so tool buttons sit on top of it.
                let drag_response = ui.interact(drag_rect, drag_id, Sense::drag());

                ui.multiply_opacity(opacity);
                let frame = egui::Frame::NONE
                    .inner_margin(egui::Margin::same(CONTENT_MARGIN))
                    .show(ui, |ui| {
                        toolbar
                            .as_ref()
                            .and_then(|toolbar| toolbar.borrow().show(ui, &style))
                    });

                let rect = frame.response.rect;
                background.set(
                    background_idx,
                    Shape::Vec(Self::paint_shapes(rect, theme, opacity)),
                );
                let hovered = ui.rect_contains_pointer(rect);
                (frame.inner, drag_response, hovered)
            });

        let (clicked, drag_response, hovered) = area.inner;
        self.handle_drag(ctx, &drag_response);

        match (hovered, self.pointer_inside) {
            (true, false) => self.on_pointer_entered(),
            (false, true) => self.on_pointer_left(),
            _ => {}
        }

        let size = area.response.rect.size();
        if size != self.size {
            self.on_resize(size);
        }

        self.schedule_repaint(ctx);
        clicked
    }

    fn handle_drag(&mut self, ctx: &egui::Context, response: &egui::Response) {
        if response.drag_started_by(PointerButton::Primary)
            && let Some(pointer) = ctx.input(|i| i.pointer.press_origin())
        {
            self.on_pointer_pressed(PointerButton::Primary, pointer);
        }
        if response.dragged_by(PointerButton::Primary)
            && let Some(pointer) = ctx.pointer_interact_pos()
        {
            self.on_pointer_moved(pointer);
            ctx.request_repaint();
        }
        if response.drag_stopped_by(PointerButton::Primary) {
            self.on_pointer_released(PointerButton::Primary);
        }
    }

    fn schedule_repaint(&self, ctx: &egui::Context) {
        if self.fade.is_running() {
            ctx.request_repaint();
        } else if let Some(remaining) = self.auto_hide_timer.remaining(self.now) {
            ctx.request_repaint_after(Duration::from_secs_f64(remaining));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FADE_DURATION;
    use crate::toolbar::{ToolAction, Toolbar};
    use eframe::egui::{Color32, pos2, vec2};

    fn parented() -> GlassToolbar {
        let mut glass = GlassToolbar::new("test");
        glass.set_parent_rect(Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0)));
        glass.on_resize(vec2(300.0, 56.0));
        glass
    }

    #[test]
    fn defaults() {
        let glass = GlassToolbar::new("defaults");
        assert_eq!(glass.position(), Anchor::TopCenter);
        assert!(!glass.is_auto_hide_enabled());
        assert_eq!(glass.auto_hide_timeout(), 3000);
        assert_eq!(glass.opacity(), 1.0);
        assert!(!glass.is_visible());
        assert!(glass.toolbar().is_none());
    }

    #[test]
    fn opacity_is_clamped() {
        let mut glass = GlassToolbar::new("opacity");
        for (input, stored) in [
            (-3.0, 0.0),
            (-0.0001, 0.0),
            (0.0, 0.0),
            (0.42, 0.42),
            (1.0, 1.0),
            (1.5, 1.0),
            (f32::INFINITY, 1.0),
            (f32::NEG_INFINITY, 0.0),
        ] {
            glass.set_opacity(input);
            assert_eq!(glass.opacity(), stored, "input {input}");
        }
    }

    #[test]
    fn anchors_resolve_against_parent() {
        let mut glass = parented();
        glass.set_position(Anchor::BottomRight);
        assert_eq!(glass.pos(), pos2(480.0, 524.0));
        glass.set_position(Anchor::TopCenter);
        assert_eq!(glass.pos(), pos2(250.0, 20.0));
    }

    #[test]
    fn position_without_parent_is_left_alone() {
        let mut glass = GlassToolbar::new("orphan");
        glass.set_position(Anchor::BottomLeft);
        assert_eq!(glass.position(), Anchor::BottomLeft);
        assert_eq!(glass.pos(), Pos2::ZERO);
    }

    #[test]
    fn resize_and_show_reanchor() {
        let mut glass = parented();
        glass.set_position(Anchor::TopRight);
        glass.on_resize(vec2(100.0, 40.0));
        assert_eq!(glass.pos(), pos2(680.0, 20.0));

        glass.set_parent_rect(Rect::from_min_size(Pos2::ZERO, vec2(1000.0, 600.0)));
        assert_eq!(glass.pos(), pos2(680.0, 20.0));
        glass.show();
        assert_eq!(glass.pos(), pos2(880.0, 20.0));
    }

    #[test]
    fn attaching_same_toolbar_twice_is_idempotent() {
        let mut glass = parented();
        let toolbar = Toolbar::new()
            .with_action(ToolAction::new("zoom_in", "+"))
            .shared();

        glass.set_toolbar(Some(toolbar.clone()));
        assert!(toolbar.borrow().has_transparent_background());
        assert_eq!(toolbar.borrow().host(), Some(glass.id()));
        glass.on_resize(vec2(120.0, 50.0));

        glass.set_toolbar(Some(toolbar.clone()));
        assert!(Rc::ptr_eq(glass.toolbar().unwrap(), &toolbar));
        assert_eq!(toolbar.borrow().host(), Some(glass.id()));
        assert_eq!(glass.size_hint(), vec2(120.0, 50.0));
    }

    #[test]
    fn replacing_toolbar_releases_previous() {
        let mut glass = parented();
        let first = Toolbar::new().shared();
        let second = Toolbar::new().shared();

        glass.set_toolbar(Some(first.clone()));
        glass.set_toolbar(Some(second.clone()));
        assert_eq!(first.borrow().host(), None);
        assert_eq!(second.borrow().host(), Some(glass.id()));
        assert_eq!(glass.size_hint(), Vec2::ZERO);

        glass.set_toolbar(None);
        assert_eq!(second.borrow().host(), None);
        assert!(glass.toolbar().is_none());
    }

    #[test]
    fn auto_hide_fades_out_then_hides() {
        let mut glass = parented();
        glass.show();
        glass.tick(1.0);
        glass.set_auto_hide_enabled(true);

        glass.tick(3.9);
        assert!(!glass.is_animating());
        glass.tick(4.0);
        assert!(glass.is_animating());
        assert!(glass.is_visible());

        glass.tick(4.0 + FADE_DURATION / 2.0);
        assert!(glass.opacity() > 0.0 && glass.opacity() < 1.0);

        glass.tick(4.0 + FADE_DURATION);
        assert_eq!(glass.opacity(), 0.0);
        assert!(!glass.is_visible());
    }

    #[test]
    fn disabling_auto_hide_cancels_pending_fade() {
        let mut glass = parented();
        glass.show();
        glass.set_auto_hide_enabled(true);
        assert!(glass.is_auto_hide_pending());
        glass.set_auto_hide_enabled(false);
        assert!(!glass.is_auto_hide_pending());

        glass.tick(60.0);
        assert!(!glass.is_animating());
        assert_eq!(glass.opacity(), 1.0);
        assert!(glass.is_visible());
    }

    #[test]
    fn timeout_applies_on_next_start() {
        let mut glass = parented();
        glass.set_auto_hide_enabled(true);
        glass.set_auto_hide_timeout(500);
        glass.tick(0.6);
        assert!(!glass.is_animating());
        glass.on_pointer_left();
        glass.tick(1.0);
        assert!(!glass.is_animating());
        glass.tick(1.1);
        assert!(glass.is_animating());
    }

    #[test]
    fn pointer_enter_cancels_timer_and_fades_back_in() {
        let mut glass = parented();
        glass.show();
        glass.set_auto_hide_enabled(true);
        glass.tick(3.0);
        glass.tick(3.1);
        let faded = glass.opacity();
        assert!(faded < 1.0);

        glass.on_pointer_entered();
        assert!(!glass.is_auto_hide_pending());
        glass.tick(3.1 + FADE_DURATION);
        assert_eq!(glass.opacity(), 1.0);
        assert!(glass.is_visible());

        glass.on_pointer_left();
        assert!(glass.is_auto_hide_pending());
    }

    #[test]
    fn interrupted_hide_never_hides_later() {
        let mut glass = parented();
        glass.show();
        glass.hide_animated();
        glass.tick(0.1);
        glass.show_animated();
        glass.tick(5.0);
        assert!(glass.is_visible());
        assert_eq!(glass.opacity(), 1.0);
    }

    #[test]
    fn pointer_enter_without_auto_hide_changes_nothing() {
        let mut glass = parented();
        glass.show();
        glass.set_opacity(0.5);
        glass.on_pointer_entered();
        assert!(!glass.is_animating());
        assert_eq!(glass.opacity(), 0.5);
    }

    #[test]
    fn show_animated_fades_from_current_opacity() {
        let mut glass = parented();
        glass.set_opacity(0.2);
        glass.show_animated();
        assert!(glass.is_visible());
        glass.tick(0.0);
        assert!((glass.opacity() - 0.2).abs() < 1e-6);
        glass.tick(FADE_DURATION);
        assert_eq!(glass.opacity(), 1.0);
    }

    #[test]
    fn drag_moves_by_pointer_delta() {
        let mut glass = parented();
        glass.show();
        let start = glass.pos();

        glass.on_pointer_pressed(PointerButton::Primary, start + vec2(15.0, 10.0));
        assert!(glass.is_dragging());
        glass.on_pointer_moved(start + vec2(15.0 + 120.0, 10.0 - 45.0));
        glass.on_pointer_released(PointerButton::Primary);

        assert_eq!(glass.pos(), start + vec2(120.0, -45.0));
        assert!(!glass.is_dragging());

        glass.on_pointer_moved(pos2(0.0, 0.0));
        assert_eq!(glass.pos(), start + vec2(120.0, -45.0));
    }

    #[test]
    fn secondary_button_does_not_drag() {
        let mut glass = parented();
        let start = glass.pos();
        glass.on_pointer_pressed(PointerButton::Secondary, pos2(300.0, 30.0));
        glass.on_pointer_moved(pos2(500.0, 500.0));
        assert_eq!(glass.pos(), start);
    }

    #[test]
    fn settings_roundtrip_through_container() {
        let mut glass = parented();
        let settings = ToolbarSettings {
            anchor: Anchor::BottomLeft,
            auto_hide: true,
            auto_hide_timeout_ms: 1200,
            opacity: 7.0,
        };
        glass.apply_settings(&settings);
        assert_eq!(glass.pos(), pos2(20.0, 524.0));
        assert!(glass.is_auto_hide_pending());
        assert_eq!(
            glass.settings(),
            ToolbarSettings {
                opacity: 1.0,
                ..settings
            }
        );
    }

    #[test]
    fn paint_layers_background_border_shadow() {
        let rect = Rect::from_min_size(pos2(10.0, 10.0), vec2(200.0, 60.0));
        let shapes = GlassToolbar::paint_shapes(rect, Theme::Dark, 1.0);
        assert_eq!(shapes.len(), 3);
        assert!(matches!(shapes[0], Shape::Mesh(_)));

        let Shape::Path(border) = &shapes[1] else {
            panic!("expected border path");
        };
        assert!(border.closed);
        let egui::epaint::ColorMode::Solid(border_color) = border.stroke.color else {
            panic!("expected a solid border");
        };
        assert_eq!(border_color, GlassPalette::for_theme(Theme::Dark).border);

        let Shape::Path(shadow) = &shapes[2] else {
            panic!("expected shadow path");
        };
        let shadow_alpha = shadow.fill.a();
        let expected = GlassPalette::for_theme(Theme::Dark)
            .inner_shadow
            .gamma_multiply(SHADOW_OPACITY);
        assert_eq!(shadow_alpha, expected.a());
        assert!(shadow.points.iter().all(|p| rect.shrink(SHADOW_INSET).expand(0.01).contains(*p)));
    }

    #[test]
    fn paint_fades_with_opacity() {
        let rect = Rect::from_min_size(Pos2::ZERO, vec2(100.0, 40.0));
        let Shape::Path(shadow) = &GlassToolbar::paint_shapes(rect, Theme::Light, 0.0)[2] else {
            panic!("expected shadow path");
        };
        assert_eq!(shadow.fill, Color32::TRANSPARENT);
    }

    #[test]
    fn renders_hosted_toolbar_in_area() {
        let ctx = egui::Context::default();
        let mut glass = GlassToolbar::new("frame");
        glass.set_toolbar(Some(
            Toolbar::new()
                .with_action(ToolAction::new("fit", "Fit"))
                .shared(),
        ));
        glass.show();

        let parent = Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0));
        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                glass.show_in(ctx, parent);
            });
        }

        let size = glass.size_hint();
        assert!(size.x > 2.0 * CONTENT_MARGIN as f32);
        assert!(size.y > 2.0 * CONTENT_MARGIN as f32);
        assert_eq!(glass.pos().y, 20.0);
    }

    #[test]
    fn area_follows_drag_past_screen_edge() {
        let ctx = egui::Context::default();
        let mut glass = GlassToolbar::new("offscreen");
        glass.set_toolbar(Some(
            Toolbar::new()
                .with_action(ToolAction::new("fit", "Fit"))
                .shared(),
        ));
        glass.show();

        let screen = Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0));
        let mut time = 0.0;
        let mut frame = |glass: &mut GlassToolbar, events: Vec<egui::Event>| {
            time += 1.0 / 60.0;
            let input = egui::RawInput {
                screen_rect: Some(screen),
                time: Some(time),
                events,
                ..Default::default()
            };
            let _ = ctx.run(input, |ctx| {
                glass.show_in(ctx, screen);
            });
        };
        let button = |pos: Pos2, pressed: bool| egui::Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Default::default(),
        };

        for _ in 0..3 {
            frame(&mut glass, Vec::new());
        }
        let start = glass.pos();
        assert_eq!(start.y, 20.0);

        // Inside the content margin, clear of the tool buttons.
        let press = start + vec2(4.0, 4.0);
        frame(&mut glass, vec![egui::Event::PointerMoved(press)]);
        frame(&mut glass, vec![button(press, true)]);
        for step in 1..=4 {
            let pointer = press + vec2(-100.0, -25.0) * step as f32;
            frame(&mut glass, vec![egui::Event::PointerMoved(pointer)]);
        }
        assert!(glass.is_dragging());
        frame(&mut glass, vec![button(press + vec2(-400.0, -100.0), false)]);
        frame(&mut glass, Vec::new());

        assert!(!glass.is_dragging());
        let moved = glass.pos() - start;
        assert!((moved - vec2(-400.0, -100.0)).length() < 1e-3, "moved by {moved:?}");
        assert!(glass.pos().x < 0.0 && glass.pos().y < 0.0);

        let area = ctx
            .memory(|m| m.area_rect(glass.id()))
            .expect("area shown");
        assert_eq!(area.min, glass.pos());
    }
}
