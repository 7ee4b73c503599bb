//! UI rendering methods for the viewer application.

use crate::ViewerApp;
use crate::colors;
use crate::constants::{PAGE_COUNT, PAGE_MARGIN, PAGE_SIZE, ZOOM_MAX, ZOOM_MIN, ZOOM_SPEED};
use eframe::egui;
use glass_toolbar::{Anchor, ToolAction, Toolbar};

/// Commands reachable from the floating toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    PreviousPage,
    NextPage,
    ZoomOut,
    ZoomIn,
    FitPage,
    ToggleTheme,
    Settings,
}

impl ViewerAction {
    const ALL: [ViewerAction; 7] = [
        ViewerAction::PreviousPage,
        ViewerAction::NextPage,
        ViewerAction::ZoomOut,
        ViewerAction::ZoomIn,
        ViewerAction::FitPage,
        ViewerAction::ToggleTheme,
        ViewerAction::Settings,
    ];

    fn id(self) -> &'static str {
        match self {
            ViewerAction::PreviousPage => "previous_page",
            ViewerAction::NextPage => "next_page",
            ViewerAction::ZoomOut => "zoom_out",
            ViewerAction::ZoomIn => "zoom_in",
            ViewerAction::FitPage => "fit_page",
            ViewerAction::ToggleTheme => "toggle_theme",
            ViewerAction::Settings => "settings",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.id() == id)
    }

    /// Builds the toolbar hosted by the glass container.
    pub fn toolbar() -> Toolbar {
        let action = |action: ViewerAction, label: &str, tooltip: &str| {
            ToolAction::new(action.id(), label).tooltip(tooltip)
        };
        Toolbar::new()
            .with_action(action(Self::PreviousPage, "Prev", "Previous page (Left)"))
            .with_action(action(Self::NextPage, "Next", "Next page (Right)"))
            .with_separator()
            .with_action(action(Self::ZoomOut, "-", "Zoom out (-)"))
            .with_action(action(Self::ZoomIn, "+", "Zoom in (+)"))
            .with_action(action(Self::FitPage, "Fit", "Fit page (0)"))
            .with_separator()
            .with_action(action(Self::ToggleTheme, "Theme", "Toggle light/dark"))
            .with_action(action(Self::Settings, "Settings", "Toolbar settings (S)"))
    }
}

impl ViewerApp {
    /// Handles keyboard shortcuts for paging, zoom and toolbar visibility.
    pub fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let mut actions = Vec::new();
        let mut toggle_toolbar = false;
        ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowLeft) {
                actions.push(ViewerAction::PreviousPage);
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                actions.push(ViewerAction::NextPage);
            }
            if i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals) {
                actions.push(ViewerAction::ZoomIn);
            }
            if i.key_pressed(egui::Key::Minus) {
                actions.push(ViewerAction::ZoomOut);
            }
            if i.key_pressed(egui::Key::Num0) {
                actions.push(ViewerAction::FitPage);
            }
            if i.key_pressed(egui::Key::S) {
                actions.push(ViewerAction::Settings);
            }
            toggle_toolbar = i.key_pressed(egui::Key::T);
        });

        for action in actions {
            self.apply_action(ctx, action);
        }
        if toggle_toolbar {
            if self.glass.is_visible() && self.glass.opacity() > 0.0 {
                self.glass.hide_animated();
            } else {
                self.glass.show_animated();
            }
        }
    }

    pub fn apply_action(&mut self, ctx: &egui::Context, action: ViewerAction) {
        match action {
            ViewerAction::PreviousPage => self.page = self.page.saturating_sub(1),
            ViewerAction::NextPage => self.page = (self.page + 1).min(PAGE_COUNT - 1),
            ViewerAction::ZoomOut => {
                self.zoom = (self.zoom / ZOOM_SPEED).clamp(ZOOM_MIN, ZOOM_MAX);
            }
            ViewerAction::ZoomIn => {
                self.zoom = (self.zoom * ZOOM_SPEED).clamp(ZOOM_MIN, ZOOM_MAX);
            }
            ViewerAction::FitPage => self.reset_view(),
            ViewerAction::ToggleTheme => {
                let next = match ctx.theme() {
                    egui::Theme::Dark => egui::Theme::Light,
                    egui::Theme::Light => egui::Theme::Dark,
                };
                log::info!("Switching to {next:?} theme");
                ctx.set_theme(next);
            }
            ViewerAction::Settings => self.settings_open = !self.settings_open,
        }
        self.refresh_actions();
    }

    /// Greys out actions that would do nothing.
    pub fn refresh_actions(&mut self) {
        let mut toolbar = self.toolbar.borrow_mut();
        toolbar.set_enabled(ViewerAction::PreviousPage.id(), self.page > 0);
        toolbar.set_enabled(ViewerAction::NextPage.id(), self.page + 1 < PAGE_COUNT);
        toolbar.set_enabled(ViewerAction::ZoomOut.id(), self.zoom > ZOOM_MIN);
        toolbar.set_enabled(ViewerAction::ZoomIn.id(), self.zoom < ZOOM_MAX);
    }

    /// Renders the bottom status bar with page, zoom and toolbar state.
    pub fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("←/→: Page | +/-: Zoom | 0: Fit | T: Toolbar | S: Settings");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let auto_hide = if self.glass.is_auto_hide_enabled() {
                        format!("auto-hide {} ms", self.glass.auto_hide_timeout())
                    } else {
                        "pinned".to_owned()
                    };
                    ui.label(format!(
                        "Toolbar: {} ({auto_hide})",
                        self.glass.position()
                    ));
                    ui.separator();
                    ui.label(format!("{:.0}%", self.zoom * 100.0));
                    ui.separator();
                    ui.label(format!("Page {}/{}", self.page + 1, PAGE_COUNT));
                });
            });
        });
    }

    /// Renders the toolbar settings window.
    pub fn show_settings_window(&mut self, ctx: &egui::Context) {
        let mut open = self.settings_open;
        let mut toggle_attached = false;
        egui::Window::new("Toolbar")
            .open(&mut open)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                let glass = &mut self.glass;

                let mut anchor = glass.position();
                egui::ComboBox::from_label("Position")
                    .selected_text(anchor.label())
                    .show_ui(ui, |ui| {
                        for option in Anchor::ALL {
                            ui.selectable_value(&mut anchor, option, option.label());
                        }
                    });
                let snap = ui.button("Snap to anchor").clicked();
                if snap || anchor != glass.position() {
                    glass.set_position(anchor);
                }

                ui.separator();

                let mut auto_hide = glass.is_auto_hide_enabled();
                if ui.checkbox(&mut auto_hide, "Auto-hide").changed() {
                    glass.set_auto_hide_enabled(auto_hide);
                }
                let mut timeout = glass.auto_hide_timeout();
                if ui
                    .add(egui::Slider::new(&mut timeout, 500..=10_000).suffix(" ms"))
                    .changed()
                {
                    glass.set_auto_hide_timeout(timeout);
                }

                let mut opacity = glass.opacity();
                if ui
                    .add(egui::Slider::new(&mut opacity, 0.0..=1.0).text("Opacity"))
                    .changed()
                {
                    glass.set_opacity(opacity);
                }

                ui.separator();

                ui.horizontal(|ui| {
                    if ui.button("Show").clicked() {
                        glass.show_animated();
                    }
                    if ui.button("Hide").clicked() {
                        glass.hide_animated();
                    }
                    let label = if glass.toolbar().is_some() {
                        "Detach toolbar"
                    } else {
                        "Attach toolbar"
                    };
                    toggle_attached = ui.button(label).clicked();
                });
            });
        self.settings_open = open;
        if toggle_attached {
            self.toggle_toolbar_attached();
        }
    }

    /// Renders the document page and returns the viewport the toolbar anchors to.
    pub fn show_central_panel(&mut self, ctx: &egui::Context) -> egui::Rect {
        egui::CentralPanel::default()
            .show(ctx, |ui| {
                let viewport_rect = ui.max_rect();
                let response = ui.allocate_rect(viewport_rect, egui::Sense::hover());

                // Moving over the page brings a faded-out toolbar back.
                let moved = ui.input(|i| i.pointer.delta() != egui::Vec2::ZERO);
                if moved && response.hovered() && !self.glass.is_visible() {
                    self.glass.show_animated();
                }

                self.show_page(ui, viewport_rect);
                viewport_rect
            })
            .inner
    }

    /// Paints a placeholder page scaled to fit the viewport.
    fn show_page(&self, ui: &mut egui::Ui, viewport_rect: egui::Rect) {
        let page_size = egui::vec2(PAGE_SIZE[0], PAGE_SIZE[1]);
        let available = viewport_rect.shrink(PAGE_MARGIN).size();
        let fit_scale = (available.x / page_size.x).min(available.y / page_size.y);
        let page_rect =
            egui::Rect::from_center_size(viewport_rect.center(), page_size * fit_scale * self.zoom);

        let painter = ui.painter_at(viewport_rect);
        painter.rect_filled(
            page_rect.translate(egui::vec2(3.0, 4.0)),
            2.0,
            colors::PAGE_SHADOW,
        );
        painter.rect_filled(page_rect, 2.0, colors::PAGE_FILL);
        painter.rect_stroke(
            page_rect,
            2.0,
            egui::Stroke::new(1.0, colors::PAGE_BORDER),
            egui::StrokeKind::Outside,
        );

        // Fake paragraphs: a heading followed by ragged lines of text.
        let scale = fit_scale * self.zoom;
        let left = page_rect.left() + 60.0 * scale;
        let right = page_rect.right() - 60.0 * scale;
        let line_height = 14.0 * scale;
        let mut y = page_rect.top() + 80.0 * scale;

        let heading_width = (right - left) * 0.55;
        painter.line_segment(
            [egui::pos2(left, y), egui::pos2(left + heading_width, y)],
            egui::Stroke::new(6.0 * scale, colors::HEADING_LINE),
        );
        y += line_height * 2.5;

        let mut line = self.page * 7;
        while y < page_rect.bottom() - 70.0 * scale {
            let ragged = 0.7 + 0.3 * (((line * 37) % 11) as f32 / 10.0);
            let end = if line % 9 == 8 { 0.4 } else { ragged };
            painter.line_segment(
                [egui::pos2(left, y), egui::pos2(left + (right - left) * end, y)],
                egui::Stroke::new(3.0 * scale, colors::TEXT_LINE),
            );
            y += if line % 9 == 8 { line_height * 2.0 } else { line_height };
            line += 1;
        }

        let footer = format!("{}", self.page + 1);
        painter.text(
            egui::pos2(page_rect.center().x, page_rect.bottom() - 30.0 * scale),
            egui::Align2::CENTER_CENTER,
            footer,
            egui::FontId::proportional((11.0 * scale).max(6.0)),
            colors::HEADING_LINE,
        );
    }
}
