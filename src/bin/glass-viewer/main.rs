#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod colors;
mod constants;
mod ui;

use clap::{Parser, ValueEnum};
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use glass_toolbar::{Anchor, GlassToolbar, SharedToolbar, ToolbarSettings};
use std::path::PathBuf;
use ui::ViewerAction;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
    System,
}

impl From<ThemeArg> for egui::ThemePreference {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Dark => egui::ThemePreference::Dark,
            ThemeArg::Light => egui::ThemePreference::Light,
            ThemeArg::System => egui::ThemePreference::System,
        }
    }
}

/// Document viewer with a floating glass toolbar.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Toolbar settings file (RON). Defaults to the platform config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where the toolbar is anchored inside the window.
    #[arg(long, value_enum)]
    anchor: Option<Anchor>,

    /// Fade the toolbar out after the pointer leaves it.
    #[arg(long)]
    auto_hide: bool,

    /// Idle time before auto-hide, in milliseconds.
    #[arg(long)]
    timeout_ms: Option<u32>,

    /// Initial toolbar opacity (clamped to 0..=1).
    #[arg(long)]
    opacity: Option<f32>,

    #[arg(long, value_enum, default_value = "system")]
    theme: ThemeArg,
}

impl Args {
    /// Command line flags win over the settings file.
    fn override_settings(&self, mut settings: ToolbarSettings) -> ToolbarSettings {
        if let Some(anchor) = self.anchor {
            settings.anchor = anchor;
        }
        if self.auto_hide {
            settings.auto_hide = true;
        }
        if let Some(timeout_ms) = self.timeout_ms {
            settings.auto_hide_timeout_ms = timeout_ms;
        }
        if let Some(opacity) = self.opacity {
            settings.opacity = opacity;
        }
        settings
    }
}

/// Main application state for the viewer.
pub struct ViewerApp {
    glass: GlassToolbar,
    toolbar: SharedToolbar,
    page: usize,
    zoom: f32,
    settings_open: bool,
    toasts: Toasts,
}

impl ViewerApp {
    fn new(cc: &eframe::CreationContext<'_>, args: &Args) -> Self {
        cc.egui_ctx.set_theme(args.theme);

        let mut toasts = Toasts::new()
            .anchor(egui::Align2::RIGHT_BOTTOM, (-10.0, -40.0))
            .direction(egui::Direction::BottomUp);

        let loaded = match &args.config {
            Some(path) => ToolbarSettings::load(path),
            None => ToolbarSettings::load_default(),
        };
        let settings = match loaded {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("{err}");
                toasts.add(Toast {
                    kind: ToastKind::Error,
                    text: err.to_string().into(),
                    options: ToastOptions::default()
                        .duration_in_seconds(10.0)
                        .show_icon(true),
                    ..Default::default()
                });
                ToolbarSettings::default()
            }
        };
        let settings = args.override_settings(settings);
        log::info!("Toolbar settings: {settings:?}");

        let toolbar = ViewerAction::toolbar().shared();
        let mut glass = GlassToolbar::new("viewer_toolbar");
        glass.set_toolbar(Some(toolbar.clone()));
        glass.apply_settings(&settings);
        glass.show();

        let mut app = Self {
            glass,
            toolbar,
            page: 0,
            zoom: 1.0,
            settings_open: false,
            toasts,
        };
        app.refresh_actions();
        app
    }

    fn reset_view(&mut self) {
        self.zoom = 1.0;
    }

    /// Toggles the toolbar between hosted and released.
    fn toggle_toolbar_attached(&mut self) {
        if self.glass.toolbar().is_some() {
            self.glass.set_toolbar(None);
        } else {
            self.glass.set_toolbar(Some(self.toolbar.clone()));
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_input(ctx);

        self.show_status_bar(ctx);
        self.show_settings_window(ctx);
        let page_rect = self.show_central_panel(ctx);

        if let Some(id) = self.glass.show_in(ctx, page_rect) {
            match ViewerAction::from_id(&id) {
                Some(action) => self.apply_action(ctx, action),
                None => log::warn!("Unknown toolbar action: {id}"),
            }
        }

        self.toasts.show(ctx);
    }
}

fn main() -> eframe::Result {
    env_logger::init();
    let args = Args::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1024.0, 768.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Glass Viewer",
        options,
        Box::new(move |cc| Ok(Box::new(ViewerApp::new(cc, &args)))),
    )
}
