//! Glassmorphism styling and a draggable, auto-hiding floating toolbar for egui.

pub mod anchor;
pub mod animation;
pub mod constants;
pub mod container;
pub mod drag;
pub mod palette;
pub mod settings;
pub mod shapes;
pub mod style;
pub mod theme;
pub mod toolbar;

pub use anchor::Anchor;
pub use container::GlassToolbar;
pub use settings::{SettingsError, ToolbarSettings};
pub use style::{BaseStyle, GlassStyle, Primitive, PrimitiveStyle, StyleOption, StyleState};
pub use theme::Theme;
pub use toolbar::{SharedToolbar, ToolAction, Toolbar, ToolbarItem};
