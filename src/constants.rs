/// Distance in points between an anchored toolbar and the parent's edges.
pub const ANCHOR_MARGIN: f32 = 20.0;

/// Content margin between the glass background and the hosted toolbar.
pub const CONTENT_MARGIN: i8 = 12;

/// Corner radius of the glass background.
pub const BACKGROUND_RADIUS: f32 = 12.0;

/// Inset of the inner shadow from the background edge.
pub const SHADOW_INSET: f32 = 2.0;

/// Corner radius of the inner shadow.
pub const SHADOW_RADIUS: f32 = 10.0;

/// Fraction of the current opacity used for the inner shadow.
pub const SHADOW_OPACITY: f32 = 0.3;

/// Corner radius of tool button highlights.
pub const TOOL_BUTTON_RADIUS: f32 = 6.0;

/// Border width of the glass background.
pub const BORDER_WIDTH: f32 = 1.0;

/// Duration of fade in/out animations, in seconds.
pub const FADE_DURATION: f64 = 0.3;

/// Default auto-hide idle timeout in milliseconds.
pub const DEFAULT_AUTO_HIDE_TIMEOUT_MS: u32 = 3000;

/// Window lightness below which a palette counts as dark.
pub const DARK_LIGHTNESS_THRESHOLD: u8 = 128;
