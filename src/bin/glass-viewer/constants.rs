/// Minimum zoom level (1.0 = fit page to viewport).
pub const ZOOM_MIN: f32 = 0.25;

/// Maximum zoom level.
pub const ZOOM_MAX: f32 = 8.0;

/// Zoom multiplier per keyboard/toolbar step.
pub const ZOOM_SPEED: f32 = 1.25;

/// Page size in points (A4).
pub const PAGE_SIZE: [f32; 2] = [595.0, 842.0];

/// Number of pages in the placeholder document.
pub const PAGE_COUNT: usize = 12;

/// Blank space kept around the page at zoom 1.0.
pub const PAGE_MARGIN: f32 = 24.0;
