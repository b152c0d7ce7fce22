//! Crate-wide constants and default values
//!
//! This module centralizes all magic numbers and default values used throughout
//! the widget, making them easier to maintain and configure.

/// Native window defaults
pub mod window {
    /// Default window width in points
    pub const DEFAULT_WIDTH: f32 = 640.0;

    /// Default window height in points
    pub const DEFAULT_HEIGHT: f32 = 480.0;
}

/// View state defaults
pub mod view {
    /// Default pixels-per-unit scale on both axes
    pub const DEFAULT_SCALE: f64 = 100.0;
}

/// Chart record defaults
pub mod chart {
    use egui::Color32;

    /// Default stroke color for a freshly added chart
    pub const DEFAULT_COLOR: Color32 = Color32::BLACK;

    /// Default stroke width for a freshly added chart
    pub const DEFAULT_WIDTH: f64 = 1.0;

    /// Smallest visible radius for a degenerate (single-point) segment
    pub const MIN_POINT_RADIUS: f32 = 0.5;
}

/// Axis overlay constants
pub mod axis {
    use egui::Color32;

    /// Axis line and tick color
    pub const COLOR: Color32 = Color32::BLACK;

    /// Axis line and tick stroke width
    pub const STROKE_WIDTH: f32 = 1.0;

    /// Half-length of a tick mark in pixels
    pub const TICK_HALF_LEN: f32 = 6.0;

    /// Target pixel spacing the tick unit is derived from: the unit is
    /// `10^floor(log10(TICK_TARGET_PX / scale))`
    pub const TICK_TARGET_PX: f64 = 100.0;

    /// Gap between a tick mark and its numeric label
    pub const LABEL_GAP: f32 = 8.0;
}

/// Input controller constants
pub mod input {
    /// Pixel-delta divisor for the quadrant zoom (secondary-button drag)
    pub const DRAG_ZOOM_DIVISOR: f64 = 500.0;

    /// Wheel-click divisor: one click rescales both axes by (1 - 1/10)
    pub const WHEEL_ZOOM_DIVISOR: f64 = 10.0;

    /// Wheel deltas reported in points are converted to clicks at this rate
    pub const POINTS_PER_WHEEL_CLICK: f32 = 20.0;

    /// Wheel deltas reported in pages are converted to clicks at this rate
    pub const CLICKS_PER_WHEEL_PAGE: f32 = 10.0;
}

/// Numeric formatting constants
pub mod format {
    /// Below this magnitude (exclusive, nonzero) values format scientifically
    pub const SCIENTIFIC_BELOW: f64 = 1e-4;

    /// Above this magnitude (exclusive) values format scientifically
    pub const SCIENTIFIC_ABOVE: f64 = 1e4;

    /// Maximum decimals in the label form (trailing zeros trimmed)
    pub const LABEL_DECIMALS: usize = 6;

    /// Fixed decimals in the status-readout form
    pub const STATUS_DECIMALS: usize = 4;
}

/// Legend and status overlay layout
pub mod overlay {
    use egui::Color32;

    /// Left margin of the legend and status block
    pub const MARGIN_X: f32 = 10.0;

    /// Legend line height; entry n sits at n * LEGEND_LINE_HEIGHT
    pub const LEGEND_LINE_HEIGHT: f32 = 20.0;

    /// Status block line offsets from the bottom edge (mouse, center, scale)
    pub const STATUS_OFFSETS: [f32; 3] = [50.0, 30.0, 10.0];

    /// Status block text color
    pub const STATUS_COLOR: Color32 = Color32::BLACK;

    /// Overlay font size in points
    pub const FONT_SIZE: f32 = 12.0;
}
