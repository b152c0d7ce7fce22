//! View state: center, scale, log/axis flags, background
//!
//! Single-owner struct mutated only from the UI thread; the renderer and
//! input controller both borrow it within one frame, so no synchronization
//! is involved.

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::constants::view::DEFAULT_SCALE;
use crate::coord::PlotPoint;

/// Current view transform and display options
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Data coordinate shown at the viewport center
    pub center: PlotPoint,

    /// Pixels per data unit, per axis
    pub scale: PlotPoint,

    /// X axis uses a logarithmic transform
    pub log_x: bool,

    /// Y axis uses a logarithmic transform
    pub log_y: bool,

    /// Draw the X axis overlay
    pub axis_x: bool,

    /// Draw the Y axis overlay
    pub axis_y: bool,

    /// Viewport fill color
    pub background: Color32,

    /// Last pointer position in data coordinates, for the status readout
    pub pointer: PlotPoint,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            center: PlotPoint::new(0.0, 0.0),
            scale: PlotPoint::new(DEFAULT_SCALE, DEFAULT_SCALE),
            log_x: false,
            log_y: false,
            axis_x: true,
            axis_y: true,
            background: Color32::WHITE,
            pointer: PlotPoint::new(0.0, 0.0),
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the view center
    ///
    /// A log-scaled axis requires a positive center; a value <= 0 on such
    /// an axis is clamped to 1 to keep the invariant.
    pub fn set_center(&mut self, x: f64, y: f64) {
        self.center.x = if self.log_x && x <= 0.0 { 1.0 } else { x };
        self.center.y = if self.log_y && y <= 0.0 { 1.0 } else { y };
    }

    /// Set the pixels-per-unit scale
    pub fn set_scale(&mut self, x: f64, y: f64) {
        self.scale.x = x;
        self.scale.y = y;
    }

    /// Switch axes between linear and logarithmic scaling
    ///
    /// Switching an axis to log mode with a center <= 0 forces that center
    /// to exactly 1; a center already > 0 is left unchanged.
    pub fn set_log_scale(&mut self, log_x: bool, log_y: bool) {
        self.log_x = log_x;
        self.log_y = log_y;
        if log_x && self.center.x <= 0.0 {
            self.center.x = 1.0;
        }
        if log_y && self.center.y <= 0.0 {
            self.center.y = 1.0;
        }
    }

    /// Toggle the per-axis overlays
    pub fn show_axes(&mut self, axis_x: bool, axis_y: bool) {
        self.axis_x = axis_x;
        self.axis_y = axis_y;
    }

    pub fn set_background(&mut self, color: Color32) {
        self.background = color;
    }

    /// Snapshot the view as a serializable config
    pub fn config(&self) -> ViewConfig {
        ViewConfig {
            center_x: self.center.x,
            center_y: self.center.y,
            scale_x: self.scale.x,
            scale_y: self.scale.y,
            log_x: self.log_x,
            log_y: self.log_y,
            axis_x: self.axis_x,
            axis_y: self.axis_y,
            background: self.background.to_array(),
        }
    }

    /// Restore a snapshot, going through the setters so invariants hold
    pub fn apply_config(&mut self, cfg: &ViewConfig) {
        self.set_log_scale(cfg.log_x, cfg.log_y);
        self.set_center(cfg.center_x, cfg.center_y);
        self.set_scale(cfg.scale_x, cfg.scale_y);
        self.show_axes(cfg.axis_x, cfg.axis_y);
        let [r, g, b, a] = cfg.background;
        self.background = Color32::from_rgba_premultiplied(r, g, b, a);
    }
}

/// Serializable snapshot of the view state
///
/// The widget itself persists nothing; hosts may serialize this to carry a
/// view across sessions or copy it elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    pub center_x: f64,
    pub center_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub log_x: bool,
    pub log_y: bool,
    pub axis_x: bool,
    pub axis_y: bool,
    /// Premultiplied RGBA
    pub background: [u8; 4],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_switch_clamps_nonpositive_center() {
        let mut view = ViewState::default();
        view.set_center(-5.0, 0.0);
        view.set_log_scale(true, true);
        assert_eq!(view.center.x, 1.0);
        assert_eq!(view.center.y, 1.0);
    }

    #[test]
    fn test_log_switch_keeps_positive_center() {
        let mut view = ViewState::default();
        view.set_center(2.0, 0.5);
        view.set_log_scale(true, true);
        assert_eq!(view.center.x, 2.0);
        assert_eq!(view.center.y, 0.5);
    }

    #[test]
    fn test_log_switch_clamps_only_log_axes() {
        let mut view = ViewState::default();
        view.set_center(-5.0, -7.0);
        view.set_log_scale(true, false);
        assert_eq!(view.center.x, 1.0);
        assert_eq!(view.center.y, -7.0);
    }

    #[test]
    fn test_set_center_clamps_on_log_axis() {
        let mut view = ViewState::default();
        view.set_log_scale(true, false);
        view.set_center(-3.0, -3.0);
        assert_eq!(view.center.x, 1.0);
        assert_eq!(view.center.y, -3.0);
    }

    #[test]
    fn test_config_round_trip() {
        let mut view = ViewState::default();
        view.set_center(4.0, -2.0);
        view.set_scale(50.0, 25.0);
        view.show_axes(false, true);
        view.set_background(Color32::from_rgb(20, 30, 40));
        let cfg = view.config();

        let mut restored = ViewState::default();
        restored.apply_config(&cfg);
        assert_eq!(restored.center, view.center);
        assert_eq!(restored.scale, view.scale);
        assert_eq!(restored.axis_x, view.axis_x);
        assert_eq!(restored.axis_y, view.axis_y);
        assert_eq!(restored.background, view.background);
    }
}
