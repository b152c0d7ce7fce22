//! Coordinate mapping between data space and pixel space
//!
//! The mapper is rebuilt each frame from the current view state and the
//! widget rect. All arithmetic stays in f64; conversion to egui's f32
//! `Pos2` happens only at paint time, so `to_coord(to_pixel(p)) == p`
//! holds at full precision.

use egui::{Pos2, Rect, pos2};
use serde::{Deserialize, Serialize};

use crate::state::ViewState;

/// A point in data space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for PlotPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for PlotPoint {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// A point in pixel space (widget coordinates, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Lossy conversion for painting
    pub fn to_pos2(self) -> Pos2 {
        pos2(self.x as f32, self.y as f32)
    }
}

impl From<Pos2> for PixelPoint {
    fn from(p: Pos2) -> Self {
        Self {
            x: p.x as f64,
            y: p.y as f64,
        }
    }
}

/// Per-frame snapshot of the view transform
///
/// Maps data coordinates to pixels relative to the viewport center: on a
/// linear axis `pixel = mid + scale * (value - center)`, on a log axis
/// `pixel = mid + scale * (ln value - ln center)`. The Y pixel direction is
/// inverted relative to the data direction.
#[derive(Debug, Clone, Copy)]
pub struct Mapper {
    center: PlotPoint,
    scale: PlotPoint,
    log_x: bool,
    log_y: bool,
    mid_x: f64,
    mid_y: f64,
}

impl Mapper {
    pub fn new(view: &ViewState, viewport: Rect) -> Self {
        let mid = viewport.center();
        Self {
            center: view.center,
            scale: view.scale,
            log_x: view.log_x,
            log_y: view.log_y,
            mid_x: mid.x as f64,
            mid_y: mid.y as f64,
        }
    }

    /// Map a data point to pixel space
    ///
    /// Returns `None` when a log-scaled axis cannot represent the
    /// coordinate (value <= 0, or a center <= 0 that slipped past the
    /// view-state invariant).
    pub fn to_pixel(&self, p: PlotPoint) -> Option<PixelPoint> {
        let px = if self.log_x {
            if p.x <= 0.0 || self.center.x <= 0.0 {
                return None;
            }
            self.mid_x + self.scale.x * (p.x.ln() - self.center.x.ln())
        } else {
            self.mid_x + self.scale.x * (p.x - self.center.x)
        };
        let py = if self.log_y {
            if p.y <= 0.0 || self.center.y <= 0.0 {
                return None;
            }
            self.mid_y - self.scale.y * (p.y.ln() - self.center.y.ln())
        } else {
            self.mid_y - self.scale.y * (p.y - self.center.y)
        };
        Some(PixelPoint::new(px, py))
    }

    /// Map a pixel back to data space; defined for every pixel
    pub fn to_coord(&self, p: PixelPoint) -> PlotPoint {
        let x = if self.log_x {
            (self.center.x.ln() + (p.x - self.mid_x) / self.scale.x).exp()
        } else {
            self.center.x + (p.x - self.mid_x) / self.scale.x
        };
        let y = if self.log_y {
            (self.center.y.ln() - (p.y - self.mid_y) / self.scale.y).exp()
        } else {
            self.center.y - (p.y - self.mid_y) / self.scale.y
        };
        PlotPoint::new(x, y)
    }

    /// The axis-cross reference point: 0 on a linear axis, 1 on a log axis
    pub fn origin(&self) -> PlotPoint {
        PlotPoint::new(
            if self.log_x { 1.0 } else { 0.0 },
            if self.log_y { 1.0 } else { 0.0 },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    fn viewport() -> Rect {
        Rect::from_min_size(Pos2::ZERO, vec2(640.0, 480.0))
    }

    fn mapper(view: &ViewState) -> Mapper {
        Mapper::new(view, viewport())
    }

    fn assert_close(a: f64, b: f64) {
        let tol = 1e-9 * (1.0 + a.abs().max(b.abs()));
        assert!((a - b).abs() < tol, "{} != {}", a, b);
    }

    #[test]
    fn test_center_maps_to_viewport_middle() {
        let mut view = ViewState::default();
        view.set_center(2.5, -4.0);
        let m = mapper(&view);
        let p = m.to_pixel(PlotPoint::new(2.5, -4.0)).unwrap();
        assert_close(p.x, 320.0);
        assert_close(p.y, 240.0);
    }

    #[test]
    fn test_y_pixel_direction_inverted() {
        let view = ViewState::default();
        let m = mapper(&view);
        let above = m.to_pixel(PlotPoint::new(0.0, 1.0)).unwrap();
        let below = m.to_pixel(PlotPoint::new(0.0, -1.0)).unwrap();
        assert!(above.y < below.y);
        // scale 100 px/unit
        assert_close(above.y, 140.0);
        assert_close(below.y, 340.0);
    }

    #[test]
    fn test_linear_round_trip() {
        let mut view = ViewState::default();
        view.set_center(-3.7, 12.25);
        view.set_scale(42.0, 7.5);
        let m = mapper(&view);
        for &(x, y) in &[(0.0, 0.0), (-3.7, 12.25), (1e3, -2e3), (0.125, 0.5)] {
            let p = PlotPoint::new(x, y);
            let back = m.to_coord(m.to_pixel(p).unwrap());
            assert_close(back.x, x);
            assert_close(back.y, y);
        }
    }

    #[test]
    fn test_log_round_trip_positive_only() {
        let mut view = ViewState::default();
        view.set_log_scale(true, true);
        view.set_center(10.0, 0.1);
        let m = mapper(&view);
        for &(x, y) in &[(1.0, 1.0), (10.0, 0.1), (1e-3, 1e3)] {
            let p = PlotPoint::new(x, y);
            let back = m.to_coord(m.to_pixel(p).unwrap());
            assert_close(back.x, x);
            assert_close(back.y, y);
        }
        assert!(m.to_pixel(PlotPoint::new(0.0, 1.0)).is_none());
        assert!(m.to_pixel(PlotPoint::new(-2.0, 1.0)).is_none());
        assert!(m.to_pixel(PlotPoint::new(1.0, -0.5)).is_none());
    }

    #[test]
    fn test_log_applies_per_axis() {
        let mut view = ViewState::default();
        view.set_log_scale(true, false);
        let m = mapper(&view);
        // negative y is fine while x is the log axis
        assert!(m.to_pixel(PlotPoint::new(1.0, -5.0)).is_some());
        assert!(m.to_pixel(PlotPoint::new(-1.0, 5.0)).is_none());
    }

    #[test]
    fn test_origin_per_flag_combination() {
        let mut view = ViewState::default();
        assert_eq!(mapper(&view).origin(), PlotPoint::new(0.0, 0.0));
        view.set_log_scale(true, false);
        assert_eq!(mapper(&view).origin(), PlotPoint::new(1.0, 0.0));
        view.set_log_scale(false, true);
        assert_eq!(mapper(&view).origin(), PlotPoint::new(0.0, 1.0));
        view.set_log_scale(true, true);
        assert_eq!(mapper(&view).origin(), PlotPoint::new(1.0, 1.0));
    }
}
