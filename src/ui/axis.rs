//! Axis overlay: origin lines, tick marks, numeric labels
//!
//! Each enabled axis draws a full-extent line through the mapped origin,
//! then walks outward in both directions from the origin in tick-unit
//! steps. A direction stops once the mapped tick leaves the viewport or
//! the log-domain mapping fails.

use egui::{Align2, FontId, Painter, Rect, Stroke, pos2};

use crate::constants::{axis, overlay};
use crate::coord::{Mapper, PlotPoint};
use crate::format;
use crate::state::ViewState;

/// Draw the enabled axis overlays
pub fn draw_axes(painter: &Painter, mapper: &Mapper, view: &ViewState, viewport: Rect) {
    profiling::scope!("draw_axes");
    if view.axis_x {
        draw_axis_x(painter, mapper, view, viewport);
    }
    if view.axis_y {
        draw_axis_y(painter, mapper, view, viewport);
    }
}

fn axis_stroke() -> Stroke {
    Stroke::new(axis::STROKE_WIDTH, axis::COLOR)
}

fn label_font() -> FontId {
    FontId::proportional(overlay::FONT_SIZE)
}

fn draw_axis_x(painter: &Painter, mapper: &Mapper, view: &ViewState, viewport: Rect) {
    let Some(origin) = mapper.to_pixel(mapper.origin()) else {
        return;
    };
    let y = origin.y as f32;
    painter.line_segment(
        [pos2(viewport.left(), y), pos2(viewport.right(), y)],
        axis_stroke(),
    );

    let unit = tick_unit(view.scale.x);
    if !unit.is_finite() || unit <= 0.0 {
        return;
    }
    // the origin tick is skipped when the Y axis already marks that spot
    let mut n = if view.axis_y { 1 } else { 0 };
    while mark_x(n, unit, painter, mapper, view, viewport) {
        n += 1;
    }
    n = -1;
    while mark_x(n, unit, painter, mapper, view, viewport) {
        n -= 1;
    }
}

fn draw_axis_y(painter: &Painter, mapper: &Mapper, view: &ViewState, viewport: Rect) {
    let Some(origin) = mapper.to_pixel(mapper.origin()) else {
        return;
    };
    let x = origin.x as f32;
    painter.line_segment(
        [pos2(x, viewport.top()), pos2(x, viewport.bottom())],
        axis_stroke(),
    );

    let unit = tick_unit(view.scale.y);
    if !unit.is_finite() || unit <= 0.0 {
        return;
    }
    let mut n = if view.axis_x { 1 } else { 0 };
    while mark_y(n, unit, painter, mapper, view, viewport) {
        n += 1;
    }
    n = -1;
    while mark_y(n, unit, painter, mapper, view, viewport) {
        n -= 1;
    }
}

/// Draw tick `n`; returns whether the walk should continue in its direction
fn mark_x(
    n: i32,
    unit: f64,
    painter: &Painter,
    mapper: &Mapper,
    view: &ViewState,
    viewport: Rect,
) -> bool {
    let x = tick_value(n, unit, view.log_x);
    let Some(p) = mapper.to_pixel(PlotPoint::new(x, mapper.origin().y)) else {
        return false;
    };
    let pos = p.to_pos2();
    painter.line_segment(
        [
            pos2(pos.x, pos.y - axis::TICK_HALF_LEN),
            pos2(pos.x, pos.y + axis::TICK_HALF_LEN),
        ],
        axis_stroke(),
    );
    if has_label(n) {
        painter.text(
            pos2(pos.x, pos.y + axis::TICK_HALF_LEN + axis::LABEL_GAP),
            Align2::CENTER_TOP,
            format::label(x),
            label_font(),
            axis::COLOR,
        );
    }
    if n > 0 {
        p.x < viewport.right() as f64
    } else {
        p.x > viewport.left() as f64
    }
}

fn mark_y(
    n: i32,
    unit: f64,
    painter: &Painter,
    mapper: &Mapper,
    view: &ViewState,
    viewport: Rect,
) -> bool {
    let y = tick_value(n, unit, view.log_y);
    let Some(p) = mapper.to_pixel(PlotPoint::new(mapper.origin().x, y)) else {
        return false;
    };
    let pos = p.to_pos2();
    painter.line_segment(
        [
            pos2(pos.x - axis::TICK_HALF_LEN, pos.y),
            pos2(pos.x + axis::TICK_HALF_LEN, pos.y),
        ],
        axis_stroke(),
    );
    if has_label(n) {
        painter.text(
            pos2(pos.x - axis::TICK_HALF_LEN - axis::LABEL_GAP, pos.y),
            Align2::RIGHT_CENTER,
            format::label(y),
            label_font(),
            axis::COLOR,
        );
    }
    // positive n walks up the screen
    if n > 0 {
        p.y > viewport.top() as f64
    } else {
        p.y < viewport.bottom() as f64
    }
}

/// Tick spacing in data units, derived so ticks land 10..=100 px apart
pub(crate) fn tick_unit(scale: f64) -> f64 {
    10f64.powf((axis::TICK_TARGET_PX / scale).log10().floor())
}

/// Data value of tick `n`: linear steps, or decade steps on a log axis
pub(crate) fn tick_value(n: i32, unit: f64, log: bool) -> f64 {
    if log {
        10f64.powi(n) * unit
    } else {
        f64::from(n) * unit
    }
}

/// Labels appear at the first tick out from the origin and every tenth one
pub(crate) fn has_label(n: i32) -> bool {
    n == 1 || n == -1 || n % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_unit_tracks_scale_decades() {
        assert_eq!(tick_unit(100.0), 1.0);
        assert_eq!(tick_unit(10.0), 10.0);
        assert_eq!(tick_unit(1.0), 100.0);
        assert!((tick_unit(1000.0) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_tick_unit_rounds_down_to_a_decade() {
        // 100/250 = 0.4 -> floor(log10) = -1 -> 0.1
        assert!((tick_unit(250.0) - 0.1).abs() < 1e-12);
        // 100/30 = 3.33 -> unit 1
        assert_eq!(tick_unit(30.0), 1.0);
    }

    #[test]
    fn test_tick_unit_degrades_on_bad_scale() {
        assert!(!tick_unit(0.0).is_finite());
        assert!(tick_unit(-5.0).is_nan());
    }

    #[test]
    fn test_tick_value_linear_and_log() {
        assert_eq!(tick_value(3, 0.5, false), 1.5);
        assert_eq!(tick_value(-2, 0.5, false), -1.0);
        assert_eq!(tick_value(2, 1.0, true), 100.0);
        assert_eq!(tick_value(-1, 1.0, true), 0.1);
    }

    #[test]
    fn test_label_positions() {
        assert!(has_label(0));
        assert!(has_label(1));
        assert!(has_label(-1));
        assert!(has_label(10));
        assert!(has_label(-20));
        assert!(!has_label(2));
        assert!(!has_label(-7));
        assert!(!has_label(15));
    }
}
