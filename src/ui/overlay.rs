//! Legend and status overlays drawn above the charts

use egui::{Align2, FontId, Painter, Rect, pos2};

use crate::constants::overlay::{
    FONT_SIZE, LEGEND_LINE_HEIGHT, MARGIN_X, STATUS_COLOR, STATUS_OFFSETS,
};
use crate::format;
use crate::state::{ChartStore, ViewState};

fn overlay_font() -> FontId {
    FontId::proportional(FONT_SIZE)
}

/// One legend line per chart, key text in the chart's color, store order
pub fn draw_legend(painter: &Painter, charts: &ChartStore, viewport: Rect) {
    let x = viewport.left() + MARGIN_X;
    for (n, (key, chart)) in charts.iter().enumerate() {
        let y = viewport.top() + LEGEND_LINE_HEIGHT * (n + 1) as f32;
        painter.text(
            pos2(x, y),
            Align2::LEFT_BOTTOM,
            key,
            overlay_font(),
            chart.color,
        );
    }
}

/// Pointer coordinates, view center, and view scale at the bottom left
pub fn draw_status(painter: &Painter, view: &ViewState, viewport: Rect) {
    let x = viewport.left() + MARGIN_X;
    for (line, offset) in status_lines(view).into_iter().zip(STATUS_OFFSETS) {
        painter.text(
            pos2(x, viewport.bottom() - offset),
            Align2::LEFT_BOTTOM,
            line,
            overlay_font(),
            STATUS_COLOR,
        );
    }
}

/// The three status-readout lines; `[log]` tags each log-scaled axis
pub(crate) fn status_lines(view: &ViewState) -> [String; 3] {
    [
        format!(
            "mouse : ({},{})",
            format::status(view.pointer.x),
            format::status(view.pointer.y)
        ),
        format!(
            "center : ({},{})",
            format::status(view.center.x),
            format::status(view.center.y)
        ),
        format!(
            "scale : ({}{},{}{})",
            format::status(view.scale.x),
            if view.log_x { "[log]" } else { "" },
            format::status(view.scale.y),
            if view.log_y { "[log]" } else { "" },
        ),
    ]
}
