//! The embeddable chart-view widget
//!
//! `ChartView` owns the view state, the chart store, and the input
//! controller. `show` renders one frame into the available space and
//! feeds this frame's pointer events through the input controller, so a
//! host only needs to call the mutating API and embed the widget.

use egui::{Color32, Event, MouseWheelUnit, Rect, Response, Sense, Ui, Vec2};

use crate::constants::input::{CLICKS_PER_WHEEL_PAGE, POINTS_PER_WHEEL_CLICK};
use crate::coord::{Mapper, PlotPoint};
use crate::state::{Chart, ChartStore, ConnectMode, ViewConfig, ViewState};
use crate::ui::input::{InputController, PointerEvent};
use crate::ui::{axis, overlay, render};

/// Interactive 2D chart view: named point sets with configurable
/// connection topology, linear/log axes, and mouse pan/zoom
#[derive(Default)]
pub struct ChartView {
    view: ViewState,
    charts: ChartStore,
    input: InputController,
    ctx: Option<egui::Context>,
}

impl ChartView {
    pub fn new() -> Self {
        Self::default()
    }

    // --- view API ---

    /// Set the viewport fill color
    pub fn set_background(&mut self, color: Color32) {
        self.view.set_background(color);
    }

    /// Toggle the per-axis overlays
    pub fn show_axes(&mut self, axis_x: bool, axis_y: bool) {
        self.view.show_axes(axis_x, axis_y);
    }

    /// Set the data coordinate shown at the viewport center
    pub fn set_center(&mut self, x: f64, y: f64) {
        self.view.set_center(x, y);
    }

    /// Set the pixels-per-unit scale
    pub fn set_scale(&mut self, x: f64, y: f64) {
        self.view.set_scale(x, y);
    }

    /// Switch axes between linear and logarithmic scaling
    ///
    /// Switching an axis to log mode clamps its center to 1 if it was <= 0.
    pub fn set_log_scale(&mut self, log_x: bool, log_y: bool) {
        self.view.set_log_scale(log_x, log_y);
    }

    // --- chart API ---

    /// Create or fully replace the chart under `key`, resetting its
    /// styling to the defaults
    pub fn add_chart(&mut self, key: impl Into<String>, vertices: Vec<PlotPoint>) {
        let key = key.into();
        log::debug!("add chart '{}' ({} vertices)", key, vertices.len());
        self.charts.add(key, vertices);
    }

    /// Set a chart's stroke color; no-op for an unknown key
    pub fn set_chart_color(&mut self, key: &str, color: Color32) {
        self.charts.set_color(key, color);
    }

    /// Set a chart's stroke width (clamped to >= 0); no-op for an unknown key
    pub fn set_chart_width(&mut self, key: &str, width: f64) {
        self.charts.set_width(key, width);
    }

    /// Set a chart's connection mode; no-op for an unknown key
    pub fn set_chart_connect(&mut self, key: &str, connect: ConnectMode) {
        self.charts.set_connect(key, connect);
    }

    /// Set a chart's explicit edge list; no-op for an unknown key
    pub fn set_chart_edges(&mut self, key: &str, edges: Vec<(usize, usize)>) {
        self.charts.set_edges(key, edges);
    }

    /// Remove a chart; no-op for an unknown key
    pub fn remove_chart(&mut self, key: &str) {
        log::debug!("remove chart '{}'", key);
        self.charts.remove(key);
    }

    // --- access & snapshots ---

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn charts(&self) -> &ChartStore {
        &self.charts
    }

    pub fn chart(&self, key: &str) -> Option<&Chart> {
        self.charts.get(key)
    }

    /// Snapshot the view as a serializable config
    pub fn config(&self) -> ViewConfig {
        self.view.config()
    }

    /// Restore a view snapshot
    pub fn apply_config(&mut self, cfg: &ViewConfig) {
        self.view.apply_config(cfg);
    }

    /// Request a repaint outside the normal event flow
    ///
    /// Input events and frame-local mutations repaint on their own; this
    /// covers external triggers. Available once the widget has been shown.
    pub fn refresh(&self) {
        if let Some(ctx) = &self.ctx {
            ctx.request_repaint();
        }
    }

    // --- rendering ---

    /// Render one frame into the available space and handle this frame's
    /// pointer input
    pub fn show(&mut self, ui: &mut Ui) -> Response {
        profiling::scope!("chart_view_show");
        self.ctx = Some(ui.ctx().clone());

        let size = ui.available_size();
        let (rect, mut response) = ui.allocate_exact_size(size, Sense::click_and_drag());

        if self.handle_input(ui, rect) {
            response.mark_changed();
        }

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, egui::CornerRadius::ZERO, self.view.background);

        let mapper = Mapper::new(&self.view, rect);
        render::draw_charts(&painter, &mapper, &self.charts);
        axis::draw_axes(&painter, &mapper, &self.view, rect);
        overlay::draw_legend(&painter, &self.charts, rect);
        overlay::draw_status(&painter, &self.view, rect);

        response
    }

    /// Feed this frame's raw events through the input controller; returns
    /// whether any of them mutated the view
    fn handle_input(&mut self, ui: &Ui, rect: Rect) -> bool {
        let hovered = ui.rect_contains_pointer(rect);
        let events = ui.input(|i| i.events.clone());

        let mut changed = false;
        for event in events {
            let translated = match event {
                Event::PointerMoved(pos)
                    if rect.contains(pos) || self.input.any_button_down() =>
                {
                    Some(PointerEvent::Moved(pos.into()))
                }
                Event::PointerButton {
                    pos,
                    button,
                    pressed: true,
                    ..
                } if rect.contains(pos) => Some(PointerEvent::Pressed(button)),
                Event::PointerButton {
                    button,
                    pressed: false,
                    ..
                } => Some(PointerEvent::Released(button)),
                Event::MouseWheel { unit, delta, .. } if hovered => {
                    Some(PointerEvent::Wheel(wheel_clicks(unit, delta)))
                }
                _ => None,
            };
            if let Some(pointer_event) = translated {
                changed |= self.input.on_event(pointer_event, &mut self.view, rect);
            }
        }
        changed
    }
}

/// Convert a wheel delta to signed clicks; positive = zoom out, matching
/// the scroll direction convention of the pan/zoom semantics
fn wheel_clicks(unit: MouseWheelUnit, delta: Vec2) -> f64 {
    let lines = match unit {
        MouseWheelUnit::Point => delta.y / POINTS_PER_WHEEL_CLICK,
        MouseWheelUnit::Line => delta.y,
        MouseWheelUnit::Page => delta.y * CLICKS_PER_WHEEL_PAGE,
    };
    -f64::from(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    #[test]
    fn test_wheel_scroll_up_zooms_in() {
        // scroll up reports a positive delta; clicks must come out negative
        // so scale grows by (1 - clicks/10)
        assert_eq!(wheel_clicks(MouseWheelUnit::Line, vec2(0.0, 1.0)), -1.0);
        assert_eq!(wheel_clicks(MouseWheelUnit::Line, vec2(0.0, -2.0)), 2.0);
        assert_eq!(wheel_clicks(MouseWheelUnit::Point, vec2(0.0, 40.0)), -2.0);
        assert_eq!(wheel_clicks(MouseWheelUnit::Page, vec2(0.0, 1.0)), -10.0);
    }

    #[test]
    fn test_view_api_forwards() {
        let mut chart_view = ChartView::new();
        chart_view.set_center(3.0, 4.0);
        chart_view.set_scale(10.0, 20.0);
        chart_view.show_axes(false, true);
        assert_eq!(chart_view.view().center, PlotPoint::new(3.0, 4.0));
        assert_eq!(chart_view.view().scale, PlotPoint::new(10.0, 20.0));
        assert!(!chart_view.view().axis_x);
        assert!(chart_view.view().axis_y);

        chart_view.add_chart("wave", vec![PlotPoint::new(0.0, 0.0)]);
        chart_view.set_chart_connect("wave", ConnectMode::Line);
        assert_eq!(chart_view.chart("wave").unwrap().connect, ConnectMode::Line);
        chart_view.remove_chart("wave");
        assert!(chart_view.chart("wave").is_none());
    }
}
