//! Input controller: pointer events to view-state mutations
//!
//! A small state machine over the last sampled pixel position and two
//! independent button-held flags. It is deliberately GUI-free: the widget
//! translates raw `egui::Event`s into [`PointerEvent`]s (see
//! `chart_view.rs`), so the pan/zoom semantics stay unit-testable.

use egui::{PointerButton, Rect};

use crate::constants::input::{DRAG_ZOOM_DIVISOR, WHEEL_ZOOM_DIVISOR};
use crate::coord::{Mapper, PixelPoint};
use crate::state::ViewState;

/// A pointer event in widget pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved to a new position (with or without buttons held)
    Moved(PixelPoint),
    /// A button was pressed
    Pressed(PointerButton),
    /// A button was released
    Released(PointerButton),
    /// Wheel turned by the given number of clicks; positive = toward the
    /// user (zoom out)
    Wheel(f64),
}

/// Tracks held buttons and the last sampled pointer position
#[derive(Debug, Default)]
pub struct InputController {
    last: Option<PixelPoint>,
    primary_down: bool,
    secondary_down: bool,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a pan or zoom drag is in progress
    pub fn any_button_down(&self) -> bool {
        self.primary_down || self.secondary_down
    }

    /// Apply one event to the view state; returns whether a redraw is needed
    pub fn on_event(
        &mut self,
        event: PointerEvent,
        view: &mut ViewState,
        viewport: Rect,
    ) -> bool {
        match event {
            PointerEvent::Pressed(button) => {
                // button identity tracked independently so unrelated
                // buttons never touch the wrong flag
                match button {
                    PointerButton::Primary => self.primary_down = true,
                    PointerButton::Secondary => self.secondary_down = true,
                    _ => {}
                }
                false
            }
            PointerEvent::Released(button) => {
                match button {
                    PointerButton::Primary => self.primary_down = false,
                    PointerButton::Secondary => self.secondary_down = false,
                    _ => {}
                }
                false
            }
            PointerEvent::Moved(pos) => {
                if self.any_button_down() {
                    self.drag(pos, view, viewport);
                } else {
                    view.pointer = Mapper::new(view, viewport).to_coord(pos);
                    self.last = Some(pos);
                }
                true
            }
            PointerEvent::Wheel(rotation) => {
                let sc = rotation / WHEEL_ZOOM_DIVISOR;
                view.scale.x *= 1.0 - sc;
                view.scale.y *= 1.0 - sc;
                let pos = self.last.unwrap_or_else(|| {
                    PixelPoint::new(viewport.left() as f64, viewport.top() as f64)
                });
                view.pointer = Mapper::new(view, viewport).to_coord(pos);
                true
            }
        }
    }

    fn drag(&mut self, pos: PixelPoint, view: &mut ViewState, viewport: Rect) {
        let last = self.last.unwrap_or(pos);
        let dx = pos.x - last.x;
        let dy = pos.y - last.y;

        if self.primary_down {
            // pan: the content under the cursor tracks the cursor, so the
            // new center is whatever data point sits at mid - delta
            let mid = viewport.center();
            let p = Mapper::new(view, viewport).to_coord(PixelPoint::new(
                mid.x as f64 - dx,
                mid.y as f64 - dy,
            ));
            view.set_center(p.x, p.y);
        }

        if self.secondary_down {
            // quadrant zoom: the sign of the offset from the origin decides
            // whether a positive delta grows or shrinks the scale. The Y
            // sign is inverted relative to X; kept as-is.
            let mapper = Mapper::new(view, viewport);
            let p = mapper.to_coord(pos);
            view.pointer = p;
            let origin = mapper.origin();
            let sx = if p.x < origin.x { -1.0 } else { 1.0 };
            let sy = if p.y < origin.y { -1.0 } else { 1.0 };
            view.scale.x *= 1.0 + sx * dx / DRAG_ZOOM_DIVISOR;
            view.scale.y *= 1.0 - sy * dy / DRAG_ZOOM_DIVISOR;
        }

        self.last = Some(pos);
    }
}
