//! Widget, rendering passes, and input handling

mod axis;
mod chart_view;
mod input;
mod overlay;
mod render;

pub use chart_view::ChartView;
pub use input::{InputController, PointerEvent};
