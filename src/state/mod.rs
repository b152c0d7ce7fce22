//! Widget state: the view transform and the keyed chart store
//!
//! Both are mutated only from the UI thread (by the input controller and
//! the host-facing API) and read by the renderer within the same frame.

mod chart;
mod view;

pub use chart::{Chart, ChartStore, ConnectMode};
pub use view::{ViewConfig, ViewState};
