//! chart-oxide: an interactive 2D chart view widget for egui
//!
//! Plots named point sets with configurable connection topology (isolated
//! points, open/closed polylines, explicit edge lists, complete graphs),
//! per-axis linear or logarithmic scaling, and mouse-driven panning and
//! zooming. Charts are keyed by name and restyled through a small mutating
//! API; everything degrades gracefully (unknown keys, out-of-range edge
//! indices, and log-domain failures draw nothing rather than erroring).
//!
//! Embed [`ChartView`] inside an existing egui application, or hand it to
//! [`launch`] for a turnkey native window.

pub mod app;
pub mod constants;
pub mod coord;
pub mod error;
pub mod format;
pub mod state;
pub mod ui;

pub use app::{ChartApp, launch};
pub use coord::{Mapper, PixelPoint, PlotPoint};
pub use error::{ChartError, Result};
pub use state::{Chart, ChartStore, ConnectMode, ViewConfig, ViewState};
pub use ui::ChartView;
