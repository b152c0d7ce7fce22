//! Error types for chart-oxide
//!
//! The widget itself has no failure modes: unknown keys, out-of-range edge
//! indices, and log-domain failures all degrade to "nothing drawn". The
//! errors here cover the outer surface only (window creation, the demo's
//! clipboard export).

use thiserror::Error;

/// Main error type for chart-oxide operations
#[derive(Error, Debug)]
pub enum ChartError {
    /// Native window creation or event-loop error
    #[error("Failed to create native window: {0}")]
    Window(#[from] eframe::Error),

    /// Clipboard access error
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for chart-oxide operations
pub type Result<T> = std::result::Result<T, ChartError>;

impl ChartError {
    /// Get a user-friendly error message suitable for displaying in UI
    pub fn user_message(&self) -> String {
        match self {
            ChartError::Window(e) => format!("Window error: {}", e),
            ChartError::Clipboard(e) => format!("Clipboard error: {}", e),
            ChartError::Json(e) => format!("JSON error: {}", e),
        }
    }
}
