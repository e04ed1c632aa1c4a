//! Error types for the planner crate.

use thiserror::Error;

/// Result type alias for planner operations.
pub type Result<T> = std::result::Result<T, PlanError>;

/// Errors that can occur around the plan store.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Reading or writing the backing file failed
    #[error("plan store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file holds invalid JSON
    #[error("plan store parse error: {0}")]
    Json(#[from] serde_json::Error),
}
