//! Error types for the Toolcrib inventory core

use thiserror::Error;

/// Main application error type
///
/// The core has exactly two failure kinds, both local validation failures:
/// the calling shell is expected to display them and keep its interaction
/// loop running rather than terminate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Tool with serial number {0} already exists")]
    DuplicateSerialNumber(String),

    #[error("Tool not found: {0}")]
    ToolNotFound(String),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
