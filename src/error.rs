//! Error handling for Layerpaint
//!
//! Only configuration and addressing problems are errors. Store operations
//! that change nothing report it through their `bool` return instead.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for Layerpaint operations
pub type Result<T> = std::result::Result<T, CanvasError>;

/// Main error type for Layerpaint operations
#[derive(Error, Debug)]
pub enum CanvasError {
    // Configuration Errors
    #[error("Invalid draw style: {style} (expected SET, ADD or SEQUENCE)")]
    InvalidDrawStyle { style: String },

    #[error("Invalid grid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // Addressing Errors
    #[error("Cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Unknown layer: {name}")]
    UnknownLayer { name: String },

    #[error("Invalid operation: {op}")]
    InvalidOperation { op: String },

    // I/O Errors
    #[error("Failed to read config: {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CanvasError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            CanvasError::InvalidDrawStyle { .. } => "INVALID_DRAW_STYLE",
            CanvasError::InvalidDimensions { .. } => "INVALID_DIMENSIONS",
            CanvasError::InvalidConfig { .. } => "INVALID_CONFIG",
            CanvasError::OutOfBounds { .. } => "OUT_OF_BOUNDS",
            CanvasError::UnknownLayer { .. } => "UNKNOWN_LAYER",
            CanvasError::InvalidOperation { .. } => "INVALID_OPERATION",
            CanvasError::ConfigRead { .. } => "CONFIG_READ_ERROR",
            CanvasError::Json(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Returns a user-friendly recovery suggestion.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            CanvasError::InvalidDrawStyle { .. } => Some("Use one of: SET, ADD, SEQUENCE."),
            CanvasError::InvalidDimensions { .. } => {
                Some("Width and height must both be at least 1.")
            }
            CanvasError::OutOfBounds { .. } => Some("Pick a cell inside the grid."),
            CanvasError::UnknownLayer { .. } => {
                Some("Run 'layerpaint-cli layers' to list the available layers.")
            }
            CanvasError::ConfigRead { .. } => Some("Check the config path and try again."),
            _ => None,
        }
    }
}
