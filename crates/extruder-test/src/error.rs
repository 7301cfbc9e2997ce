//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to load an image
    #[error("failed to load image '{path}': {message}")]
    ImageLoad { path: String, message: String },

    /// Failed to build a fixture image
    #[error("failed to build fixture: {0}")]
    Fixture(#[from] extruder_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
