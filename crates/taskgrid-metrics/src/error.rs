//! Metrics error types.

use thiserror::Error;

/// Result type alias for metrics setup and exposition.
pub type MetricsResult<T> = Result<T, MetricsError>;

/// Errors that can occur while registering or exposing instruments.
///
/// Recording operations never return errors; only startup registration
/// and text encoding can fail.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("instrument registration failed: {0}")]
    Register(#[source] prometheus::Error),

    #[error("exposition encoding failed: {0}")]
    Encode(#[source] prometheus::Error),
}
