//! Error types for the rsodata core.

/// Infrastructure error type for rsodata.
///
/// Query parse failures are not reported through this type; they are carried
/// on the parsed query itself.
#[derive(Debug, thiserror::Error)]
pub enum RsODataError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience result type for rsodata operations.
pub type RsODataResult<T> = Result<T, RsODataError>;
