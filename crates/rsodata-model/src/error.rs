//! OData error types.
//!
//! Parse failures are reported on the query object as
//! `{"code": "0x0", "message": "..."}`.

use std::fmt;

/// Well-known OData error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[non_exhaustive]
pub enum ODataErrorCode {
    /// The query string could not be parsed.
    #[default]
    #[serde(rename = "0x0")]
    InvalidQuery,
}

impl ODataErrorCode {
    /// Returns the error code string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidQuery => "0x0",
        }
    }
}

impl fmt::Display for ODataErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An OData error as attached to a parsed query.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ODataError {
    /// The error code.
    pub code: ODataErrorCode,
    /// A human-readable error message.
    pub message: String,
}

impl fmt::Display for ODataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ODataError({}): {}", self.code, self.message)
    }
}

impl std::error::Error for ODataError {}

impl ODataError {
    /// Create a new `ODataError` with a custom message.
    #[must_use]
    pub fn with_message(code: ODataErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Query could not be parsed.
    #[must_use]
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::with_message(ODataErrorCode::InvalidQuery, message)
    }
}
