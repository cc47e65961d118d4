//! Parse error type for `$select` / `$expand` clauses.

use rsodata_model::ODataError;

/// Errors produced while parsing a query string.
///
/// The display text is the client-facing message carried by [`ODataError`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// An expand item is malformed (missing name, stray text, dangling comma).
    #[error("invalid expand expression")]
    InvalidExpandExpression,
    /// A `(` has no matching `)`.
    #[error("no closing bracket found")]
    NoClosingBracket,
    /// A parenthesized sub-query contains neither `$select` nor `$expand`.
    #[error("Empty expand")]
    EmptyExpand,
    /// A `$select` list is malformed.
    #[error("invalid select expression")]
    InvalidSelectExpression,
    /// Sub-queries are nested deeper than the configured limit.
    #[error("expand depth limit exceeded ({limit})")]
    DepthLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
}

impl From<ParseError> for ODataError {
    fn from(e: ParseError) -> Self {
        ODataError::invalid_query(e.to_string())
    }
}
