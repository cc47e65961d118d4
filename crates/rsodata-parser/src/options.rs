//! Parser options.

use rsodata_core::ODataConfig;

/// Knobs that change how a query string is parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum nesting depth of parenthesized `$expand` sub-queries.
    /// `None` leaves nesting bounded only by the input.
    pub max_expand_depth: Option<usize>,
}

impl ParserOptions {
    /// Whether a sub-query at `depth` (1 = directly inside the top-level
    /// `$expand`) is permitted.
    #[must_use]
    pub fn allows_depth(&self, depth: usize) -> bool {
        self.max_expand_depth.is_none_or(|limit| depth <= limit)
    }
}

impl From<&ODataConfig> for ParserOptions {
    fn from(config: &ODataConfig) -> Self {
        Self {
            max_expand_depth: config.max_expand_depth,
        }
    }
}
