//! `$expand` clause parsing.
//!
//! [`apply_expand`] is the entry point used on a top-level query; it looks up
//! the `$expand` parameter and records either the parsed mapping or the
//! first error on the [`ODataQuery`].

mod bracket;
mod parser;

use rsodata_model::{ExpandMap, ODataQuery};
use tracing::debug;

pub use bracket::find_closing_bracket;
pub use parser::parse_expand;

use crate::options::ParserOptions;
use crate::params::QueryParams;

/// Query-string key of the expand clause.
pub const EXPAND: &str = "$expand";

/// Apply the `$expand` parameter to `query` with default options.
///
/// Returns `true` when the parse failed; see [`apply_expand_with`].
#[must_use]
pub fn apply_expand(params: &QueryParams, query: &mut ODataQuery) -> bool {
    apply_expand_with(params, query, &ParserOptions::default())
}

/// Apply the `$expand` parameter to `query`.
///
/// Without a `$expand` key this is a no-op. Otherwise `query.expand` is
/// populated in place. On failure the partially built mapping is discarded,
/// `query.error` is set and `true` is returned.
#[must_use]
pub fn apply_expand_with(
    params: &QueryParams,
    query: &mut ODataQuery,
    options: &ParserOptions,
) -> bool {
    let Some(value) = params.get(EXPAND) else {
        return false;
    };

    let expand = query.expand.insert(ExpandMap::new());
    match parser::parse_items(value, expand, options, 0) {
        Ok(()) => {
            debug!(items = expand.len(), "parsed $expand clause");
            false
        }
        Err(e) => {
            debug!(error = %e, value, "rejected $expand clause");
            query.expand = None;
            query.error = Some(e.into());
            true
        }
    }
}
