//! Top-level query parsing.

use rsodata_model::ODataQuery;
use tracing::debug;

use crate::expand::apply_expand_with;
use crate::options::ParserOptions;
use crate::params::QueryParams;
use crate::select::apply_select;

/// Parse `$select` and `$expand` from tokenized parameters with default options.
#[must_use]
pub fn parse_query(params: &QueryParams) -> ODataQuery {
    parse_query_with(params, &ParserOptions::default())
}

/// Parse `$select` and `$expand` from tokenized parameters.
///
/// Parsing stops at the first failing clause. A failed query carries only
/// [`ODataQuery::error`]; clauses parsed before the failure are dropped.
#[must_use]
pub fn parse_query_with(params: &QueryParams, options: &ParserOptions) -> ODataQuery {
    let mut query = ODataQuery::default();
    if params.is_empty() {
        return query;
    }
    if apply_select(params, &mut query) || apply_expand_with(params, &mut query, options) {
        debug!(params = params.len(), "query parse failed");
        return ODataQuery {
            error: query.error,
            ..ODataQuery::default()
        };
    }
    query
}

/// Tokenize and parse a raw query string such as `?$select=a&$expand=Foo`.
#[must_use]
pub fn parse_query_str(query: &str) -> ODataQuery {
    parse_query(&QueryParams::parse(query))
}
