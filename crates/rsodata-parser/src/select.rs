//! `$select` clause parsing.

use rsodata_model::ODataQuery;
use tracing::debug;

use crate::error::ParseError;
use crate::params::QueryParams;
use crate::scan::is_identifier;

/// Query-string key of the select clause.
pub const SELECT: &str = "$select";

/// Parse the `$select` parameter, if present.
///
/// Returns `Ok(None)` when the key is absent. Items are comma-separated
/// field names (surrounding whitespace ignored) or `*`.
pub fn parse_select(params: &QueryParams) -> Result<Option<Vec<String>>, ParseError> {
    let Some(value) = params.get(SELECT) else {
        return Ok(None);
    };

    let fields = value
        .split(',')
        .map(str::trim)
        .map(|field| {
            if field == "*" || is_identifier(field) {
                Ok(field.to_owned())
            } else {
                Err(ParseError::InvalidSelectExpression)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(fields))
}

/// Apply the `$select` parameter to a top-level query.
///
/// Returns `true` when the parse failed; the error is then set on `query`.
#[must_use]
pub fn apply_select(params: &QueryParams, query: &mut ODataQuery) -> bool {
    match parse_select(params) {
        Ok(select) => {
            query.select = select;
            false
        }
        Err(e) => {
            debug!(error = %e, "rejected $select clause");
            query.error = Some(e.into());
            true
        }
    }
}
