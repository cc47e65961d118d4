//! Integration tests for rsodata.
//!
//! These exercise the public parser API end to end, from a raw query string
//! to the serialized JSON shape.
//!
//! ```text
//! cargo test -p rsodata-integration
//! ```

use std::sync::Once;

use rsodata_model::ODataQuery;
use rsodata_parser::parse_query_str;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Parse a raw query string with default options.
#[must_use]
pub fn parse(query: &str) -> ODataQuery {
    init_tracing();
    tracing::debug!(query, "parsing test query");
    parse_query_str(query)
}

/// Parse a raw query string and serialize the result to JSON.
#[must_use]
pub fn parse_json(query: &str) -> serde_json::Value {
    serde_json::to_value(parse(query)).expect("parsed query serializes")
}

/// The error message of a failed parse, if any.
#[must_use]
pub fn error_message(query: &str) -> Option<String> {
    parse(query).error.map(|e| e.message)
}

mod test_config;
mod test_expand;
mod test_select;
