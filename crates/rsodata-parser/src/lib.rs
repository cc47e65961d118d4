//! OData query-string parsing for rsodata.
//!
//! The pipeline is:
//!
//! 1. **Tokenizing**: split the raw query string into key/value pairs ([`QueryParams`]).
//! 2. **`$select`**: split the selected field list.
//! 3. **`$expand`**: recursive descent over comma-separated navigation properties,
//!    each optionally followed by a parenthesized sub-query that is itself
//!    tokenized and parsed for `$select` and `$expand`.
//!
//! Errors never escape as panics; they are attached to the resulting
//! [`ODataQuery`](rsodata_model::ODataQuery) as `{"code": "0x0", "message": ...}`.

pub mod error;
pub mod expand;
pub mod options;
pub mod params;
pub mod query;
mod scan;
pub mod select;

pub use error::ParseError;
pub use expand::{apply_expand, apply_expand_with, find_closing_bracket, parse_expand};
pub use options::ParserOptions;
pub use params::QueryParams;
pub use query::{parse_query, parse_query_str, parse_query_with};
pub use select::{apply_select, parse_select};
