//! OData query model types for rsodata.
//!
//! These are the structures the parser populates and callers serialize. Field
//! names on the wire follow OData system query options (`$select`, `$expand`).
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod query;

pub use error::{ODataError, ODataErrorCode};
pub use query::{ExpandMap, ODataExpandQuery, ODataQuery};
