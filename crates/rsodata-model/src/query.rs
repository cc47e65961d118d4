//! Parsed OData query structures.

use std::collections::BTreeMap;

use crate::error::ODataError;

/// Navigation-property name to expanded sub-query.
pub type ExpandMap = BTreeMap<String, ODataExpandQuery>;

/// Top-level result of parsing a query string.
///
/// Populated in place by the parser. When `error` is set the rest of the
/// structure must not be trusted.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ODataQuery {
    /// Parse error, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ODataError>,
    /// Selected fields (`$select`).
    #[serde(rename = "$select", default, skip_serializing_if = "Option::is_none")]
    pub select: Option<Vec<String>>,
    /// Expanded navigation properties (`$expand`).
    #[serde(rename = "$expand", default, skip_serializing_if = "Option::is_none")]
    pub expand: Option<ExpandMap>,
}

impl ODataQuery {
    /// Convert the in-place error field into a `Result`.
    pub fn into_result(mut self) -> Result<Self, ODataError> {
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }
}

/// One expanded navigation property.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ODataExpandQuery {
    /// Selected fields of the related entity.
    #[serde(rename = "$select", default, skip_serializing_if = "Option::is_none")]
    pub select: Option<Vec<String>>,
    /// Nested expansions.
    #[serde(rename = "$expand", default, skip_serializing_if = "Option::is_none")]
    pub expand: Option<ExpandMap>,
}

impl ODataExpandQuery {
    /// An expand with no sub-clause: `{ "$select": [] }`.
    #[must_use]
    pub fn bare() -> Self {
        Self {
            select: Some(Vec::new()),
            expand: None,
        }
    }

    /// Neither `$select` nor `$expand` was populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.select.is_none() && self.expand.is_none()
    }
}
