//! Query-string tokenizer.
//!
//! Splits `?key1=val1&key2=val2` into decoded key/value pairs. Decoding
//! follows `application/x-www-form-urlencoded` (`%XX` escapes and `+` as
//! space), the same rules a browser `URLSearchParams` applies.

/// Decoded query-string parameters in the order they appear.
///
/// Keys are case-sensitive and may repeat; [`QueryParams::get`] returns the
/// first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Tokenize a top-level query string. A leading `?` is optional.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self {
            pairs: form_urlencoded::parse(query.as_bytes()).into_owned().collect(),
        }
    }

    /// Tokenize the option list of a parenthesized `$expand` sub-query.
    ///
    /// Options may be separated by `&` or by OData's nested separator `;`.
    /// A `;` inside a deeper parenthesized group belongs to that group.
    #[must_use]
    pub fn parse_nested(options: &str) -> Self {
        Self {
            pairs: split_outside_parens(options, ';')
                .flat_map(|segment| form_urlencoded::parse(segment.as_bytes()).into_owned())
                .collect(),
        }
    }

    /// Get the first value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether there are no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Split `s` on `sep` wherever it is not enclosed in parentheses.
fn split_outside_parens(s: &str, sep: char) -> impl Iterator<Item = &str> {
    let mut depth = 0usize;
    s.split(move |c: char| {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
        c == sep && depth == 0
    })
}
