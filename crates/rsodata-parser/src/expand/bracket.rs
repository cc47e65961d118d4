//! Parenthesis matching for `$expand` sub-queries.

use crate::error::ParseError;

/// Find the `)` that closes a group opened just before `input`.
///
/// Scanning starts at depth 1. Returns the byte index of the matching `)`
/// relative to `input`. Every `(` and `)` counts, including ones inside
/// names or values; there is no escaping.
pub fn find_closing_bracket(input: &str) -> Result<usize, ParseError> {
    let mut depth = 1usize;
    for (idx, paren) in input.match_indices(['(', ')']) {
        if paren == "(" {
            depth += 1;
        } else {
            depth -= 1;
            if depth == 0 {
                return Ok(idx);
            }
        }
    }
    Err(ParseError::NoClosingBracket)
}
