//! Recursive-descent parser for `$expand` clauses.
//!
//! Grammar (whitespace allowed around names and separators):
//!
//! ```text
//! expand   := item ( ',' item )*
//! item     := name ( '(' options ')' )?
//! options  := query-string with optional `$select` and `$expand`
//! ```
//!
//! Top-level items are consumed in a loop; only parenthesized sub-queries
//! recurse, so recursion depth is the nesting depth of the input.

use rsodata_model::{ExpandMap, ODataExpandQuery};
use tracing::{debug, trace};

use super::EXPAND;
use super::bracket::find_closing_bracket;
use crate::error::ParseError;
use crate::options::ParserOptions;
use crate::params::QueryParams;
use crate::scan::Cursor;
use crate::select::parse_select;

/// What follows a navigation-property name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Separator {
    /// End of the clause.
    End,
    /// `,` and another item.
    Comma,
    /// `(` opening a sub-query.
    Open,
}

/// Parse a raw `$expand` value into a fresh mapping.
pub fn parse_expand(value: &str, options: &ParserOptions) -> Result<ExpandMap, ParseError> {
    let mut expand = ExpandMap::new();
    parse_items(value, &mut expand, options, 0)?;
    Ok(expand)
}

/// Parse comma-separated expand items from `value` into `expand`.
///
/// `depth` is the number of enclosing parenthesized groups.
pub(crate) fn parse_items(
    value: &str,
    expand: &mut ExpandMap,
    options: &ParserOptions,
    depth: usize,
) -> Result<(), ParseError> {
    let mut cursor = Cursor::new(value);

    loop {
        let (name, separator) = next_item(&mut cursor)?;
        trace!(nav = name, ?separator, depth, "parsed expand item");

        match separator {
            Separator::End => {
                expand.insert(name.to_owned(), ODataExpandQuery::bare());
                return Ok(());
            }
            Separator::Comma => {
                expand.insert(name.to_owned(), ODataExpandQuery::bare());
            }
            Separator::Open => {
                let close = find_closing_bracket(cursor.rest())?;
                let inner = &cursor.rest()[..close];
                let node = parse_sub_query(name, inner, options, depth + 1)?;
                expand.insert(name.to_owned(), node);

                cursor.advance(close + 1);
                cursor.skip_whitespace();
                if cursor.is_eof() {
                    return Ok(());
                }
                if !cursor.eat(',') {
                    return Err(ParseError::InvalidExpandExpression);
                }
                cursor.skip_whitespace();
            }
        }
    }
}

/// Consume one navigation-property name and the separator after it.
fn next_item<'a>(cursor: &mut Cursor<'a>) -> Result<(&'a str, Separator), ParseError> {
    cursor.skip_whitespace();
    let name = cursor
        .eat_identifier()
        .ok_or(ParseError::InvalidExpandExpression)?;
    cursor.skip_whitespace();

    let separator = if cursor.eat(',') {
        Separator::Comma
    } else if cursor.eat('(') {
        Separator::Open
    } else {
        Separator::End
    };
    cursor.skip_whitespace();

    // trailing text with no separator, or a dangling comma
    let malformed = match separator {
        Separator::End => !cursor.is_eof(),
        Separator::Comma => cursor.is_eof(),
        Separator::Open => false,
    };
    if malformed {
        return Err(ParseError::InvalidExpandExpression);
    }
    Ok((name, separator))
}

/// Parse the options between `name(` and `)` into a new node.
fn parse_sub_query(
    name: &str,
    inner: &str,
    options: &ParserOptions,
    depth: usize,
) -> Result<ODataExpandQuery, ParseError> {
    if !options.allows_depth(depth) {
        return Err(ParseError::DepthLimitExceeded {
            limit: options.max_expand_depth.unwrap_or_default(),
        });
    }
    debug!(nav = name, depth, "entering expand sub-query");

    let params = QueryParams::parse_nested(inner);
    let mut node = ODataExpandQuery {
        select: parse_select(&params)?,
        expand: None,
    };
    if let Some(value) = params.get(EXPAND) {
        parse_items(value, node.expand.insert(ExpandMap::new()), options, depth)?;
    }

    if node.is_empty() {
        return Err(ParseError::EmptyExpand);
    }
    Ok(node)
}
