//! Byte cursor over a borrowed clause string.

/// Forward-only cursor. `pos` is always on a char boundary.
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Unconsumed input.
    pub(crate) fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Advance by `len` bytes; `len` must land on a char boundary.
    pub(crate) fn advance(&mut self, len: usize) {
        self.pos = (self.pos + len).min(self.input.len());
    }

    pub(crate) fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Consume `ch` if it is the next character.
    pub(crate) fn eat(&mut self, ch: char) -> bool {
        if self.rest().starts_with(ch) {
            self.pos += ch.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume an identifier, if one starts here.
    pub(crate) fn eat_identifier(&mut self) -> Option<&'a str> {
        let rest = self.rest();
        let len = identifier_len(rest);
        if len == 0 {
            return None;
        }
        self.pos += len;
        Some(&rest[..len])
    }
}

/// Length in bytes of the identifier at the start of `s` (0 if none).
pub(crate) fn identifier_len(s: &str) -> usize {
    if !s.starts_with(is_ident_start) {
        return 0;
    }
    s.find(|c: char| !is_ident_continue(c)).unwrap_or(s.len())
}

/// Whether the whole of `s` is one identifier.
pub(crate) fn is_identifier(s: &str) -> bool {
    !s.is_empty() && identifier_len(s) == s.len()
}

/// Returns `true` if `c` can start an identifier.
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns `true` if `c` can continue an identifier.
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
