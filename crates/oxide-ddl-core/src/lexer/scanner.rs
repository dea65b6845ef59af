//! Character cursor used by the statement parser.

use crate::error::{DdlError, Result};

/// Returns true for the characters that open and close a quoted literal.
#[must_use]
pub const fn is_quote(c: char) -> bool {
    matches!(c, '`' | '"' | '\'')
}

/// Returns true for the characters that make up a bare identifier.
#[must_use]
pub fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A forward-only cursor over a text buffer.
///
/// `next` yields `None` once the cursor reaches the end of the input, and
/// keeps yielding `None` afterwards.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    /// The input text.
    input: &'a str,
    /// The current byte position.
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the input consumed since `start`.
    #[must_use]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.pos]
    }

    /// Returns the input that has not been consumed yet.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Returns the current character without advancing.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Skips any whitespace at the cursor.
    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.next();
        }
    }

    /// Consumes a maximal run of letters, digits and underscores.
    ///
    /// Returns an empty string when the cursor is not on an identifier
    /// character.
    pub fn parse_identifier(&mut self) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(is_identifier_char) {
            self.next();
        }
        self.slice_from(start)
    }

    /// Consumes a quoted literal and returns the text between the quotes.
    ///
    /// The character at the cursor is taken as the quote. No escape
    /// sequences are recognized: `'it''s'` reads as `it` followed by a
    /// second literal `s`.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::UnterminatedString`] when the input ends before
    /// the closing quote.
    pub fn parse_string(&mut self) -> Result<&'a str> {
        let position = self.pos;
        let quote = self
            .next()
            .ok_or(DdlError::UnterminatedString { position })?;
        let content_start = self.pos;

        loop {
            match self.next() {
                Some(c) if c == quote => {
                    let end = self.pos - quote.len_utf8();
                    return Ok(&self.input[content_start..end]);
                }
                Some(_) => {}
                None => return Err(DdlError::UnterminatedString { position }),
            }
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = char;

    /// Returns the current character and advances past it.
    fn next(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }
}
