//! Tokenizer for a single table entry.

use super::{Keyword, Scanner, Span, Token, TokenKind, is_identifier_char};

/// A lexer that tokenizes the text of one column or clause definition.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// Character cursor over the input.
    scanner: Scanner<'a>,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            scanner: Scanner::new(input),
            start: 0,
        }
    }

    /// Creates a token spanning from the token start to the cursor.
    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, Span::new(self.start, self.scanner.position()))
    }

    /// Scans an identifier or keyword.
    fn scan_word(&mut self) -> Token {
        let word = self.scanner.parse_identifier();
        match Keyword::from_str(word) {
            Some(keyword) => self.make_token(TokenKind::Keyword(keyword)),
            None => self.make_token(TokenKind::Identifier(word.to_owned())),
        }
    }

    /// Scans a number, including a fractional part or a signed exponent.
    fn scan_number(&mut self) -> Token {
        loop {
            match self.scanner.peek() {
                Some(c) if c.is_ascii_alphanumeric() || c == '.' => {}
                Some('+' | '-')
                    if self
                        .scanner
                        .slice_from(self.start)
                        .ends_with(|c| matches!(c, 'e' | 'E')) => {}
                _ => break,
            }
            self.scanner.next();
        }
        let text = self.scanner.slice_from(self.start);
        self.make_token(TokenKind::Number(text.to_owned()))
    }

    /// Scans a quoted literal starting at `quote`.
    fn scan_quoted(&mut self, quote: char) -> Token {
        match self.scanner.parse_string() {
            Ok(text) if quote == '\'' => self.make_token(TokenKind::String(text.to_owned())),
            Ok(text) => self.make_token(TokenKind::QuotedIdentifier(text.to_owned())),
            Err(e) => self.make_token(TokenKind::Error(e.to_string())),
        }
    }

    /// Scans the next token.
    #[must_use]
    pub fn next_token(&mut self) -> Token {
        self.scanner.skip_whitespace();
        self.start = self.scanner.position();

        let Some(c) = self.scanner.peek() else {
            return self.make_token(TokenKind::Eof);
        };

        match c {
            '`' | '"' | '\'' => self.scan_quoted(c),
            c if c.is_ascii_digit() => self.scan_number(),
            c if is_identifier_char(c) => self.scan_word(),
            _ => {
                self.scanner.next();
                match c {
                    '(' => self.make_token(TokenKind::LeftParen),
                    ')' => self.make_token(TokenKind::RightParen),
                    ',' => self.make_token(TokenKind::Comma),
                    other => self.make_token(TokenKind::Symbol(other)),
                }
            }
        }
    }

    /// Tokenizes the entire input, ending with an [`TokenKind::Eof`] token.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let stop = token.is_eof() || matches!(token.kind, TokenKind::Error(_));
            tokens.push(token);
            if stop {
                break;
            }
        }
        if tokens.last().is_some_and(|t| !t.is_eof()) {
            let end = self.scanner.position();
            tokens.push(Token::new(TokenKind::Eof, Span::new(end, end)));
        }
        tokens
    }
}
