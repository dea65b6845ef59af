//! DDL lexing.
//!
//! [`Scanner`] is the character cursor the statement parser walks; [`Lexer`]
//! turns the text of a single table entry into [`Token`]s for the
//! definition parser.

mod scanner;
mod span;
mod token;
mod tokenizer;

pub use scanner::{Scanner, is_identifier_char, is_quote};
pub use span::Span;
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::Lexer;
