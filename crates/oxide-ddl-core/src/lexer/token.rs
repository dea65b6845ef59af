//! Token types for table entry definitions.

use super::Span;

/// Keywords that carry meaning inside a column or table constraint.
///
/// Type names (`INTEGER`, `VARCHAR`, ...) are not keywords: a column type
/// is the run of bare words after the column name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    // Constraints
    Constraint,
    Primary,
    Key,
    Foreign,
    References,
    Unique,
    Check,
    Default,
    Not,
    Null,
    Collate,
    Autoincrement,

    // Generated columns
    Generated,
    Always,
    As,
    Stored,
    Virtual,

    // Ordering
    Asc,
    Desc,

    // Conflict and referential actions
    On,
    Conflict,
    Delete,
    Update,
    Set,
    Cascade,
    Restrict,
    No,
    Action,
    Match,
    Deferrable,
}

impl Keyword {
    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "CONSTRAINT" => Some(Self::Constraint),
            "PRIMARY" => Some(Self::Primary),
            "KEY" => Some(Self::Key),
            "FOREIGN" => Some(Self::Foreign),
            "REFERENCES" => Some(Self::References),
            "UNIQUE" => Some(Self::Unique),
            "CHECK" => Some(Self::Check),
            "DEFAULT" => Some(Self::Default),
            "NOT" => Some(Self::Not),
            "NULL" => Some(Self::Null),
            "COLLATE" => Some(Self::Collate),
            "AUTOINCREMENT" => Some(Self::Autoincrement),
            "GENERATED" => Some(Self::Generated),
            "ALWAYS" => Some(Self::Always),
            "AS" => Some(Self::As),
            "STORED" => Some(Self::Stored),
            "VIRTUAL" => Some(Self::Virtual),
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            "ON" => Some(Self::On),
            "CONFLICT" => Some(Self::Conflict),
            "DELETE" => Some(Self::Delete),
            "UPDATE" => Some(Self::Update),
            "SET" => Some(Self::Set),
            "CASCADE" => Some(Self::Cascade),
            "RESTRICT" => Some(Self::Restrict),
            "NO" => Some(Self::No),
            "ACTION" => Some(Self::Action),
            "MATCH" => Some(Self::Match),
            "DEFERRABLE" => Some(Self::Deferrable),
            _ => None,
        }
    }
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Bare identifier or type word (e.g., `name`, `VARCHAR`).
    Identifier(String),
    /// Keyword from [`Keyword`].
    Keyword(Keyword),
    /// Identifier in backticks or double quotes, quotes removed.
    QuotedIdentifier(String),
    /// String literal in single quotes, quotes removed.
    String(String),
    /// Numeric literal, kept as written.
    Number(String),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `,`
    Comma,
    /// Any other single character (operators, `.`, `;`).
    Symbol(char),
    /// A quoted literal that never closed.
    Error(String),
    /// End of input.
    Eof,
}

/// A token with its location in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The location in the source text.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns true if this is the end-of-input token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns true if this token is the given keyword.
    #[must_use]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }

    /// Returns the identifier this token names, if it can name something.
    ///
    /// Bare identifiers, quoted identifiers and single-quoted strings all
    /// qualify. Keywords do not.
    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Identifier(name)
            | TokenKind::QuotedIdentifier(name)
            | TokenKind::String(name) => Some(name),
            _ => None,
        }
    }
}
