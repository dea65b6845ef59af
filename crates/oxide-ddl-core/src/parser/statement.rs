//! Statement-level parsing: table name, table body entries, statement kind.

use crate::error::{DdlError, Result};
use crate::lexer::{Scanner, is_identifier_char, is_quote};

/// Words that may precede the table name in a `CREATE TABLE` header.
const HEADER_KEYWORDS: &[&str] = &["CREATE", "TEMP", "TEMPORARY", "TABLE", "IF", "NOT", "EXISTS"];

/// The kind of DDL statement, judged from its leading keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// `CREATE [TEMP | TEMPORARY] TABLE`.
    CreateTable,
    /// `CREATE [UNIQUE] INDEX`.
    CreateIndex,
    /// Anything else.
    Other,
}

/// Classifies a statement by its leading keywords (case-insensitive).
#[must_use]
pub fn classify_statement(sql: &str) -> StatementKind {
    let mut scanner = Scanner::new(sql);
    let mut next_word = || {
        scanner.skip_whitespace();
        scanner.parse_identifier().to_ascii_uppercase()
    };

    if next_word() != "CREATE" {
        return StatementKind::Other;
    }
    let mut word = next_word();
    if word == "TEMP" || word == "TEMPORARY" {
        word = next_word();
        return if word == "TABLE" {
            StatementKind::CreateTable
        } else {
            StatementKind::Other
        };
    }
    if word == "UNIQUE" {
        word = next_word();
        return if word == "INDEX" {
            StatementKind::CreateIndex
        } else {
            StatementKind::Other
        };
    }
    match word.as_str() {
        "TABLE" => StatementKind::CreateTable,
        "INDEX" => StatementKind::CreateIndex,
        _ => StatementKind::Other,
    }
}

/// Splits a script into statements on `;` outside quoted text.
///
/// Statements are trimmed; empty statements are dropped.
///
/// # Errors
///
/// Returns [`DdlError::UnterminatedString`] if a quoted literal never
/// closes.
pub fn split_statements(script: &str) -> Result<Vec<String>> {
    let mut scanner = Scanner::new(script);
    let mut statements = Vec::new();
    let mut start = 0;

    while let Some(c) = scanner.peek() {
        if is_quote(c) {
            scanner.parse_string()?;
            continue;
        }
        scanner.next();
        if c == ';' {
            push_trimmed(&mut statements, &script[start..scanner.position() - 1]);
            start = scanner.position();
        }
    }
    push_trimmed(&mut statements, &script[start..]);

    Ok(statements)
}

fn push_trimmed(out: &mut Vec<String>, text: &str) {
    let text = text.trim();
    if !text.is_empty() {
        out.push(text.to_owned());
    }
}

/// Parser for the outer structure of one `CREATE TABLE` statement.
///
/// The table body is split into its top-level entries but the entries
/// themselves are kept as raw text; see
/// [`DefinitionParser`](super::DefinitionParser) for their contents.
pub struct StatementParser<'a> {
    scanner: Scanner<'a>,
}

impl<'a> StatementParser<'a> {
    /// Creates a new parser for the given statement.
    #[must_use]
    pub const fn new(sql: &'a str) -> Self {
        Self {
            scanner: Scanner::new(sql),
        }
    }

    /// Parses the table name, skipping the `CREATE TABLE` header words.
    ///
    /// Quoted names keep their inner text verbatim. A schema qualifier such
    /// as `main.` is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::MissingTableName`] when the body or the end of
    /// input is reached first, or [`DdlError::UnterminatedString`] for an
    /// unclosed quoted name.
    pub fn parse_table_name(&mut self) -> Result<String> {
        loop {
            self.scanner.skip_whitespace();
            let name = match self.scanner.peek() {
                None | Some('(') => return Err(DdlError::MissingTableName),
                Some(c) if is_quote(c) => self.scanner.parse_string()?,
                Some(c) if is_identifier_char(c) => {
                    let word = self.scanner.parse_identifier();
                    if HEADER_KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(word)) {
                        continue;
                    }
                    word
                }
                Some(_) => {
                    self.scanner.next();
                    continue;
                }
            };

            self.scanner.skip_whitespace();
            if self.scanner.peek() == Some('.') {
                // Schema qualifier; the table name follows.
                self.scanner.next();
                continue;
            }
            return Ok(name.to_owned());
        }
    }

    /// Parses the table body into its trimmed top-level entries.
    ///
    /// A `,` separates entries only at nesting depth one, so
    /// `DECIMAL(10,2)` and `CHECK (a IN (1, 2))` stay whole. Quoted text is
    /// consumed as a unit and never affects the nesting depth.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::MissingTableBody`] if there is no `(`,
    /// [`DdlError::UnterminatedTableDefinition`] if the body never closes,
    /// or [`DdlError::UnterminatedString`] for an unclosed quote.
    pub fn parse_table_fields(&mut self) -> Result<Vec<String>> {
        loop {
            match self.scanner.peek() {
                Some('(') => break,
                Some(c) if is_quote(c) => {
                    self.scanner.parse_string()?;
                }
                Some(_) => {
                    self.scanner.next();
                }
                None => return Err(DdlError::MissingTableBody),
            }
        }
        self.scanner.next();

        let mut fields = Vec::new();
        let mut current = String::new();
        let mut depth = 1usize;

        loop {
            let start = self.scanner.position();
            let Some(c) = self.scanner.peek() else {
                return Err(DdlError::UnterminatedTableDefinition { depth });
            };

            if is_quote(c) {
                self.scanner.parse_string()?;
                current.push_str(self.scanner.slice_from(start));
                continue;
            }

            self.scanner.next();
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        push_trimmed(&mut fields, &current);
                        break;
                    }
                }
                ',' if depth == 1 => {
                    push_trimmed(&mut fields, &current);
                    current.clear();
                    continue;
                }
                _ => {}
            }
            current.push(c);
        }

        Ok(fields)
    }
}
