//! Recursive descent parser for a single table entry.

use crate::ast::{
    CheckClause, ColumnDefinition, ConstraintBody, ConstraintClause, Definition, ForeignKeyClause,
    ForeignKeyReference, PrimaryKeyClause, ReferentialAction, UniqueClause,
};
use crate::lexer::{Keyword, Lexer, Span, Token, TokenKind};

/// Classifies one top-level table entry.
///
/// Parsing is permissive: constructs the grammar does not model are
/// skipped, and an entry that cannot be read at all becomes
/// [`Definition::Unrecognized`].
#[must_use]
pub fn parse_definition(text: &str) -> Definition {
    DefinitionParser::new(text).parse()
}

/// Parser for a column definition or table constraint.
pub struct DefinitionParser<'a> {
    source: &'a str,
    lexer: Lexer<'a>,
    current: Token,
    /// One token of lookahead past `current`.
    next: Token,
    previous: Token,
}

impl<'a> DefinitionParser<'a> {
    /// Creates a new parser for the given entry text.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        let next = lexer.next_token();
        Self {
            source,
            lexer,
            current,
            next,
            previous: Token::new(TokenKind::Eof, Span::default()),
        }
    }

    /// Parses the entry.
    #[must_use]
    pub fn parse(mut self) -> Definition {
        match &self.current.kind {
            TokenKind::Keyword(Keyword::Constraint) if self.starts_named_constraint() => {
                self.advance();
                let name = self.take_name().unwrap_or_default();
                let body = self.parse_constraint_body();
                Definition::Constraint(ConstraintClause { name, body })
            }
            TokenKind::Keyword(Keyword::Primary | Keyword::Foreign)
                if self.next.is_keyword(Keyword::Key) =>
            {
                self.parse_table_constraint()
            }
            TokenKind::Keyword(Keyword::Unique | Keyword::Check)
                if self.next.kind == TokenKind::LeftParen =>
            {
                self.parse_table_constraint()
            }
            TokenKind::Eof | TokenKind::Error(_) => Definition::Unrecognized,
            _ => self
                .parse_column()
                .map_or(Definition::Unrecognized, Definition::Column),
        }
    }

    /// Distinguishes `CONSTRAINT name <body>` from a column named
    /// `constraint`: the token after the name must open a constraint body.
    fn starts_named_constraint(&self) -> bool {
        if self.name_of(&self.next).is_none() {
            return false;
        }
        let mut ahead = self.lexer.clone();
        match ahead.next_token().kind {
            TokenKind::Keyword(
                Keyword::Primary | Keyword::Unique | Keyword::Check | Keyword::Foreign,
            )
            | TokenKind::Identifier(_) => true,
            _ => false,
        }
    }

    fn parse_table_constraint(&mut self) -> Definition {
        match self.parse_constraint_body() {
            ConstraintBody::PrimaryKey(clause) => Definition::PrimaryKey(clause),
            ConstraintBody::Unique(clause) => Definition::Unique(clause),
            ConstraintBody::Check(clause) => Definition::Check(clause),
            ConstraintBody::ForeignKey(clause) => Definition::ForeignKey(clause),
            ConstraintBody::Other => Definition::Unrecognized,
        }
    }

    fn parse_constraint_body(&mut self) -> ConstraintBody {
        if self.consume_keyword(Keyword::Primary) {
            self.consume_keyword(Keyword::Key);
            ConstraintBody::PrimaryKey(PrimaryKeyClause {
                columns: self.parse_name_list(),
            })
        } else if self.consume_keyword(Keyword::Unique) {
            ConstraintBody::Unique(UniqueClause {
                columns: self.parse_name_list(),
            })
        } else if self.check_keyword(Keyword::Check) && self.next.kind == TokenKind::LeftParen {
            self.advance();
            ConstraintBody::Check(CheckClause {
                expression: self.parse_group_text(),
            })
        } else if self.consume_keyword(Keyword::Foreign) {
            self.consume_keyword(Keyword::Key);
            let columns = self.parse_name_list();
            if !self.consume_keyword(Keyword::References) {
                return ConstraintBody::Other;
            }
            ConstraintBody::ForeignKey(ForeignKeyClause {
                columns,
                reference: self.parse_reference(),
            })
        } else {
            ConstraintBody::Other
        }
    }

    /// Parses `name [type] [constraint...]`.
    fn parse_column(&mut self) -> Option<ColumnDefinition> {
        let mut column = ColumnDefinition::new(self.take_name()?);
        column.type_name = self.parse_type_name();

        loop {
            match &self.current.kind {
                TokenKind::Eof | TokenKind::Error(_) => break,
                TokenKind::Keyword(Keyword::Constraint) => {
                    self.advance();
                    self.take_name();
                }
                TokenKind::Keyword(Keyword::Primary) => {
                    self.advance();
                    if self.consume_keyword(Keyword::Key) {
                        column.primary_key = true;
                        if !self.consume_keyword(Keyword::Asc) {
                            self.consume_keyword(Keyword::Desc);
                        }
                        self.skip_conflict_clause();
                    }
                }
                TokenKind::Keyword(Keyword::Autoincrement) => {
                    self.advance();
                    column.auto_increment = true;
                }
                TokenKind::Keyword(Keyword::Not) => {
                    self.advance();
                    if self.consume_keyword(Keyword::Null) {
                        column.nullable = false;
                        self.skip_conflict_clause();
                    }
                }
                TokenKind::Keyword(Keyword::Unique) => {
                    self.advance();
                    column.unique = true;
                    self.skip_conflict_clause();
                }
                TokenKind::Keyword(Keyword::Check) => {
                    self.advance();
                    if self.current.kind == TokenKind::LeftParen {
                        column.check = Some(self.parse_group_text());
                    }
                }
                TokenKind::Keyword(Keyword::Default) => {
                    self.advance();
                    column.default = self.parse_default();
                }
                TokenKind::Keyword(Keyword::Collate) => {
                    self.advance();
                    column.collation = self.take_name();
                }
                TokenKind::Keyword(Keyword::References) => {
                    self.advance();
                    column.references = Some(self.parse_reference());
                }
                TokenKind::Keyword(Keyword::Generated) => {
                    self.advance();
                    self.consume_keyword(Keyword::Always);
                }
                TokenKind::Keyword(Keyword::As) => {
                    self.advance();
                    if self.current.kind == TokenKind::LeftParen {
                        column.generated = Some(self.parse_group_text());
                    }
                }
                TokenKind::Keyword(Keyword::Stored) => {
                    self.advance();
                    column.stored = true;
                }
                TokenKind::Keyword(Keyword::Virtual) => {
                    self.advance();
                    column.stored = false;
                }
                TokenKind::LeftParen => {
                    self.parse_group();
                }
                _ => self.advance(),
            }
        }

        Some(column)
    }

    /// Parses the run of bare words after a column name plus an optional
    /// parenthesized argument list, returning the type as written.
    fn parse_type_name(&mut self) -> Option<String> {
        let start = match self.current.kind {
            TokenKind::Identifier(_) => self.current.span.start,
            _ => return None,
        };
        while matches!(self.current.kind, TokenKind::Identifier(_)) {
            self.advance();
        }
        if self.current.kind == TokenKind::LeftParen {
            self.parse_group();
        }
        let end = self.previous.span.end;
        Some(self.source[start..end].to_owned())
    }

    /// Parses the expression after `DEFAULT`.
    ///
    /// `DEFAULT NULL` yields `None`. A parenthesized expression loses one
    /// layer of parentheses.
    fn parse_default(&mut self) -> Option<String> {
        let start = self.current.span;
        match &self.current.kind {
            TokenKind::Eof | TokenKind::Error(_) => None,
            TokenKind::Keyword(Keyword::Null) => {
                self.advance();
                None
            }
            TokenKind::LeftParen => Some(self.parse_group_text()),
            TokenKind::Symbol('-' | '+') => {
                self.advance();
                if matches!(self.current.kind, TokenKind::Number(_)) {
                    self.advance();
                }
                Some(self.text(start.merge(self.previous.span)).to_owned())
            }
            TokenKind::String(_) => {
                // `'O''Brien'` scans as adjacent literals
                self.advance();
                while matches!(self.current.kind, TokenKind::String(_))
                    && self.current.span.start == self.previous.span.end
                {
                    self.advance();
                }
                Some(self.text(start.merge(self.previous.span)).to_owned())
            }
            TokenKind::Identifier(_) if self.next.kind == TokenKind::LeftParen => {
                self.advance();
                self.parse_group();
                Some(self.text(start.merge(self.previous.span)).to_owned())
            }
            _ => {
                self.advance();
                Some(self.text(start).to_owned())
            }
        }
    }

    /// Parses `table [(columns)] [ON DELETE action] [ON UPDATE action] ...`
    /// after `REFERENCES`.
    fn parse_reference(&mut self) -> ForeignKeyReference {
        let mut reference = ForeignKeyReference {
            table: self.take_name().unwrap_or_default(),
            columns: self.parse_name_list(),
            on_delete: None,
            on_update: None,
        };

        loop {
            if self.check_keyword(Keyword::On) && self.next.is_keyword(Keyword::Delete) {
                self.advance();
                self.advance();
                reference.on_delete = self.parse_referential_action();
            } else if self.check_keyword(Keyword::On) && self.next.is_keyword(Keyword::Update) {
                self.advance();
                self.advance();
                reference.on_update = self.parse_referential_action();
            } else if self.consume_keyword(Keyword::Match) {
                self.take_name();
            } else if self.check_keyword(Keyword::Not) && self.next.is_keyword(Keyword::Deferrable)
            {
                self.advance();
                self.advance();
            } else if matches!(&self.current.kind, TokenKind::Identifier(w) if w.eq_ignore_ascii_case("INITIALLY"))
            {
                self.advance();
                self.advance();
            } else if !self.consume_keyword(Keyword::Deferrable) {
                break;
            }
        }

        reference
    }

    fn parse_referential_action(&mut self) -> Option<ReferentialAction> {
        let action = match &self.current.kind {
            TokenKind::Keyword(Keyword::Cascade) => ReferentialAction::Cascade,
            TokenKind::Keyword(Keyword::Restrict) => ReferentialAction::Restrict,
            TokenKind::Keyword(Keyword::Set) if self.next.is_keyword(Keyword::Null) => {
                self.advance();
                ReferentialAction::SetNull
            }
            TokenKind::Keyword(Keyword::Set) if self.next.is_keyword(Keyword::Default) => {
                self.advance();
                ReferentialAction::SetDefault
            }
            TokenKind::Keyword(Keyword::No) if self.next.is_keyword(Keyword::Action) => {
                self.advance();
                ReferentialAction::NoAction
            }
            _ => return None,
        };
        self.advance();
        Some(action)
    }

    /// Skips `ON CONFLICT <resolution>`.
    fn skip_conflict_clause(&mut self) {
        if self.check_keyword(Keyword::On) && self.next.is_keyword(Keyword::Conflict) {
            self.advance();
            self.advance();
            self.advance();
        }
    }

    /// Parses `(a, b DESC, c COLLATE x)` into `[a, b, c]`.
    ///
    /// Returns an empty list when the current token is not `(`.
    fn parse_name_list(&mut self) -> Vec<String> {
        let mut names = Vec::new();
        if self.current.kind != TokenKind::LeftParen {
            return names;
        }
        self.advance();

        let mut depth = 0usize;
        let mut expect_name = true;
        loop {
            match &self.current.kind {
                TokenKind::Eof | TokenKind::Error(_) => break,
                TokenKind::RightParen if depth == 0 => {
                    self.advance();
                    break;
                }
                TokenKind::LeftParen => depth += 1,
                TokenKind::RightParen => depth -= 1,
                TokenKind::Comma if depth == 0 => expect_name = true,
                _ if expect_name && depth == 0 => {
                    if let Some(name) = self.name_of(&self.current) {
                        names.push(name);
                    }
                    expect_name = false;
                }
                _ => {}
            }
            self.advance();
        }

        names
    }

    /// Consumes a balanced parenthesized group starting at the current `(`
    /// and returns the span between the outer parentheses.
    fn parse_group(&mut self) -> Span {
        let start = self.current.span.end;
        self.advance();

        let mut depth = 1usize;
        loop {
            match self.current.kind {
                TokenKind::LeftParen => depth += 1,
                TokenKind::RightParen => {
                    depth -= 1;
                    if depth == 0 {
                        let inner = Span::new(start, self.current.span.start);
                        self.advance();
                        return inner;
                    }
                }
                TokenKind::Eof | TokenKind::Error(_) => {
                    return Span::new(start, self.current.span.start);
                }
                _ => {}
            }
            self.advance();
        }
    }

    fn parse_group_text(&mut self) -> String {
        let inner = self.parse_group();
        self.text(inner).trim().to_owned()
    }

    /// Consumes the current token if it can serve as a name.
    fn take_name(&mut self) -> Option<String> {
        let name = self.name_of(&self.current)?;
        self.advance();
        Some(name)
    }

    /// Returns the name a token spells. Keywords count as bare names here so
    /// that columns such as `key` or `action` parse.
    fn name_of(&self, token: &Token) -> Option<String> {
        match &token.kind {
            TokenKind::Keyword(_) => Some(self.text(token.span).to_owned()),
            _ => token.as_name().map(str::to_owned),
        }
    }

    fn text(&self, span: Span) -> &'a str {
        span.slice(self.source)
    }

    fn advance(&mut self) {
        let upcoming = self.lexer.next_token();
        let current = core::mem::replace(&mut self.next, upcoming);
        self.previous = core::mem::replace(&mut self.current, current);
    }

    fn check_keyword(&self, keyword: Keyword) -> bool {
        self.current.is_keyword(keyword)
    }

    fn consume_keyword(&mut self, keyword: Keyword) -> bool {
        if self.check_keyword(keyword) {
            self.advance();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(text: &str) -> ColumnDefinition {
        match parse_definition(text) {
            Definition::Column(column) => column,
            other => panic!("Expected column, got {other:?}"),
        }
    }

    #[test]
    fn test_not_null_default() {
        let id = column("`id` INTEGER NOT NULL DEFAULT 0");
        assert_eq!(id.name, "id");
        assert_eq!(id.type_name.as_deref(), Some("INTEGER"));
        assert!(!id.nullable);
        assert_eq!(id.default.as_deref(), Some("0"));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(column("a TEXT DEFAULT NULL").default, None);
        assert_eq!(column("a TEXT default null").default, None);
        assert_eq!(column("a TEXT DEFAULT 'x y'").default.as_deref(), Some("'x y'"));
        assert_eq!(column("a INT DEFAULT -1").default.as_deref(), Some("-1"));
        assert_eq!(
            column("a TEXT DEFAULT (datetime('now')) NOT NULL").default.as_deref(),
            Some("datetime('now')")
        );
        assert_eq!(
            column("a TEXT DEFAULT CURRENT_TIMESTAMP").default.as_deref(),
            Some("CURRENT_TIMESTAMP")
        );
        assert_eq!(column("a TEXT DEFAULT lower('X')").default.as_deref(), Some("lower('X')"));
    }

    #[test]
    fn test_default_with_doubled_quotes() {
        assert_eq!(
            column("n TEXT NOT NULL DEFAULT 'O''Brien'").default.as_deref(),
            Some("'O''Brien'")
        );
        let it = column("s TEXT DEFAULT 'it''s' NOT NULL");
        assert_eq!(it.default.as_deref(), Some("'it''s'"));
        assert!(!it.nullable);
        assert_eq!(
            column("s TEXT DEFAULT 'a' 'b'").default.as_deref(),
            Some("'a'")
        );
    }

    #[test]
    fn test_exponent_default() {
        assert_eq!(column("x REAL DEFAULT 1.5e-3").default.as_deref(), Some("1.5e-3"));
        assert_eq!(column("x REAL DEFAULT -2E+10").default.as_deref(), Some("-2E+10"));
    }

    #[test]
    fn test_column_named_constraint() {
        let plain = column("constraint TEXT");
        assert_eq!(plain.name, "constraint");
        assert_eq!(plain.type_name.as_deref(), Some("TEXT"));

        let not_null = column("`constraint` VARCHAR(10) NOT NULL");
        assert_eq!(not_null.name, "constraint");
        assert!(!not_null.nullable);

        assert_eq!(
            parse_definition("CONSTRAINT pk PRIMARY KEY (id)").constraint_name(),
            Some("pk")
        );
    }

    #[test]
    fn test_default_does_not_swallow_constraints() {
        let a = column("a INTEGER DEFAULT 1 NOT NULL UNIQUE");
        assert_eq!(a.default.as_deref(), Some("1"));
        assert!(!a.nullable);
        assert!(a.unique);
    }

    #[test]
    fn test_default_text_mentioning_keywords() {
        let note = column("note TEXT DEFAULT 'PRIMARY KEY NOT NULL'");
        assert!(!note.primary_key);
        assert!(note.nullable);
        assert_eq!(note.default.as_deref(), Some("'PRIMARY KEY NOT NULL'"));
    }

    #[test]
    fn test_type_forms() {
        assert_eq!(column("name VARCHAR(255)").type_name.as_deref(), Some("VARCHAR(255)"));
        assert_eq!(
            column("price DECIMAL (10, 2) NOT NULL").type_name.as_deref(),
            Some("DECIMAL (10, 2)")
        );
        assert_eq!(
            column("n UNSIGNED BIG INT").type_name.as_deref(),
            Some("UNSIGNED BIG INT")
        );
        assert_eq!(column("id PRIMARY KEY").type_name, None);
        assert_eq!(column("id").type_name, None);
    }

    #[test]
    fn test_primary_key_autoincrement() {
        let id = column("id INTEGER PRIMARY KEY DESC ON CONFLICT REPLACE AUTOINCREMENT");
        assert!(id.primary_key);
        assert!(id.auto_increment);
        assert!(id.nullable);
    }

    #[test]
    fn test_inline_constraints() {
        let email = column(
            "\"email\" TEXT CONSTRAINT email_nn NOT NULL COLLATE NOCASE CHECK (length(email) > 3)",
        );
        assert_eq!(email.name, "email");
        assert!(!email.nullable);
        assert_eq!(email.collation.as_deref(), Some("NOCASE"));
        assert_eq!(email.check.as_deref(), Some("length(email) > 3"));
    }

    #[test]
    fn test_inline_reference() {
        let user_id = column(
            "user_id INTEGER REFERENCES users(id) ON DELETE SET NULL ON UPDATE NO ACTION NOT NULL",
        );
        let reference = user_id.references.unwrap();
        assert_eq!(reference.table, "users");
        assert_eq!(reference.columns, vec!["id"]);
        assert_eq!(reference.on_delete, Some(ReferentialAction::SetNull));
        assert_eq!(reference.on_update, Some(ReferentialAction::NoAction));
        assert!(!user_id.nullable);
    }

    #[test]
    fn test_generated_columns() {
        let total = column("total INTEGER GENERATED ALWAYS AS (price * qty) STORED");
        assert_eq!(total.generated.as_deref(), Some("price * qty"));
        assert!(total.is_generated());
        assert!(total.stored);

        let short = column("lower_name TEXT AS (lower(name))");
        assert_eq!(short.generated.as_deref(), Some("lower(name)"));
        assert!(!short.stored);

        let computed = column("upper_name TEXT GENERATED ALWAYS AS (upper(name)) VIRTUAL");
        assert!(computed.is_generated());
        assert!(!computed.stored);
    }

    #[test]
    fn test_keyword_named_columns() {
        assert_eq!(column("key TEXT").name, "key");
        assert_eq!(column("check_at INTEGER").name, "check_at");
        let unique = column("unique TEXT");
        assert_eq!(unique.name, "unique");
        assert!(!unique.unique);
    }

    #[test]
    fn test_table_primary_key() {
        assert_eq!(
            parse_definition("PRIMARY KEY (`a`, b DESC)"),
            Definition::PrimaryKey(PrimaryKeyClause {
                columns: vec!["a".into(), "b".into()],
            })
        );
    }

    #[test]
    fn test_table_check() {
        assert_eq!(
            parse_definition("check (a > 0 AND (b < 1))"),
            Definition::Check(CheckClause {
                expression: "a > 0 AND (b < 1)".into(),
            })
        );
    }

    #[test]
    fn test_table_unique() {
        assert_eq!(
            parse_definition("UNIQUE (email, tenant_id)"),
            Definition::Unique(UniqueClause {
                columns: vec!["email".into(), "tenant_id".into()],
            })
        );
    }

    #[test]
    fn test_table_foreign_key() {
        let Definition::ForeignKey(clause) = parse_definition(
            "FOREIGN KEY (`user_id`, `org_id`) REFERENCES `users`(`id`, `org`) ON DELETE CASCADE",
        ) else {
            panic!("Expected foreign key");
        };
        assert_eq!(clause.columns, vec!["user_id", "org_id"]);
        assert_eq!(clause.reference.table, "users");
        assert_eq!(clause.reference.columns, vec!["id", "org"]);
        assert_eq!(clause.reference.on_delete, Some(ReferentialAction::Cascade));
        assert_eq!(clause.reference.on_update, None);
    }

    #[test]
    fn test_named_constraint() {
        let definition = parse_definition("CONSTRAINT `uq_name` UNIQUE(`name`)");
        assert_eq!(definition.constraint_name(), Some("uq_name"));
        assert_eq!(
            definition,
            Definition::Constraint(ConstraintClause {
                name: "uq_name".into(),
                body: ConstraintBody::Unique(UniqueClause {
                    columns: vec!["name".into()],
                }),
            })
        );
    }

    #[test]
    fn test_named_constraint_unknown_body() {
        let definition = parse_definition("CONSTRAINT c EXCLUDE USING gist (a WITH =)");
        assert_eq!(
            definition,
            Definition::Constraint(ConstraintClause {
                name: "c".into(),
                body: ConstraintBody::Other,
            })
        );
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(parse_definition(""), Definition::Unrecognized);
        assert_eq!(parse_definition("42 INTEGER"), Definition::Unrecognized);
        assert_eq!(parse_definition("FOREIGN KEY (a)"), Definition::Unrecognized);
    }
}
