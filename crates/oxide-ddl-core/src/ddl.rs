//! Editable table definition.
//!
//! A [`Ddl`] holds the canonical `` CREATE TABLE `name` `` head and the
//! table body entries as written. Edits operate on the entries and
//! [`Ddl::compile`] joins them back into a statement, so entries that are
//! not touched come out exactly as they went in.

use core::fmt;
use core::str::FromStr;
use std::cell::OnceCell;

use tracing::{debug, trace};

use crate::ast::{ColumnType, Definition};
use crate::error::{DdlError, Result};
use crate::lexer::Lexer;
use crate::parser::{StatementKind, StatementParser, classify_statement, parse_definition};

/// One top-level entry of a table body: its trimmed text and what it
/// defines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    text: String,
    definition: Definition,
}

impl Field {
    /// Parses an entry from its text.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        let definition = parse_definition(text);
        trace!(field = %text, ?definition, "Classified table entry");
        Self {
            text: text.to_owned(),
            definition,
        }
    }

    /// Returns the entry text as it will be compiled.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns what the entry defines.
    #[must_use]
    pub const fn definition(&self) -> &Definition {
        &self.definition
    }

    /// Returns the column name if the entry is a column definition.
    #[must_use]
    pub fn column_name(&self) -> Option<&str> {
        self.definition.as_column().map(|column| column.name.as_str())
    }

    /// Returns the constraint name if the entry is a `CONSTRAINT` clause.
    #[must_use]
    pub fn constraint_name(&self) -> Option<&str> {
        self.definition.constraint_name()
    }

    /// Returns true if the entry holds a single token, e.g. `` `a` ``.
    fn is_bare_name(&self) -> bool {
        // the name plus the end-of-input token
        Lexer::new(&self.text).tokenize().len() <= 2
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A parsed `CREATE TABLE` statement that can be edited and recompiled.
///
/// Cloning yields an independent copy, so a caller can try edits on a clone
/// and fall back to the original.
#[derive(Debug, Clone)]
pub struct Ddl {
    head: String,
    table: String,
    fields: Vec<Field>,
    /// Column descriptors, derived on first access after each edit.
    columns: OnceCell<Vec<ColumnType>>,
}

impl Ddl {
    /// Creates a definition for `table` with an empty body.
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        let table = table.into();
        Self {
            head: format!("CREATE TABLE `{table}`"),
            table,
            fields: Vec::new(),
            columns: OnceCell::new(),
        }
    }

    /// Parses a single `CREATE TABLE` statement.
    ///
    /// # Errors
    ///
    /// See [`parse_ddl`].
    pub fn parse(sql: &str) -> Result<Self> {
        parse_ddl([sql])
    }

    fn from_create_table(sql: &str) -> Result<Self> {
        let mut parser = StatementParser::new(sql);
        let mut ddl = Self::new(parser.parse_table_name()?);
        ddl.fields = parser
            .parse_table_fields()?
            .iter()
            .map(|text| Field::parse(text))
            .collect();
        Ok(ddl)
    }

    /// Returns the `` CREATE TABLE `name` `` head.
    #[must_use]
    pub fn head(&self) -> &str {
        &self.head
    }

    /// Returns the table name.
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// Returns the body entries in order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns descriptors for the column entries, in entry order.
    ///
    /// An entry made of the column name alone gets no descriptor. The
    /// descriptors always reflect the current entries.
    #[must_use]
    pub fn columns(&self) -> &[ColumnType] {
        self.columns.get_or_init(|| {
            self.fields
                .iter()
                .filter(|field| !field.is_bare_name())
                .filter_map(|field| field.definition.as_column())
                .map(ColumnType::from_definition)
                .collect()
        })
    }

    /// Returns the statement text: the head followed by the entries joined
    /// with commas, or the head alone if there are no entries.
    #[must_use]
    pub fn compile(&self) -> String {
        if self.fields.is_empty() {
            return self.head.clone();
        }
        let body: Vec<&str> = self.fields.iter().map(Field::text).collect();
        format!("{} ({})", self.head, body.join(","))
    }

    /// Renames the table from `old` to `new`.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::RenameTargetNotFound`] if `` `old` `` does not
    /// appear in the head.
    pub fn rename_table(&mut self, new: &str, old: &str) -> Result<()> {
        let from = format!("`{old}`");
        if !self.head.contains(&from) {
            return Err(DdlError::RenameTargetNotFound {
                table: old.to_owned(),
                head: self.head.clone(),
            });
        }
        self.head = self.head.replacen(&from, &format!("`{new}`"), 1);
        new.clone_into(&mut self.table);
        debug!(from = %old, to = %new, "Renamed table");
        Ok(())
    }

    /// Adds the constraint `name`, or replaces the existing `CONSTRAINT`
    /// entry with that exact name.
    pub fn add_constraint(&mut self, name: &str, sql: &str) {
        let field = Field::parse(sql);
        if let Some(index) = self.constraint_index(name) {
            debug!(constraint = %name, "Replacing constraint");
            self.fields[index] = field;
        } else {
            debug!(constraint = %name, "Adding constraint");
            self.fields.push(field);
        }
        self.invalidate();
    }

    /// Removes the `CONSTRAINT` entry named `name`.
    ///
    /// Returns false if there is none.
    pub fn remove_constraint(&mut self, name: &str) -> bool {
        let Some(index) = self.constraint_index(name) else {
            return false;
        };
        self.fields.remove(index);
        self.invalidate();
        debug!(constraint = %name, "Removed constraint");
        true
    }

    /// Returns true if a `CONSTRAINT` entry is named `name`.
    #[must_use]
    pub fn has_constraint(&self, name: &str) -> bool {
        self.constraint_index(name).is_some()
    }

    /// Returns the backtick-quoted names of the columns that can be copied
    /// into, i.e. every column except generated ones.
    #[must_use]
    pub fn column_names(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter_map(|field| field.definition.as_column())
            .filter(|column| !column.is_generated())
            .map(|column| format!("`{}`", column.name))
            .collect()
    }

    /// Appends a column definition after the last column entry, ahead of
    /// any table constraints.
    pub fn add_column(&mut self, sql: &str) {
        let index = self
            .fields
            .iter()
            .rposition(|field| field.column_name().is_some())
            .map_or(0, |last| last + 1);
        let field = Field::parse(sql);
        debug!(column = ?field.column_name(), index, "Adding column");
        self.fields.insert(index, field);
        self.invalidate();
    }

    /// Replaces the definition of column `name` with `sql`.
    ///
    /// Returns false if there is no such column.
    pub fn alter_column(&mut self, name: &str, sql: &str) -> bool {
        let Some(index) = self.column_index(name) else {
            return false;
        };
        self.fields[index] = Field::parse(sql);
        self.invalidate();
        debug!(column = %name, "Altered column");
        true
    }

    /// Removes column `name`.
    ///
    /// Returns false if there is no such column.
    pub fn remove_column(&mut self, name: &str) -> bool {
        let Some(index) = self.column_index(name) else {
            return false;
        };
        self.fields.remove(index);
        self.invalidate();
        debug!(column = %name, "Removed column");
        true
    }

    fn constraint_index(&self, name: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|field| field.constraint_name() == Some(name))
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|field| field.column_name() == Some(name))
    }

    fn invalidate(&mut self) {
        self.columns.take();
    }
}

impl PartialEq for Ddl {
    fn eq(&self, other: &Self) -> bool {
        self.head == other.head && self.fields == other.fields
    }
}

impl Eq for Ddl {}

impl fmt::Display for Ddl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.compile())
    }
}

impl FromStr for Ddl {
    type Err = DdlError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Builds a [`Ddl`] from the statements a schema catalog holds for one
/// table.
///
/// Exactly one statement must be a `CREATE TABLE`; `CREATE INDEX`
/// statements are skipped.
///
/// # Errors
///
/// Returns [`DdlError::InvalidDdl`] for any other statement,
/// [`DdlError::MultipleTables`] for a second `CREATE TABLE`,
/// [`DdlError::MissingCreateTable`] if there is none, and the parse errors
/// of [`StatementParser`].
pub fn parse_ddl<I>(statements: I) -> Result<Ddl>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut result: Option<Ddl> = None;

    for statement in statements {
        let sql = statement.as_ref();
        match classify_statement(sql) {
            StatementKind::CreateTable => {
                let ddl = Ddl::from_create_table(sql)?;
                if let Some(first) = &result {
                    return Err(DdlError::MultipleTables {
                        first: first.table.clone(),
                        second: ddl.table,
                    });
                }
                debug!(table = %ddl.table, fields = ddl.fields.len(), "Parsed CREATE TABLE");
                result = Some(ddl);
            }
            StatementKind::CreateIndex => {
                debug!(statement = %sql, "Skipping CREATE INDEX");
            }
            StatementKind::Other => return Err(DdlError::InvalidDdl(sql.trim().to_owned())),
        }
    }

    result.ok_or(DdlError::MissingCreateTable)
}

#[cfg(test)]
mod tests {
    use super::*;

    const USERS: &str = "CREATE TABLE `users` (`id` INTEGER PRIMARY KEY, `name` TEXT NOT NULL, \
                         CONSTRAINT `uq_name` UNIQUE(`name`))";

    #[test]
    fn test_new_is_empty() {
        let ddl = Ddl::new("t");
        assert_eq!(ddl.compile(), "CREATE TABLE `t`");
        assert!(ddl.columns().is_empty());
    }

    #[test]
    fn test_compile() {
        let ddl = Ddl::parse(USERS).unwrap();
        assert_eq!(
            ddl.compile(),
            "CREATE TABLE `users` (`id` INTEGER PRIMARY KEY,`name` TEXT NOT NULL,\
             CONSTRAINT `uq_name` UNIQUE(`name`))"
        );
        assert_eq!(ddl.to_string(), ddl.compile());
    }

    #[test]
    fn test_from_str() {
        let ddl: Ddl = USERS.parse().unwrap();
        assert_eq!(ddl.table_name(), "users");
        assert_eq!(ddl.head(), "CREATE TABLE `users`");
    }

    #[test]
    fn test_columns_follow_edits() {
        let mut ddl = Ddl::parse(USERS).unwrap();
        assert_eq!(ddl.columns().len(), 2);

        assert!(ddl.remove_column("name"));
        let names: Vec<&str> = ddl.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["id"]);

        ddl.add_column("`email` VARCHAR(255) UNIQUE");
        assert_eq!(ddl.columns().len(), 2);
        assert_eq!(ddl.columns()[1].length, Some(255));
    }

    #[test]
    fn test_add_column_goes_before_constraints() {
        let mut ddl = Ddl::parse(USERS).unwrap();
        ddl.add_column("`age` INTEGER");
        let texts: Vec<&str> = ddl.fields().iter().map(Field::text).collect();
        assert_eq!(
            texts,
            vec![
                "`id` INTEGER PRIMARY KEY",
                "`name` TEXT NOT NULL",
                "`age` INTEGER",
                "CONSTRAINT `uq_name` UNIQUE(`name`)",
            ]
        );
    }

    #[test]
    fn test_untyped_columns() {
        let ddl = Ddl::parse("CREATE TABLE `t` (`id` PRIMARY KEY, `tag`, `name` TEXT)").unwrap();
        let names: Vec<&str> = ddl.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["id", "name"]);
        assert!(ddl.columns()[0].primary_key);
        assert_eq!(ddl.columns()[0].data_type, "");
        assert_eq!(ddl.column_names(), vec!["`id`", "`tag`", "`name`"]);
    }

    #[test]
    fn test_alter_column() {
        let mut ddl = Ddl::parse(USERS).unwrap();
        assert!(ddl.alter_column("name", "`name` VARCHAR(64)"));
        assert!(!ddl.alter_column("ghost", "`ghost` TEXT"));
        let name = &ddl.columns()[1];
        assert_eq!(name.data_type, "VARCHAR");
        assert!(name.nullable);
    }

    #[test]
    fn test_rename_updates_table_name() {
        let mut ddl = Ddl::parse(USERS).unwrap();
        ddl.rename_table("accounts", "users").unwrap();
        assert_eq!(ddl.table_name(), "accounts");
        assert_eq!(ddl.head(), "CREATE TABLE `accounts`");
    }

    #[test]
    fn test_equality_ignores_cache() {
        let ddl = Ddl::parse(USERS).unwrap();
        let copy = ddl.clone();
        let _ = ddl.columns();
        assert_eq!(ddl, copy);
    }
}
