//! DDL parsing.
//!
//! [`StatementParser`] splits a `CREATE TABLE` statement into its table name
//! and top-level entries; [`DefinitionParser`] reads each entry into a
//! [`Definition`](crate::ast::Definition).

mod definition;
mod statement;

pub use definition::{DefinitionParser, parse_definition};
pub use statement::{StatementKind, StatementParser, classify_statement, split_statements};
