//! # oxide-ddl-core
//!
//! Parse, edit and recompile SQL `CREATE TABLE` statements.
//!
//! Engines such as SQLite only support a handful of `ALTER TABLE`
//! operations. A migration that needs anything else rebuilds the table: it
//! takes the original `CREATE TABLE` statement from the schema catalog,
//! edits it, and runs the edited statement against a fresh table. This
//! crate is the middle step.
//!
//! - A statement parser that splits the table body on top-level commas,
//!   whatever the nesting of type arguments, `CHECK` and `DEFAULT`
//!   expressions or foreign key clauses, and whatever the quoting style
//! - A definition parser that classifies each entry as a column or a table
//!   constraint and extracts column descriptors
//! - An editable model whose untouched entries recompile byte for byte
//!
//! ## Example
//!
//! ```rust
//! use oxide_ddl_core::parse_ddl;
//!
//! let mut ddl = parse_ddl([
//!     "CREATE TABLE `users` (`id` INTEGER PRIMARY KEY, `name` TEXT NOT NULL, \
//!      `price` DECIMAL(10,2), CONSTRAINT `uq_name` UNIQUE(`name`))",
//!     "CREATE INDEX `idx_name` ON `users`(`name`)",
//! ])
//! .unwrap();
//!
//! assert_eq!(ddl.column_names(), vec!["`id`", "`name`", "`price`"]);
//!
//! ddl.rename_table("users__temp", "users").unwrap();
//! ddl.remove_constraint("uq_name");
//! ddl.remove_column("price");
//!
//! assert_eq!(
//!     ddl.compile(),
//!     "CREATE TABLE `users__temp` (`id` INTEGER PRIMARY KEY,`name` TEXT NOT NULL)"
//! );
//! ```

pub mod ast;
pub mod ddl;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{ColumnDefinition, ColumnType, Definition};
pub use ddl::{Ddl, Field, parse_ddl};
pub use error::{DdlError, Result};
pub use parser::{DefinitionParser, StatementParser};
