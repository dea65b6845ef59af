//! Command-line front end for `oxide-ddl-core`.
//!
//! `oxide-ddl` reads a table's DDL as stored in the schema catalog, applies
//! the requested edits, and prints the statement a rebuild-based migration
//! should run.
//!
//! # CLI Usage
//!
//! ```bash
//! # Recompile a table definition
//! sqlite3 app.db ".schema users" | oxide-ddl compile
//!
//! # Show column descriptors
//! oxide-ddl --input users.sql columns --json
//!
//! # Build the statement for a rebuilt table
//! oxide-ddl --input users.sql rewrite \
//!     --rename-table users__temp \
//!     --drop-column legacy \
//!     --add-constraint 'uq_email=CONSTRAINT `uq_email` UNIQUE (`email`)'
//! ```

pub mod cli;
pub mod edit;
pub mod input;

pub use cli::{Cli, Commands, RewriteArgs};
pub use edit::{Edit, Outcome, apply_all};
pub use input::{load_ddl, read_source};
