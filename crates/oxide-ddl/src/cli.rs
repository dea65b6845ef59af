//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::edit::Edit;

/// Rewrite CREATE TABLE statements for rebuild-based migrations.
#[derive(Debug, Parser)]
#[command(name = "oxide-ddl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File holding the table's DDL statements (stdin if not specified).
    #[arg(short, long, env = "OXIDE_DDL_INPUT", global = true)]
    pub input: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse the statement and print it recompiled.
    Compile,

    /// Show the table's column descriptors.
    Columns {
        /// Print descriptors as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Apply edits and print the rewritten statement.
    Rewrite(RewriteArgs),
}

/// Edits for the `rewrite` command.
///
/// Edits run in a fixed order: rename, drop constraints, drop columns,
/// alter columns, add columns, add constraints.
#[derive(Debug, Default, Args)]
pub struct RewriteArgs {
    /// New table name.
    #[arg(long, value_name = "NAME")]
    pub rename_table: Option<String>,

    /// Constraint to remove.
    #[arg(long, value_name = "NAME")]
    pub drop_constraint: Vec<String>,

    /// Column to remove.
    #[arg(long, value_name = "NAME")]
    pub drop_column: Vec<String>,

    /// Column to redefine, as NAME=SQL.
    #[arg(long, value_name = "NAME=SQL", value_parser = parse_named)]
    pub alter_column: Vec<(String, String)>,

    /// Column definition to add.
    #[arg(long, value_name = "SQL")]
    pub add_column: Vec<String>,

    /// Constraint to add or replace, as NAME=SQL.
    #[arg(long, value_name = "NAME=SQL", value_parser = parse_named)]
    pub add_constraint: Vec<(String, String)>,
}

impl RewriteArgs {
    /// Returns the requested edits in application order.
    #[must_use]
    pub fn edits(&self) -> Vec<Edit> {
        let mut edits = Vec::new();
        edits.extend(self.rename_table.iter().cloned().map(Edit::RenameTable));
        edits.extend(self.drop_constraint.iter().cloned().map(Edit::DropConstraint));
        edits.extend(self.drop_column.iter().cloned().map(Edit::DropColumn));
        edits.extend(
            self.alter_column
                .iter()
                .cloned()
                .map(|(name, sql)| Edit::AlterColumn { name, sql }),
        );
        edits.extend(self.add_column.iter().cloned().map(Edit::AddColumn));
        edits.extend(
            self.add_constraint
                .iter()
                .cloned()
                .map(|(name, sql)| Edit::AddConstraint { name, sql }),
        );
        edits
    }
}

/// Parses `NAME=SQL`, splitting on the first `=`.
fn parse_named(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((name, sql)) if !name.trim().is_empty() && !sql.trim().is_empty() => {
            Ok((name.trim().to_owned(), sql.trim().to_owned()))
        }
        _ => Err(format!("expected NAME=SQL, got '{value}'")),
    }
}
