//! Edits applied to a parsed table definition.

use oxide_ddl_core::{Ddl, Result};
use tracing::{debug, warn};

/// A structural change to a table definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Rename the table.
    RenameTable(String),
    /// Remove a named constraint.
    DropConstraint(String),
    /// Remove a column.
    DropColumn(String),
    /// Replace a column definition.
    AlterColumn {
        /// Column to replace.
        name: String,
        /// New column definition.
        sql: String,
    },
    /// Add a column definition.
    AddColumn(String),
    /// Add or replace a named constraint.
    AddConstraint {
        /// Constraint name.
        name: String,
        /// Full `CONSTRAINT ...` clause.
        sql: String,
    },
}

/// Whether an edit changed the definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The definition changed.
    Applied,
    /// There was nothing to change.
    Unchanged,
}

impl From<bool> for Outcome {
    fn from(changed: bool) -> Self {
        if changed { Self::Applied } else { Self::Unchanged }
    }
}

impl Edit {
    /// Applies the edit to `ddl`.
    ///
    /// # Errors
    ///
    /// Fails only when renaming a table whose name is missing from the head.
    pub fn apply(&self, ddl: &mut Ddl) -> Result<Outcome> {
        let outcome = match self {
            Self::RenameTable(new) => {
                let old = ddl.table_name().to_owned();
                ddl.rename_table(new, &old)?;
                Outcome::Applied
            }
            Self::DropConstraint(name) => ddl.remove_constraint(name).into(),
            Self::DropColumn(name) => ddl.remove_column(name).into(),
            Self::AlterColumn { name, sql } => ddl.alter_column(name, sql).into(),
            Self::AddColumn(sql) => {
                ddl.add_column(sql);
                Outcome::Applied
            }
            Self::AddConstraint { name, sql } => {
                ddl.add_constraint(name, sql);
                Outcome::Applied
            }
        };
        Ok(outcome)
    }
}

/// Applies `edits` in order, logging the ones that changed nothing.
///
/// # Errors
///
/// Stops at the first edit that fails.
pub fn apply_all(ddl: &mut Ddl, edits: &[Edit]) -> Result<Vec<Outcome>> {
    let mut outcomes = Vec::with_capacity(edits.len());
    for edit in edits {
        let outcome = edit.apply(ddl)?;
        match outcome {
            Outcome::Applied => debug!(?edit, "Applied edit"),
            Outcome::Unchanged => warn!(?edit, "Edit had nothing to change"),
        }
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDERS: &str = "CREATE TABLE `orders` (`id` INTEGER PRIMARY KEY, `total` REAL, \
                          `legacy` TEXT, CONSTRAINT `chk_total` CHECK (`total` >= 0))";

    #[test]
    fn test_apply_all() {
        let mut ddl = Ddl::parse(ORDERS).unwrap();
        let outcomes = apply_all(
            &mut ddl,
            &[
                Edit::RenameTable("orders__temp".into()),
                Edit::DropConstraint("chk_total".into()),
                Edit::DropColumn("legacy".into()),
                Edit::AlterColumn {
                    name: "total".into(),
                    sql: "`total` DECIMAL(10,2) NOT NULL".into(),
                },
                Edit::AddColumn("`note` TEXT".into()),
                Edit::AddConstraint {
                    name: "chk_total".into(),
                    sql: "CONSTRAINT `chk_total` CHECK (`total` > 0)".into(),
                },
            ],
        )
        .unwrap();

        assert!(outcomes.iter().all(|o| *o == Outcome::Applied));
        assert_eq!(
            ddl.compile(),
            "CREATE TABLE `orders__temp` (`id` INTEGER PRIMARY KEY,\
             `total` DECIMAL(10,2) NOT NULL,`note` TEXT,\
             CONSTRAINT `chk_total` CHECK (`total` > 0))"
        );
    }

    #[test]
    fn test_unchanged_edits() {
        let mut ddl = Ddl::parse(ORDERS).unwrap();
        let before = ddl.compile();
        let outcomes = apply_all(
            &mut ddl,
            &[
                Edit::DropColumn("ghost".into()),
                Edit::DropConstraint("chk".into()),
                Edit::AlterColumn {
                    name: "ghost".into(),
                    sql: "`ghost` TEXT".into(),
                },
            ],
        )
        .unwrap();
        assert_eq!(outcomes, vec![Outcome::Unchanged; 3]);
        assert_eq!(ddl.compile(), before);
    }
}
