//! Table entry definitions.

use core::fmt;

/// What a single top-level entry of a table body defines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Definition {
    /// A column definition.
    Column(ColumnDefinition),
    /// An unnamed `PRIMARY KEY (...)` clause.
    PrimaryKey(PrimaryKeyClause),
    /// An unnamed `CHECK (...)` clause.
    Check(CheckClause),
    /// An unnamed `UNIQUE (...)` clause.
    Unique(UniqueClause),
    /// An unnamed `FOREIGN KEY (...) REFERENCES ...` clause.
    ForeignKey(ForeignKeyClause),
    /// A `CONSTRAINT name ...` clause.
    Constraint(ConstraintClause),
    /// An entry that could not be classified.
    Unrecognized,
}

impl Definition {
    /// Returns the column definition, if this is one.
    #[must_use]
    pub const fn as_column(&self) -> Option<&ColumnDefinition> {
        match self {
            Self::Column(column) => Some(column),
            _ => None,
        }
    }

    /// Returns the constraint name, if this is a named constraint.
    #[must_use]
    pub fn constraint_name(&self) -> Option<&str> {
        match self {
            Self::Constraint(clause) => Some(&clause.name),
            _ => None,
        }
    }

    /// Returns true for table-level clauses, named or not.
    #[must_use]
    pub const fn is_clause(&self) -> bool {
        matches!(
            self,
            Self::PrimaryKey(_)
                | Self::Check(_)
                | Self::Unique(_)
                | Self::ForeignKey(_)
                | Self::Constraint(_)
        )
    }
}

/// A column definition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnDefinition {
    /// Column name, unquoted.
    pub name: String,
    /// Declared type as written, e.g. `VARCHAR(255)`.
    pub type_name: Option<String>,
    /// False when `NOT NULL` is declared.
    pub nullable: bool,
    /// Whether `UNIQUE` is declared.
    pub unique: bool,
    /// Whether `PRIMARY KEY` is declared.
    pub primary_key: bool,
    /// Whether `AUTOINCREMENT` is declared.
    pub auto_increment: bool,
    /// Default expression; `None` for no default or `DEFAULT NULL`.
    pub default: Option<String>,
    /// Inline `CHECK` expression.
    pub check: Option<String>,
    /// `COLLATE` sequence name.
    pub collation: Option<String>,
    /// Inline `REFERENCES` clause.
    pub references: Option<ForeignKeyReference>,
    /// Expression of a generated (computed) column.
    pub generated: Option<String>,
    /// Whether a generated column is `STORED` rather than `VIRTUAL`.
    pub stored: bool,
}

impl ColumnDefinition {
    /// Creates a nullable, untyped column definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nullable: true,
            ..Self::default()
        }
    }

    /// Returns true for generated columns, which cannot be copied into.
    #[must_use]
    pub const fn is_generated(&self) -> bool {
        self.generated.is_some()
    }
}

/// `PRIMARY KEY (columns)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryKeyClause {
    /// Key columns, unquoted, in key order.
    pub columns: Vec<String>,
}

/// `UNIQUE (columns)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueClause {
    /// Constrained columns, unquoted.
    pub columns: Vec<String>,
}

/// `CHECK (expression)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckClause {
    /// The expression between the outer parentheses, as written.
    pub expression: String,
}

/// `FOREIGN KEY (columns) REFERENCES ...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyClause {
    /// Local columns, unquoted.
    pub columns: Vec<String>,
    /// The referenced table and columns.
    pub reference: ForeignKeyReference,
}

/// The `REFERENCES table (columns) ON ...` part of a foreign key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyReference {
    /// Referenced table, unquoted.
    pub table: String,
    /// Referenced columns, unquoted; empty means the primary key.
    pub columns: Vec<String>,
    /// Action on delete.
    pub on_delete: Option<ReferentialAction>,
    /// Action on update.
    pub on_update: Option<ReferentialAction>,
}

/// Foreign key referential action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferentialAction {
    /// NO ACTION.
    NoAction,
    /// RESTRICT.
    Restrict,
    /// CASCADE.
    Cascade,
    /// SET NULL.
    SetNull,
    /// SET DEFAULT.
    SetDefault,
}

impl ReferentialAction {
    /// Returns the SQL spelling of the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoAction => "NO ACTION",
            Self::Restrict => "RESTRICT",
            Self::Cascade => "CASCADE",
            Self::SetNull => "SET NULL",
            Self::SetDefault => "SET DEFAULT",
        }
    }
}

impl fmt::Display for ReferentialAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `CONSTRAINT name <body>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintClause {
    /// Constraint name, unquoted.
    pub name: String,
    /// What the constraint enforces.
    pub body: ConstraintBody,
}

/// The body of a named table constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintBody {
    /// `PRIMARY KEY (...)`.
    PrimaryKey(PrimaryKeyClause),
    /// `UNIQUE (...)`.
    Unique(UniqueClause),
    /// `CHECK (...)`.
    Check(CheckClause),
    /// `FOREIGN KEY (...) REFERENCES ...`.
    ForeignKey(ForeignKeyClause),
    /// Anything else following the name.
    Other,
}
