//! Structured view of table entries.

mod column;
mod definition;

pub use column::ColumnType;
pub use definition::{
    CheckClause, ColumnDefinition, ConstraintBody, ConstraintClause, Definition,
    ForeignKeyClause, ForeignKeyReference, PrimaryKeyClause, ReferentialAction, UniqueClause,
};
