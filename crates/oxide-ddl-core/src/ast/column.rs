//! Column descriptors derived from column definitions.

use serde::{Deserialize, Serialize};

use super::ColumnDefinition;

/// Summary of one column, as consumed by schema comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnType {
    /// Column name, unquoted.
    pub name: String,
    /// Base type with any parenthesized part removed, e.g. `VARCHAR`.
    /// Empty for a column declared without a type.
    pub data_type: String,
    /// Type as written, e.g. `VARCHAR(255)`, or empty.
    pub column_type: String,
    /// Length from a single integer argument, e.g. `255`.
    pub length: Option<i64>,
    /// Precision from a `(precision, scale)` argument pair.
    pub precision: Option<i64>,
    /// Scale from a `(precision, scale)` argument pair.
    pub scale: Option<i64>,
    /// False when `NOT NULL` is declared.
    pub nullable: bool,
    /// Whether `UNIQUE` is declared.
    pub unique: bool,
    /// Whether `PRIMARY KEY` is declared.
    pub primary_key: bool,
    /// Default expression, absent for `DEFAULT NULL`.
    pub default_value: Option<String>,
}

impl ColumnType {
    /// Builds the descriptor for a column definition.
    ///
    /// A column declared without a type gets empty `data_type` and
    /// `column_type`.
    #[must_use]
    pub fn from_definition(column: &ColumnDefinition) -> Self {
        let column_type = column.type_name.clone().unwrap_or_default();
        let mut descriptor = Self {
            name: column.name.clone(),
            data_type: column_type.clone(),
            column_type,
            length: None,
            precision: None,
            scale: None,
            nullable: column.nullable,
            unique: column.unique,
            primary_key: column.primary_key,
            default_value: column.default.clone(),
        };

        if let Some((base, args)) = descriptor.column_type.split_once('(') {
            let args = args.trim_end().trim_end_matches(')');
            descriptor.data_type = base.trim_end().to_owned();
            if let Ok(length) = args.trim().parse::<i64>() {
                descriptor.length = Some(length);
            } else if let Some((precision, scale)) = args.split_once(',') {
                if let (Ok(p), Ok(s)) = (precision.trim().parse(), scale.trim().parse()) {
                    descriptor.precision = Some(p);
                    descriptor.scale = Some(s);
                }
            }
        }

        descriptor
    }
}
