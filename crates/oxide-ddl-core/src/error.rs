//! Error types for DDL parsing and editing.

/// Errors that can occur while parsing or editing a table definition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DdlError {
    /// A quoted literal was not closed before the end of input.
    #[error("Unterminated string starting at position {position}")]
    UnterminatedString {
        /// Byte offset of the opening quote.
        position: usize,
    },

    /// The table body parentheses never returned to depth zero.
    #[error("Unterminated table definition: {depth} unclosed parenthesis")]
    UnterminatedTableDefinition {
        /// Nesting depth when the input ran out.
        depth: usize,
    },

    /// No table name was found before the table body or the end of input.
    #[error("Missing table name in CREATE TABLE statement")]
    MissingTableName,

    /// No opening parenthesis was found after the table name.
    #[error("Missing table body in CREATE TABLE statement")]
    MissingTableBody,

    /// The statement is neither `CREATE TABLE` nor `CREATE INDEX`.
    #[error("Invalid DDL: {0}")]
    InvalidDdl(String),

    /// More than one `CREATE TABLE` statement was supplied in one call.
    #[error("Multiple CREATE TABLE statements: `{first}` and `{second}`")]
    MultipleTables {
        /// Table defined by the first statement.
        first: String,
        /// Table defined by the second statement.
        second: String,
    },

    /// None of the supplied statements defines a table.
    #[error("No CREATE TABLE statement supplied")]
    MissingCreateTable,

    /// The table to rename is not present in the DDL head.
    #[error("Failed to look up table name `{table}` from DDL head '{head}'")]
    RenameTargetNotFound {
        /// Name that was looked up.
        table: String,
        /// Head the lookup ran against.
        head: String,
    },
}

/// Result type for DDL operations.
pub type Result<T> = std::result::Result<T, DdlError>;
