//! Tests for error cases.

mod common;
use common::*;

use oxide_ddl_core::{DdlError, parse_ddl};

#[test]
fn error_unterminated_table_name() {
    assert_eq!(
        parse_err("CREATE TABLE `users (id INTEGER)"),
        DdlError::UnterminatedString { position: 13 }
    );
}

#[test]
fn error_unterminated_string_in_body() {
    assert!(matches!(
        parse_err("CREATE TABLE `t` (a TEXT DEFAULT 'oops)"),
        DdlError::UnterminatedString { .. }
    ));
}

#[test]
fn error_unterminated_body() {
    assert_eq!(
        parse_err("CREATE TABLE `t` (`a` DECIMAL(10,2), `b` TEXT"),
        DdlError::UnterminatedTableDefinition { depth: 1 }
    );
    assert_eq!(
        parse_err("CREATE TABLE `t` (`a` DECIMAL(10,2"),
        DdlError::UnterminatedTableDefinition { depth: 2 }
    );
}

#[test]
fn error_missing_table_name() {
    assert_eq!(parse_err("CREATE TABLE (a INT)"), DdlError::MissingTableName);
    assert_eq!(parse_err("CREATE TABLE "), DdlError::MissingTableName);
}

#[test]
fn error_missing_body() {
    assert_eq!(
        parse_err("CREATE TABLE `t` AS SELECT 1"),
        DdlError::MissingTableBody
    );
}

#[test]
fn error_invalid_ddl() {
    assert_eq!(
        parse_err("DROP TABLE `users`"),
        DdlError::InvalidDdl("DROP TABLE `users`".into())
    );
    assert!(matches!(
        parse_ddl([USERS, "CREATE VIEW v AS SELECT 1"]),
        Err(DdlError::InvalidDdl(_))
    ));
}

#[test]
fn index_statements_are_skipped() {
    let ddl = parse_all(&[
        "CREATE INDEX `idx_name` ON `users`(`name`)",
        USERS,
        "create unique index `idx_id` on `users`(`id`)",
    ]);
    assert_eq!(ddl.table_name(), "users");
    assert_eq!(ddl.fields().len(), 3);
}

#[test]
fn error_multiple_tables() {
    assert_eq!(
        parse_ddl([USERS, "CREATE TABLE `other` (a INT)"]).unwrap_err(),
        DdlError::MultipleTables {
            first: "users".into(),
            second: "other".into(),
        }
    );
}

#[test]
fn error_no_table() {
    assert_eq!(
        parse_ddl(["CREATE INDEX i ON t(a)"]).unwrap_err(),
        DdlError::MissingCreateTable
    );
    assert_eq!(
        parse_ddl(Vec::<String>::new()).unwrap_err(),
        DdlError::MissingCreateTable
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        DdlError::UnterminatedTableDefinition { depth: 1 }.to_string(),
        "Unterminated table definition: 1 unclosed parenthesis"
    );
    assert_eq!(
        DdlError::RenameTargetNotFound {
            table: "a".into(),
            head: "CREATE TABLE `b`".into(),
        }
        .to_string(),
        "Failed to look up table name `a` from DDL head 'CREATE TABLE `b`'"
    );
}
