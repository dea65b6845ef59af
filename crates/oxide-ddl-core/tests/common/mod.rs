#![allow(dead_code)]

use oxide_ddl_core::{Ddl, DdlError, parse_ddl};

pub const USERS: &str = "CREATE TABLE `users` (`id` INTEGER PRIMARY KEY, `name` TEXT NOT NULL, \
                         CONSTRAINT `uq_name` UNIQUE(`name`))";

pub fn parse(sql: &str) -> Ddl {
    Ddl::parse(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> DdlError {
    Ddl::parse(sql).expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_all(statements: &[&str]) -> Ddl {
    parse_ddl(statements).unwrap_or_else(|e| panic!("Failed to parse: {statements:?}\nError: {e:?}"))
}

pub fn field_texts(ddl: &Ddl) -> Vec<&str> {
    ddl.fields().iter().map(|f| f.text()).collect()
}
