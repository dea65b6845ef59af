//! Reading table definitions from files or stdin.

use std::io::{self, Read};
use std::path::Path;

use oxide_ddl_core::parser::split_statements;
use oxide_ddl_core::{Ddl, Result, parse_ddl};

/// Reads the whole of `path`, or stdin when no path is given.
///
/// # Errors
///
/// Returns any I/O error from reading the source.
pub fn read_source(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

/// Parses a `;`-separated script holding one `CREATE TABLE` and any number
/// of `CREATE INDEX` statements, as dumped from a schema catalog.
///
/// # Errors
///
/// Returns the parse errors of [`parse_ddl`].
pub fn load_ddl(script: &str) -> Result<Ddl> {
    parse_ddl(split_statements(script)?)
}
