//! oxide-ddl CLI
//!
//! Command-line tool for rewriting table definitions.

use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use oxide_ddl::{Cli, Commands, apply_all, load_ddl, read_source};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let source = read_source(cli.input.as_deref())?;
    let mut ddl = load_ddl(&source)?;

    match cli.command {
        Commands::Compile => {
            println!("{}", ddl.compile());
        }

        Commands::Columns { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(ddl.columns())?);
            } else if ddl.columns().is_empty() {
                info!("Table `{}` has no typed columns.", ddl.table_name());
            } else {
                println!(
                    "{:<24} {:<20} {:<8} {:<8} {:<8} DEFAULT",
                    "NAME", "TYPE", "NULL", "UNIQUE", "PK"
                );
                println!("{:-<80}", "");
                for column in ddl.columns() {
                    println!(
                        "{:<24} {:<20} {:<8} {:<8} {:<8} {}",
                        column.name,
                        column.column_type,
                        column.nullable,
                        column.unique,
                        column.primary_key,
                        column.default_value.as_deref().unwrap_or("-")
                    );
                }
            }
        }

        Commands::Rewrite(args) => {
            let edits = args.edits();
            if edits.is_empty() {
                info!("No edits requested; printing the statement unchanged.");
            }
            apply_all(&mut ddl, &edits)?;
            println!("{}", ddl.compile());
        }
    }

    Ok(())
}
