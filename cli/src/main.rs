use std::io;

use clap::{Parser, Subcommand};
use mdbook_flagtable::config::{DEFAULT_COMMAND, FlagTableConfig};
use mdbook_flagtable::generator::FlagTables;
use mdbook_flagtable::preprocess;

#[derive(Debug, Parser)]
#[command(name = "mdbook-flagtable")]
#[command(about = "Inject generated CLI flag tables into book content")]
struct Cli {
    /// Command line for the tool whose subcommand help is tabulated.
    #[arg(long, default_value = DEFAULT_COMMAND)]
    command: String,
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Subcommand)]
enum Mode {
    /// Answer the book builder's renderer capability query.
    Supports {
        /// Renderer name being queried (accepted unconditionally).
        renderer: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> mdbook_flagtable::Result<()> {
    let config = FlagTableConfig::new(cli.command);

    // Tables are generated on every invocation, capability query included.
    let tables = FlagTables::generate(&config)?;

    if let Some(Mode::Supports { .. }) = cli.mode {
        // Every renderer is supported; the tables only touch content text.
        return Ok(());
    }

    preprocess::run(&tables, io::stdin().lock(), io::stdout().lock())
}
