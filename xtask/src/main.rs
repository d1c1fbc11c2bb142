//! xtask - Development task runner for polylist
//!
//! Usage:
//!   cargo run -p xtask -- walkthrough
//!   cargo run -p xtask -- render 1 2 3 [--prepend 0] [--concat 4 5] [--format json]
//!   cargo run -p xtask -- lookup 1 2 3 (--index <i> | --element <v>)
//!
//! Log output goes to stderr and is filtered with `RUST_LOG`.

mod list_tasks;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development task runner for polylist")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a small list step by step and show every operation
    Walkthrough,
    /// Build a list from the given values and print it
    Render(list_tasks::RenderArgs),
    /// Look up an index or an element in a list built from the given values
    Lookup(list_tasks::LookupArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,xtask=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Walkthrough => list_tasks::walkthrough(),
        Commands::Render(args) => list_tasks::render(&args),
        Commands::Lookup(args) => list_tasks::lookup(&args),
    }
}
