pub mod query;

use clap::{Parser, Subcommand};

#[derive(Subcommand)]
pub enum Command {
    /// Evaluate a SPARQL range query.
    Query(query::Args),
}

#[derive(Parser)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}
