mod server;

use clap::{Parser, Subcommand};

pub use self::server::ServerConfig;

#[derive(Debug, Parser)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Starts a SPARQL endpoint and blocks indefinitely
    Server(ServerConfig),
}
