use std::io;

use clap::Parser;
use faldo_server::{Cli, cli::Command, commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Server(config) => commands::server(config).await?,
    }

    Ok(())
}
