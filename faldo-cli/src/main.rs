use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod cli;
mod commands;

use std::io;

use clap::Parser;

use self::{
    cli::{Cli, Command},
    commands::query,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Query(args) => query(args)?,
    }

    Ok(())
}
