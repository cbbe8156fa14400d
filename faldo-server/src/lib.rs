pub mod cli;
pub mod commands;
pub mod server;

pub use self::cli::Cli;
