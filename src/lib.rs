#![doc = include_str!("../README.md")]

pub mod cli;
pub mod command;
pub mod error;
pub mod ops;
pub mod validation;

pub use error::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() -> Result<()> {
    use clap::Parser;
    use cli::{Cli, Command};

    let cli = Cli::parse();
    match cli.command {
        Command::Bump(args) => command::bump::execute(args),
        Command::Readme(args) => command::readme::execute(args),
        Command::Show(args) => command::show::execute(args),
    }
}
