use clap::{Parser, Subcommand};

use crate::command::bump::BumpArgs;
use crate::command::readme::ReadmeArgs;
use crate::command::show::ShowArgs;

#[derive(Parser)]
#[command(name = "workspace-chores", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Rewrite the [package] version in every manifest under the given roots.
    Bump(BumpArgs),

    /// Replace a line range in a documentation file.
    Readme(ReadmeArgs),

    /// Print the current [package] version of every manifest under the given roots.
    Show(ShowArgs),
}
