//! Binary entry point for `workspace-chores`.

use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = workspace_chores::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
