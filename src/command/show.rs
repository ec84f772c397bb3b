use crate::error::Result;
use crate::ops::find_manifests;
use clap::Parser;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use toml_edit::DocumentMut;

#[derive(Parser, Debug, Clone)]
pub struct ShowArgs {
    /// Root directory to search for Cargo.toml files (repeatable)
    #[arg(long, value_name = "DIR", default_values = ["crates", "examples"])]
    pub root: Vec<PathBuf>,
}

pub fn execute(args: ShowArgs) -> Result<()> {
    let manifests = find_manifests(&args.root)?;

    for manifest in &manifests {
        let content = fs::read_to_string(manifest)?;
        let doc: DocumentMut = content.parse()?;

        let version = doc
            .get("package")
            .and_then(|item| item.as_table())
            .and_then(|table| table.get("version"))
            .and_then(|item| item.as_str());

        match version {
            Some(version) => {
                println!("{}: {}", manifest.display(), version.green());
            }
            None => {
                println!(
                    "{}: {}",
                    manifest.display(),
                    "no [package] version".yellow()
                );
            }
        }
    }

    if manifests.is_empty() {
        println!("{}", "No manifests found".yellow());
    }

    Ok(())
}
