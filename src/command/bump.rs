use crate::error::Result;
use crate::ops::{Transaction, bump_package_version, find_manifests};
use crate::validation::validate_version_literal;
use clap::Parser;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
pub struct BumpArgs {
    /// Version literal currently present in the manifests
    pub old: String,

    /// Version literal to write in its place
    pub new: String,

    /// Root directory to search for Cargo.toml files (repeatable)
    ///
    /// Roots that do not exist are skipped.
    #[arg(long, value_name = "DIR", default_values = ["crates", "examples"])]
    pub root: Vec<PathBuf>,

    /// Show what would change without writing anything
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}

pub fn execute(args: BumpArgs) -> Result<()> {
    validate_version_literal(&args.old)?;
    validate_version_literal(&args.new)?;

    let manifests = find_manifests(&args.root)?;
    log::debug!(
        "Bumping {} → {} across {} manifest(s)",
        args.old,
        args.new,
        manifests.len()
    );

    let mut txn = Transaction::new(args.dry_run);

    let result: Result<()> = (|| {
        for manifest in &manifests {
            println!("{} {}", "Bumping".bold(), manifest.display());

            let content = fs::read_to_string(manifest)?;
            match bump_package_version(&content, &args.old, &args.new)? {
                Some(updated) => {
                    txn.update_file(manifest.clone(), updated)?;
                    println!("{}", "Success".green());
                }
                None => {
                    println!(
                        "{}",
                        "No change needed or [package] version not found".yellow()
                    );
                }
            }
        }
        Ok(())
    })();

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        return Err(e);
    }

    if let Err(e) = txn.commit() {
        eprintln!("{} {}", "Error during commit:".red().bold(), e);

        if !args.dry_run && !txn.is_empty() {
            eprintln!("{}", "Attempting to rollback changes...".yellow().bold());
            match txn.rollback() {
                Ok(_) => eprintln!("{}", "✓ Rollback successful.".green()),
                Err(rollback_err) => {
                    eprintln!("{} {}", "✗ Rollback failed:".red().bold(), rollback_err);
                }
            }
        }

        return Err(e);
    }

    txn.print_summary();

    Ok(())
}
