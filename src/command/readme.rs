use crate::error::Result;
use crate::ops::{Transaction, splice_lines};
use clap::Parser;
use colored::Colorize;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
pub struct ReadmeArgs {
    /// Documentation file to edit
    #[arg(default_value = "README.md")]
    pub file: PathBuf,

    /// First line of the range to replace (zero-based)
    #[arg(long, value_name = "LINE")]
    pub start: usize,

    /// One past the last line of the range to replace (zero-based, exclusive)
    #[arg(long, value_name = "LINE")]
    pub end: usize,

    /// File holding the replacement lines (reads stdin when omitted)
    #[arg(long, value_name = "FILE")]
    pub with: Option<PathBuf>,

    /// Show what would change without writing anything
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}

fn read_replacement_lines(source: Option<&PathBuf>) -> Result<Vec<String>> {
    let text = match source {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(text.lines().map(str::to_string).collect())
}

pub fn execute(args: ReadmeArgs) -> Result<()> {
    let replacement = read_replacement_lines(args.with.as_ref())?;
    let content = fs::read_to_string(&args.file)?;

    // Range errors surface before anything is staged; a short file must
    // fail loudly, never get truncated.
    let updated = splice_lines(&content, args.start, args.end, &replacement)?;

    let mut txn = Transaction::new(args.dry_run);
    txn.update_file(args.file.clone(), updated)?;
    txn.commit()?;

    if txn.is_empty() {
        println!("{}", "No change needed".yellow());
    } else {
        let verb = if args.dry_run {
            "Would replace"
        } else {
            "Replaced"
        };
        println!(
            "{} {} lines {}..{} of {} with {} line(s)",
            "✓".green().bold(),
            verb,
            args.start,
            args.end,
            args.file.display(),
            replacement.len()
        );
    }

    Ok(())
}
