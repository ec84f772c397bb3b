use crate::error::{ChoreError, Result};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Operation {
    UpdateFile {
        path: PathBuf,
        original: String,
        new: String,
    },
}

#[must_use = "Transaction must be committed or rolled back"]
pub struct Transaction {
    operations: Vec<Operation>,
    dry_run: bool,
    committed: bool,
}

impl Transaction {
    pub fn new(dry_run: bool) -> Self {
        Self {
            operations: Vec::new(),
            dry_run,
            committed: false,
        }
    }

    pub fn update_file(&mut self, path: PathBuf, new_content: String) -> Result<()> {
        log::debug!("Transaction::update_file called for: {}", path.display());

        let original = fs::read_to_string(&path).map_err(|e| {
            log::error!("Failed to read file {}: {}", path.display(), e);
            ChoreError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", path.display(), e),
            ))
        })?;

        if original == new_content {
            log::debug!("File content unchanged, skipping: {}", path.display());
            return Ok(());
        }

        if self.dry_run {
            log::info!("Would update: {}", path.display());
        } else {
            log::debug!("Staging update for: {}", path.display());
        }

        self.operations.push(Operation::UpdateFile {
            path,
            original,
            new: new_content,
        });

        Ok(())
    }

    /// Execute all staged operations.
    ///
    /// Takes `&mut self` instead of `self` so the transaction is still
    /// accessible afterwards for rollback or summary printing.
    pub fn commit(&mut self) -> Result<()> {
        if self.committed {
            return Err(ChoreError::Other(anyhow::anyhow!(
                "Transaction already committed"
            )));
        }

        if self.dry_run {
            self.committed = true;
            return Ok(());
        }

        for op in &self.operations {
            match op {
                Operation::UpdateFile { path, new, .. } => {
                    fs::write(path, new).map_err(|e| {
                        ChoreError::Io(std::io::Error::new(
                            e.kind(),
                            format!("Failed to write {}: {}", path.display(), e),
                        ))
                    })?;
                    log::debug!("Updated: {}", path.display());
                }
            }
        }

        self.committed = true;
        Ok(())
    }

    /// Restore the original content of every staged file, newest first.
    pub fn rollback(self) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }

        log::warn!("Rolling back {} operation(s)...", self.operations.len());

        let mut errors = Vec::new();

        for op in self.operations.iter().rev() {
            let Operation::UpdateFile { path, original, .. } = op;
            if let Err(e) = fs::write(path, original) {
                errors.push(format!("Failed to restore {}: {}", path.display(), e));
            }
        }

        if errors.is_empty() {
            log::info!("Rollback completed successfully");
            Ok(())
        } else {
            Err(ChoreError::RollbackFailed(errors.join("; ")))
        }
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn is_committed(&self) -> bool {
        self.committed
    }

    /// Prints the list of updated files and a closing count.
    pub fn print_summary(&self) {
        if self.operations.is_empty() {
            println!("\n{}", "No changes needed".yellow());
            return;
        }

        let verb = if self.dry_run { "Would update" } else { "Updated" };
        println!();
        for op in &self.operations {
            let Operation::UpdateFile { path, .. } = op;
            println!("  {} {}", verb.bold(), path.display());
        }
        println!(
            "{} {} file(s) {}",
            "✓".green().bold(),
            self.operations.len(),
            if self.dry_run { "would change" } else { "changed" }
        );
    }
}
