use crate::error::Result;
use ignore::WalkBuilder;
use std::path::PathBuf;

/// Collects every file named `Cargo.toml` reachable from the given roots.
///
/// Roots that do not exist are skipped. `target`, `.git`, and
/// `node_modules` directories are pruned. Entries are visited in
/// file-name order so repeated runs report files in a stable order.
pub fn find_manifests(roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut manifests = Vec::new();

    for root in roots {
        if !root.exists() {
            log::debug!("Skipping missing root: {}", root.display());
            continue;
        }

        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(|entry| {
                let name = entry.file_name().to_string_lossy();
                !matches!(name.as_ref(), "target" | ".git" | "node_modules")
            });

        for entry in builder.build() {
            let entry = entry?;
            if entry.file_type().is_some_and(|t| t.is_file())
                && entry.path().file_name().is_some_and(|n| n == "Cargo.toml")
            {
                manifests.push(entry.into_path());
            }
        }
    }

    log::debug!("Discovered {} manifest(s)", manifests.len());
    Ok(manifests)
}
