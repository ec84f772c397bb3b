use crate::error::{ChoreError, Result};

/// Checks that a version literal can be spliced into a `version = "..."`
/// line without breaking the manifest.
///
/// The literal is otherwise passed through verbatim: no semver parsing and
/// no newer/older comparison is performed.
pub fn validate_version_literal(version: &str) -> Result<()> {
    if version.is_empty() {
        return Err(ChoreError::InvalidVersion(
            version.to_string(),
            "cannot be empty".to_string(),
        ));
    }

    if version.contains('"') {
        return Err(ChoreError::InvalidVersion(
            version.to_string(),
            "cannot contain double quotes".to_string(),
        ));
    }

    if version.contains('\n') || version.contains('\r') {
        return Err(ChoreError::InvalidVersion(
            version.to_string(),
            "cannot contain line breaks".to_string(),
        ));
    }

    Ok(())
}
