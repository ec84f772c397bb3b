use crate::error::Result;
use regex::{Captures, Regex};

/// Rewrites the `version = "<old>"` line of the first matching `[package]`
/// section to carry `new` instead.
///
/// The match is anchored to a `[package]` header and stops at the next
/// section header (a line beginning with `[`), so a `version` key in a
/// later table is never touched. Only the version literal itself is
/// replaced; every other byte of `content` is preserved.
///
/// Returns `None` when the pattern does not match, which covers both
/// "no `[package]` section" and "version is not `old`". At most one
/// substitution is performed, so a successful bump followed by a second
/// run with the same pair is a no-op.
pub fn bump_package_version(content: &str, old: &str, new: &str) -> Result<Option<String>> {
    let pattern = format!(
        r#"(\[package\]\n[^\[]*?version = "){}(")"#,
        regex::escape(old)
    );
    let re = Regex::new(&pattern)?;

    if !re.is_match(content) {
        return Ok(None);
    }

    // Closure replacement keeps `$` in the new literal inert.
    let replaced = re.replace(content, |caps: &Captures| {
        format!("{}{}{}", &caps[1], new, &caps[2])
    });

    Ok(Some(replaced.into_owned()))
}
