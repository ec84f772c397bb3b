use crate::error::{ChoreError, Result};

/// Replaces the zero-based half-open line range `start..end` of `content`
/// with `replacement`, one line per element.
///
/// Fails before producing any output when the range extends past the end
/// of the file; a file shorter than the target range must never be
/// silently truncated or padded. Trailing-newline presence is preserved.
pub fn splice_lines(
    content: &str,
    start: usize,
    end: usize,
    replacement: &[String],
) -> Result<String> {
    if start > end {
        return Err(ChoreError::InvalidLineRange { start, end });
    }

    let had_trailing_newline = content.ends_with('\n');
    let lines: Vec<&str> = content.lines().collect();

    if end > lines.len() {
        return Err(ChoreError::LineRangeOutOfBounds {
            start,
            end,
            len: lines.len(),
        });
    }

    let mut result_lines: Vec<&str> = Vec::with_capacity(lines.len());
    result_lines.extend(&lines[..start]);
    result_lines.extend(replacement.iter().map(String::as_str));
    result_lines.extend(&lines[end..]);

    let mut result = result_lines.join("\n");
    if had_trailing_newline && !result.is_empty() {
        result.push('\n');
    }

    Ok(result)
}
