//! Line-building helpers for chains that accumulate text.

/// Appends `line` followed by a newline to `buffer`.
pub fn append_line(buffer: &mut String, line: &str) {
    buffer.push_str(line);
    buffer.push('\n');
}

/// Joins `lines`, terminating each one with a newline.
#[must_use]
pub fn lines(lines: &[&str]) -> String {
    lines.iter().fold(String::new(), |mut acc, line| {
        append_line(&mut acc, line);
        acc
    })
}

/// Strips one layer of matching double quotes from a feature-file placeholder.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(trimmed)
}
