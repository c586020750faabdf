//! String parsing utilities

/// Extract the value of a `KEY=value` line if it carries the wanted key.
/// Surrounding quotes are stripped, freedesktop os-release style.
pub fn os_release_value(line: &str, key: &str) -> Option<String> {
    let rest = line.strip_prefix(key)?;
    let value = rest.strip_prefix('=')?;
    let trimmed = value.trim().trim_matches('"');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
