//! Metadata line extraction and validation

use crate::core::MetaKey;

/// Value portion of a metadata line for `key`, trimmed.
///
/// Returns `None` when the line does not start with the key's prefix.
pub fn meta_value(line: &str, key: MetaKey) -> Option<&str> {
    line.strip_prefix(key.prefix()).map(str::trim)
}

/// Find the first line carrying `key` and return its trimmed value.
///
/// An empty string means the line exists with no value; `None` means no
/// line for this key was found.
pub fn extract_meta_value<S: AsRef<str>>(lines: &[S], key: MetaKey) -> Option<String> {
    lines
        .iter()
        .find_map(|line| meta_value(line.as_ref(), key))
        .map(str::to_string)
}

/// Whether `line` fails to be a metadata line for `key`.
///
/// A well-formed line starts with `"<key>:"` at column 0. Anything may follow
/// the colon, including nothing.
pub fn meta_line_invalid(line: &str, key: MetaKey) -> bool {
    line.is_empty() || !line.starts_with(key.prefix())
}
