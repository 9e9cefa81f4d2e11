//! Untyped entry points over `serde_json::Value`
//!
//! Import payloads coming from a UI are plain JSON: the text blocks may be
//! `null`, line lists may hold numbers, keys arrive as strings. These
//! functions check argument shapes up front and fall back to the typed
//! pipeline. Shape failures come back as `DeckError::InvalidInput` or as an
//! "invalid" classification, never as a panic.

use crate::core::{DeckInProgress, FormattedLine, ImportErrors, MetaKey};
use crate::loader::{card_line, import, meta};
use crate::{DeckError, Result};
use serde_json::Value;

fn meta_key(key: &Value) -> Result<MetaKey> {
    match key {
        Value::String(s) => s.parse(),
        other => Err(DeckError::UnknownMetaKey(other.to_string())),
    }
}

fn string_lines(lines: &Value) -> Result<Vec<&str>> {
    let Value::Array(items) = lines else {
        return Err(DeckError::InvalidInput(format!("expected array of lines, got {lines}")));
    };

    items
        .iter()
        .map(|item| {
            item.as_str()
                .ok_or_else(|| DeckError::InvalidInput(format!("non-string line: {item}")))
        })
        .collect()
}

/// `Ok(None)` when no line carries `key`; `Err` when `lines` is not an array
/// of strings or `key` is not a recognized metadata key.
pub fn extract_meta_value(lines: &Value, key: &Value) -> Result<Option<String>> {
    let key = meta_key(key)?;
    let lines = string_lines(lines)?;
    Ok(meta::extract_meta_value(&lines, key))
}

/// Non-strings and unknown keys are always invalid
pub fn meta_line_invalid(line: &Value, key: &Value) -> bool {
    match (line.as_str(), meta_key(key)) {
        (Some(line), Ok(key)) => meta::meta_line_invalid(line, key),
        _ => true,
    }
}

/// Non-string values are dropped like blank lines
pub fn format_card_lines(lines: &[Value]) -> Vec<FormattedLine> {
    card_line::format_card_lines(lines.iter().filter_map(Value::as_str))
}

fn is_card_entry(value: &Value) -> bool {
    let Value::Object(fields) = value else {
        return false;
    };
    let quantity_ok = fields
        .get("quantity")
        .and_then(Value::as_u64)
        .is_some_and(|q| q >= 1 && q <= u64::from(u32::MAX));
    let name_ok = fields
        .get("name")
        .and_then(Value::as_str)
        .is_some_and(|name| !name.trim().is_empty());
    quantity_ok && name_ok
}

/// True when every element has the shape of a card entry
pub fn card_lines_valid(entries: &[Value]) -> bool {
    entries.iter().all(is_card_entry)
}

pub fn get_import_errors(main: &Value, sideboard: &Value) -> ImportErrors {
    import::get_import_errors(main.as_str(), sideboard.as_str())
}

pub fn convert_import_to_deck(main: &Value, sideboard: &Value) -> DeckInProgress {
    import::convert_import_to_deck(main.as_str(), sideboard.as_str())
}
