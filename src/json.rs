//! Input reading and inventory document parsing.
//!
//! Reads raw text from stdin or a file, parses it as JSON via serde_json,
//! and pulls usable `(itemKey, id)` pairs out of the `items` array.

use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::error::ExtractionError;

/// Invalid UTF-8 is rejected: a replaced byte would survive parsing and end
/// up inside a material id.
pub fn decode_utf8(buf: Vec<u8>) -> std::io::Result<String> {
    String::from_utf8(buf).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

/// Read all of stdin into a String.
pub fn read_stdin() -> std::io::Result<String> {
    let mut buf = Vec::new();
    std::io::stdin().lock().read_to_end(&mut buf)?;
    decode_utf8(buf)
}

/// Read raw input text from `file`, or stdin when no file is given.
pub fn read_input(file: Option<&Path>) -> std::io::Result<String> {
    match file {
        Some(path) => decode_utf8(std::fs::read(path)?),
        None => read_stdin(),
    }
}

/// Extract a non-empty string field from a JSON object.
/// Returns None if the field is missing, not a string, or empty.
pub fn string_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// One inventory entry that carries both an item key and an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item<'a> {
    pub item_key: &'a str,
    pub id: &'a str,
}

impl<'a> Item<'a> {
    pub fn from_value(value: &'a Value) -> Option<Self> {
        Some(Item {
            item_key: string_field(value, "itemKey")?,
            id: string_field(value, "id")?,
        })
    }
}

/// Parse the document and return its `items` array.
pub fn parse_items(text: &str) -> Result<Vec<Value>, ExtractionError> {
    let mut doc: Value = serde_json::from_str(text)?;
    match doc.get_mut("items").map(Value::take) {
        Some(Value::Array(items)) => Ok(items),
        _ => Err(ExtractionError::InvalidShape),
    }
}

/// Usable items in document order; entries without both fields are skipped.
pub fn usable_items(items: &[Value]) -> impl Iterator<Item = Item<'_>> {
    items.iter().filter_map(Item::from_value)
}
