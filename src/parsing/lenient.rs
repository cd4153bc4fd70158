//! Permissive `deserialize_with` helpers for untrusted export fields.
//!
//! Every helper here accepts any JSON value and never fails. Fields that
//! have the wrong shape degrade to `None` (or an empty list) instead of
//! aborting the whole document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Keeps the value exactly as written, including an explicit `null`.
///
/// Combined with `#[serde(default)]` this distinguishes an absent field
/// (`None`) from a field set to `null` (`Some(Value::Null)`).
pub fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Reads a string tag such as `"type"`. Non-strings become `None`.
pub fn tag<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Reads an optional array of records.
///
/// Returns `None` unless the field is an array. Elements that are not
/// objects become `T::default()` so positions are preserved.
pub fn records<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|item| record(item).unwrap_or_default())
                .collect(),
        ),
        _ => None,
    })
}

/// Reads an array of records, dropping non-object elements.
///
/// A missing or non-array field yields an empty list.
pub fn object_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(record).collect(),
        _ => Vec::new(),
    })
}

fn record<T: DeserializeOwned>(value: Value) -> Option<T> {
    // serde accepts sequences for derived structs; only objects are records here.
    if !value.is_object() {
        return None;
    }
    serde_json::from_value(value).ok()
}
