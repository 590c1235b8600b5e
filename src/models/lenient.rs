// file: src/models/lenient.rs
// description: field-level deserializers that degrade bad values instead of failing
// reference: https://serde.rs/field-attrs.html#deserialize_with

use super::search_result::SearchResult;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

/// Null or a value of the wrong type becomes `None`.
pub fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value => Ok(serde_json::from_value(value).ok()),
    }
}

/// Like [`optional`], but falls back to the type's default.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(optional(deserializer)?.unwrap_or_default())
}

/// Keeps the well-formed entries of a list, logging and skipping the rest.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(optional_list(deserializer)?.unwrap_or_default())
}

/// A result list that may be absent; a non-array value counts as absent.
pub fn results<'de, D>(deserializer: D) -> Result<Option<Vec<SearchResult>>, D::Error>
where
    D: Deserializer<'de>,
{
    optional_list(deserializer)
}

fn optional_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .enumerate()
                .filter_map(|(idx, item)| match serde_json::from_value(item) {
                    Ok(entry) => Some(entry),
                    Err(e) => {
                        warn!("Skipping malformed entry {}: {}", idx, e);
                        None
                    }
                })
                .collect(),
        )),
        Value::Null => Ok(None),
        other => {
            warn!("Expected a list, got {}", other);
            Ok(None)
        }
    }
}
