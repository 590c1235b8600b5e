// file: src/models/search_result.rs
// description: Search result model as returned by the backend
// reference: Used for vector similarity search results

use super::lenient;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Backend identifier; the reference backend sends strings, others may send numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultId {
    Text(String),
    Number(i64),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultMetadata {
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,

    /// Any other metadata keys the backend attached
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<ResultId>,

    /// Matched chunk text
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub text: String,

    /// Distance metric (lower is more similar)
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub distance: Option<f64>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub metadata: Option<ResultMetadata>,
}

impl SearchResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.metadata.get_or_insert_with(ResultMetadata::default).title = Some(title.into());
        self
    }

    /// Title from metadata, if the backend supplied a non-empty one
    pub fn title(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.title.as_deref())
            .filter(|t| !t.is_empty())
    }

    /// Title shown in listings; falls back to a 1-based positional label.
    pub fn display_title(&self, index: usize) -> String {
        match self.title() {
            Some(title) => title.to_string(),
            None => format!("Result {}", index + 1),
        }
    }
}
