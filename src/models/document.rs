// file: src/models/document.rs
// description: document payload submitted to the backend index
// reference: internal data structures

use crate::utils::Validator;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub text: String,
}

impl Document {
    /// Builds a document, dropping a blank title.
    pub fn new(title: &str, text: impl Into<String>) -> Self {
        Self {
            title: Validator::non_blank(title),
            text: text.into(),
        }
    }
}
