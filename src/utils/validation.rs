// file: src/utils/validation.rs
// description: input validation and text shaping helpers
// reference: input validation patterns

use crate::error::{ClientError, Result};

pub const ELLIPSIS: &str = "…";

pub struct Validator;

impl Validator {
    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ClientError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    pub fn validate_content_not_empty(content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(ClientError::Validation("Content is empty".to_string()));
        }
        Ok(())
    }

    /// Strips trailing slashes so endpoint paths can be appended with `/`.
    pub fn normalize_base_url(url: &str) -> String {
        url.trim().trim_end_matches('/').to_string()
    }

    /// Returns `None` for an empty or whitespace-only value.
    pub fn non_blank(value: &str) -> Option<String> {
        if value.trim().is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    /// Cuts `text` to `max_chars` characters, marking the cut with an ellipsis.
    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
            None => text.to_string(),
        }
    }
}
