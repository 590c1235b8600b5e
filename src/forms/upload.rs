// file: src/forms/upload.rs
// description: document upload form with title and text fields

use crate::app::{Playground, UploadNotice};
use crate::models::Document;
use crate::utils::Validator;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadForm {
    pub title: String,
    pub text: String,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Appends a line, used when text is pasted one line at a time.
    pub fn push_line(&mut self, line: &str) {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(line);
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.text.clear();
    }

    /// The single-document batch a submit would send, or `None` when text is blank.
    pub fn documents(&self) -> Option<Vec<Document>> {
        Validator::validate_content_not_empty(&self.text).ok()?;
        Some(vec![Document::new(&self.title, self.text.clone())])
    }

    /// Submits through the controller, then clears both fields whatever the outcome.
    pub async fn submit(&mut self, playground: &Playground) -> Option<UploadNotice> {
        let documents = self.documents()?;
        let notice = playground.handle_upload(documents).await;
        self.clear();
        Some(notice)
    }
}
