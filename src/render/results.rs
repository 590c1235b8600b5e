// file: src/render/results.rs
// description: stateless rendering of the answer block and top matches
// reference: search result display in the cli

use crate::app::{AnswerState, AppState};
use crate::config::DEFAULT_PREVIEW_CHARS;
use crate::models::SearchResult;
use crate::utils::Validator;
use crate::utils::logging::format_heading;
use std::fmt::Write;

pub const NO_ANSWER_FALLBACK: &str = "No generator configured; showing sources below.";
pub const NO_RESULTS: &str = "No results yet.";

#[derive(Debug, Clone, Copy)]
pub struct ResultsView {
    preview_chars: usize,
}

impl Default for ResultsView {
    fn default() -> Self {
        Self::new(DEFAULT_PREVIEW_CHARS)
    }
}

impl ResultsView {
    pub fn new(preview_chars: usize) -> Self {
        Self { preview_chars }
    }

    pub fn render_state(&self, state: &AppState) -> String {
        let mut out = self.render(&state.results, &state.answer);
        if let Some(note) = &state.note {
            let _ = writeln!(out, "\nnote: {}", note);
        }
        out
    }

    pub fn render(&self, results: &[SearchResult], answer: &AnswerState) -> String {
        let mut out = String::new();

        if answer.is_asked() {
            let _ = writeln!(out, "{}", format_heading("Answer"));
            let _ = writeln!(out, "{}", answer.text().unwrap_or(NO_ANSWER_FALLBACK));
            let _ = writeln!(out, "{}", "-".repeat(80));
        }

        let _ = writeln!(out, "{}", format_heading("Top Matches"));
        if results.is_empty() {
            let _ = writeln!(out, "{}", NO_RESULTS);
        }

        for (idx, result) in results.iter().enumerate() {
            let _ = writeln!(out, "\n{}", result.display_title(idx));
            if let Some(distance) = result.distance {
                let _ = writeln!(out, "  distance: {:.4}", distance);
            }
            let _ = writeln!(out, "{}", self.preview(&result.text));
        }

        out
    }

    pub fn preview(&self, text: &str) -> String {
        Validator::truncate_text(text, self.preview_chars)
    }
}
