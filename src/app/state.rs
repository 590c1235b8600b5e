// file: src/app/state.rs
// description: application state owned by the root controller

use crate::models::SearchResult;
use serde::Serialize;

/// Answer slot. `NotAsked` hides the answer block entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "status", content = "answer", rename_all = "snake_case")]
pub enum AnswerState {
    #[default]
    NotAsked,
    Asked(Option<String>),
}

impl AnswerState {
    pub fn is_asked(&self) -> bool {
        matches!(self, Self::Asked(_))
    }

    /// Generated text, if the backend returned a non-empty answer
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Asked(Some(text)) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppState {
    pub results: Vec<SearchResult>,
    pub answer: AnswerState,

    /// Backend note accompanying the current answer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl AppState {
    pub fn apply_search(&mut self, results: Vec<SearchResult>) {
        *self = Self {
            results,
            answer: AnswerState::NotAsked,
            note: None,
        };
    }

    pub fn apply_ask(
        &mut self,
        results: Vec<SearchResult>,
        answer: Option<String>,
        note: Option<String>,
    ) {
        *self = Self {
            results,
            answer: AnswerState::Asked(answer),
            note,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_answer_text() {
        assert_eq!(AnswerState::NotAsked.text(), None);
        assert_eq!(AnswerState::Asked(None).text(), None);
        assert_eq!(AnswerState::Asked(Some(String::new())).text(), None);
        assert_eq!(AnswerState::Asked(Some("42".to_string())).text(), Some("42"));
        assert!(AnswerState::Asked(None).is_asked());
        assert!(!AnswerState::NotAsked.is_asked());
    }

    #[test]
    fn test_search_clears_answer() {
        let mut state = AppState::default();
        state.apply_ask(vec![SearchResult::new("a")], Some("X".into()), Some("n".into()));
        state.apply_search(vec![SearchResult::new("b")]);

        assert_eq!(state.results, vec![SearchResult::new("b")]);
        assert_eq!(state.answer, AnswerState::NotAsked);
        assert_eq!(state.note, None);
    }

    #[test]
    fn test_serialize_state() {
        let mut state = AppState::default();
        state.apply_ask(vec![], Some("X".into()), None);
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            json!({ "results": [], "answer": { "status": "asked", "answer": "X" } })
        );

        state.apply_search(vec![]);
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            json!({ "results": [], "answer": { "status": "not_asked" } })
        );
    }
}
