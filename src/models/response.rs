// file: src/models/response.rs
// description: response envelopes for the upload, search and ask endpoints
// reference: backend http contract; every field is optional on the wire

use super::lenient;
use super::search_result::{ResultId, SearchResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub added: Option<u64>,

    #[serde(default, deserialize_with = "lenient::list")]
    pub ids: Vec<ResultId>,

    #[serde(default, deserialize_with = "lenient::optional")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "lenient::results")]
    pub results: Option<Vec<SearchResult>>,

    #[serde(default, deserialize_with = "lenient::optional")]
    pub error: Option<String>,
}

impl SearchResponse {
    pub fn into_results(self) -> Vec<SearchResult> {
        self.results.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub answer: Option<String>,

    #[serde(default, deserialize_with = "lenient::results")]
    pub sources: Option<Vec<SearchResult>>,

    #[serde(default, deserialize_with = "lenient::results")]
    pub results: Option<Vec<SearchResult>>,

    /// Set by the backend when generation is disabled
    #[serde(default, deserialize_with = "lenient::optional")]
    pub note: Option<String>,

    #[serde(default, deserialize_with = "lenient::optional")]
    pub error: Option<String>,
}

/// What an ask response resolves to once the match list has been chosen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AskOutcome {
    pub matches: Vec<SearchResult>,
    pub answer: Option<String>,
    pub note: Option<String>,
}

impl AskResponse {
    /// Picks the match list in order `sources`, `results`, empty.
    pub fn resolve(self) -> AskOutcome {
        let matches = self.sources.or(self.results).unwrap_or_default();

        AskOutcome {
            matches,
            answer: self.answer,
            note: self.note,
        }
    }
}
