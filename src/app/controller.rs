// file: src/app/controller.rs
// description: root controller wiring forms to the backend client
// reference: application bootstrap and orchestration

use super::state::AppState;
use crate::api::RagClient;
use crate::models::Document;
use std::fmt;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadNotice {
    Added(u64),
    Failed,
}

impl UploadNotice {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Added(_))
    }
}

impl fmt::Display for UploadNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added(count) => write!(f, "Added {} document(s).", count),
            Self::Failed => write!(f, "Upload failed. See log output."),
        }
    }
}

/// Owns the results pane state. Each handler applies its transition whole or not at all.
pub struct Playground {
    client: RagClient,
    top_k: usize,
    state: AppState,
}

impl Playground {
    pub fn new(client: RagClient, top_k: usize) -> Self {
        Self::with_state(client, top_k, AppState::default())
    }

    /// Starts from an existing results pane instead of an empty one.
    pub fn with_state(client: RagClient, top_k: usize, state: AppState) -> Self {
        Self {
            client,
            top_k,
            state,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn client(&self) -> &RagClient {
        &self.client
    }

    /// Fires the liveness check in the background. Only logs.
    pub fn mount(&self) -> JoinHandle<()> {
        let client = self.client.clone();
        tokio::spawn(async move {
            match client.ping().await {
                Ok(body) => info!("[PING OK] {}", body),
                Err(e) => error!("[PING ERROR] {}", e),
            }
        })
    }

    pub async fn handle_upload(&self, documents: Vec<Document>) -> UploadNotice {
        match self.client.upload_documents(&documents).await {
            Ok(response) => match (response.added, &response.error) {
                (None, Some(reason)) => {
                    error!("[UPLOAD ERROR] backend rejected upload: {}", reason);
                    UploadNotice::Failed
                }
                (added, _) => {
                    info!("[UPLOAD OK] added={:?} ids={}", added, response.ids.len());
                    UploadNotice::Added(added.unwrap_or(0))
                }
            },
            Err(e) => {
                error!("[UPLOAD ERROR] {}", e);
                UploadNotice::Failed
            }
        }
    }

    pub async fn handle_search(&mut self, query: &str) {
        match self.client.search(query, self.top_k).await {
            Ok(response) => {
                let results = response.into_results();
                info!("[SEARCH OK] {} result(s)", results.len());
                self.state.apply_search(results);
            }
            Err(e) => error!("[SEARCH ERROR] {}", e),
        }
    }

    pub async fn handle_ask(&mut self, query: &str) {
        match self.client.ask(query, self.top_k).await {
            Ok(response) => {
                let outcome = response.resolve();
                info!(
                    "[ASK OK] {} source(s), answer={}",
                    outcome.matches.len(),
                    outcome.answer.is_some()
                );
                self.state.apply_ask(outcome.matches, outcome.answer, outcome.note);
            }
            Err(e) => error!("[ASK ERROR] {}", e),
        }
    }
}
