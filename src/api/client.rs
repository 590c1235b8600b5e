// file: src/api/client.rs
// description: reqwest wrapper for the ping, upload, search and ask endpoints
// reference: https://docs.rs/reqwest

use super::payload::{QueryRequest, UploadRequest, decode_envelope, parse_body};
use crate::config::ApiConfig;
use crate::error::Result;
use crate::models::{AskResponse, Document, SearchResponse, UploadResponse};
use crate::utils::Validator;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct RagClient {
    client: Client,
    base_url: String,
}

impl RagClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Validator::validate_url(&config.base_url)?;

        Ok(Self {
            client: Client::new(),
            base_url: Validator::normalize_base_url(&config.base_url),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    pub async fn ping(&self) -> Result<Value> {
        let url = self.endpoint("ping");
        self.json_fetch(&url, self.client.get(&url)).await
    }

    pub async fn upload_documents(&self, documents: &[Document]) -> Result<UploadResponse> {
        let url = self.endpoint("upload");
        let request = self.client.post(&url).json(&UploadRequest { documents });

        let body = self.json_fetch(&url, request).await?;
        let response: UploadResponse = decode_envelope("upload", body);
        if let Some(error) = &response.error {
            warn!("Backend reported upload error: {}", error);
        }
        Ok(response)
    }

    pub async fn search(&self, query: &str, top_k: usize) -> Result<SearchResponse> {
        let url = self.endpoint("search");
        let request = self.client.post(&url).json(&QueryRequest { query, top_k });

        let body = self.json_fetch(&url, request).await?;
        let response: SearchResponse = decode_envelope("search", body);
        if let Some(error) = &response.error {
            warn!("Backend reported search error: {}", error);
        }
        Ok(response)
    }

    pub async fn ask(&self, query: &str, top_k: usize) -> Result<AskResponse> {
        let url = self.endpoint("ask");
        let request = self.client.post(&url).json(&QueryRequest { query, top_k });

        let body = self.json_fetch(&url, request).await?;
        let response: AskResponse = decode_envelope("ask", body);
        if let Some(error) = &response.error {
            warn!("Backend reported ask error: {}", error);
        }
        if let Some(note) = &response.note {
            warn!("Backend note: {}", note);
        }
        Ok(response)
    }

    /// Single round trip. Only transport failures are errors; any status is accepted.
    async fn json_fetch(&self, url: &str, request: RequestBuilder) -> Result<Value> {
        debug!("[API] → {}", url);

        let response = request.send().await?;
        let status = response.status();
        debug!("[API] ← status {}", status);

        if !status.is_success() {
            warn!("Backend returned status {} for {}", status, url);
        }

        let body = match response.bytes().await {
            Ok(bytes) => parse_body(&bytes),
            Err(e) => {
                warn!("Failed to read response body from {}: {}", url, e);
                parse_body(&[])
            }
        };
        debug!("[API] ← body {}", body);

        Ok(body)
    }
}
