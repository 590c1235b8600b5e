// file: src/api/payload.rs
// description: request bodies and lenient response decoding
// reference: backend http contract

use crate::models::Document;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

#[derive(Debug, Serialize)]
pub struct UploadRequest<'a> {
    pub documents: &'a [Document],
}

#[derive(Debug, Serialize)]
pub struct QueryRequest<'a> {
    pub query: &'a str,
    pub top_k: usize,
}

/// Parses a response body, substituting an empty object when it is not JSON.
pub fn parse_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap_or_else(|_| Value::Object(Map::new()))
}

/// Decodes an envelope from parsed JSON; shape mismatches yield the empty envelope.
pub fn decode_envelope<T>(endpoint: &str, body: Value) -> T
where
    T: DeserializeOwned + Default,
{
    serde_json::from_value(body).unwrap_or_else(|e| {
        warn!("Unexpected {} response shape, treating as empty: {}", endpoint, e);
        T::default()
    })
}
