// file: src/api/mod.rs
// description: http client for the rag backend endpoints
// reference: internal module structure

pub mod client;
pub mod payload;

pub use client::RagClient;
pub use payload::{QueryRequest, UploadRequest};
