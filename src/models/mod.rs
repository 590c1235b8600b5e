// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod document;
pub mod lenient;
pub mod response;
pub mod search_result;

pub use document::Document;
pub use response::{AskOutcome, AskResponse, SearchResponse, UploadResponse};
pub use search_result::{ResultId, ResultMetadata, SearchResult};
