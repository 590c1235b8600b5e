// file: src/forms/mod.rs
// description: input components for documents and queries
// reference: internal module structure

pub mod query;
pub mod upload;

pub use query::QueryForm;
pub use upload::UploadForm;
