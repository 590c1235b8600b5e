// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod forms;
pub mod models;
pub mod render;
pub mod shell;
pub mod utils;

pub use api::RagClient;
pub use app::{AnswerState, AppState, Playground, UploadNotice};
pub use config::{ApiConfig, Config, DEFAULT_TOP_K, DisplayConfig, QueryConfig};
pub use error::{ClientError, Result};
pub use forms::{QueryForm, UploadForm};
pub use models::{AskOutcome, AskResponse, Document, SearchResponse, SearchResult, UploadResponse};
pub use render::ResultsView;
pub use shell::{Session, ShellCommand};
pub use utils::Validator;
