// file: src/app/mod.rs
// description: root controller and application state
// reference: internal module structure

pub mod controller;
pub mod state;

pub use controller::{Playground, UploadNotice};
pub use state::{AnswerState, AppState};
