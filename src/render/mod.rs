// file: src/render/mod.rs
// description: text rendering of the results pane
// reference: internal module structure

pub mod results;

pub use results::{NO_ANSWER_FALLBACK, NO_RESULTS, ResultsView};
