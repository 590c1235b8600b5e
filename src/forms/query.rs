// file: src/forms/query.rs
// description: query form shared by the search and ask actions

use crate::app::Playground;

/// Holds the query text. It is kept after either action so it can be re-run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryForm {
    pub query: String,
}

impl QueryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub async fn search(&self, playground: &mut Playground) {
        playground.handle_search(&self.query).await;
    }

    pub async fn ask(&self, playground: &mut Playground) {
        playground.handle_ask(&self.query).await;
    }
}
