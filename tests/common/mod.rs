#![allow(dead_code)]

use rag_playground::{ApiConfig, Playground, RagClient};
use std::net::TcpListener;
use wiremock::MockServer;

pub fn client_for(server: &MockServer) -> RagClient {
    RagClient::new(&ApiConfig {
        base_url: format!("{}/api", server.uri()),
    })
    .unwrap()
}

pub fn playground_for(server: &MockServer) -> Playground {
    Playground::new(client_for(server), 5)
}

/// Client pointed at a local port nothing listens on.
pub fn unreachable_client() -> RagClient {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    RagClient::new(&ApiConfig {
        base_url: format!("http://127.0.0.1:{}/api", port),
    })
    .unwrap()
}
