mod common;

use common::{playground_for, unreachable_client};
use pretty_assertions::assert_eq;
use rag_playground::render::{NO_ANSWER_FALLBACK, NO_RESULTS};
use rag_playground::{
    AnswerState, AppState, Playground, QueryForm, ResultsView, SearchResult, UploadForm, UploadNotice,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_search(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_ask(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/api/ask"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_search_replaces_results_in_order() {
    let server = MockServer::start().await;
    mount_search(
        &server,
        json!({ "results": [{ "text": "r1" }, { "text": "r2" }] }),
    )
    .await;

    let mut playground = playground_for(&server);
    playground.handle_search("query").await;

    assert_eq!(
        playground.state().results,
        vec![SearchResult::new("r1"), SearchResult::new("r2")]
    );
    assert_eq!(playground.state().answer, AnswerState::NotAsked);
}

#[tokio::test]
async fn test_search_without_results_field_empties_list() {
    let server = MockServer::start().await;
    mount_ask(&server, json!({ "answer": "A", "sources": [{ "text": "old" }] })).await;
    mount_search(&server, json!({})).await;

    let mut playground = playground_for(&server);
    playground.handle_ask("q").await;
    playground.handle_search("q").await;

    assert!(playground.state().results.is_empty());
    assert_eq!(playground.state().answer, AnswerState::NotAsked);
}

#[tokio::test]
async fn test_ask_sets_results_and_answer_together() {
    let server = MockServer::start().await;
    mount_ask(&server, json!({ "answer": "X", "sources": [{ "text": "r1" }] })).await;

    let mut playground = playground_for(&server);
    playground.handle_ask("q").await;

    assert_eq!(playground.state().results, vec![SearchResult::new("r1")]);
    assert_eq!(playground.state().answer, AnswerState::Asked(Some("X".into())));
}

#[tokio::test]
async fn test_ask_null_answer_renders_fallback() {
    let server = MockServer::start().await;
    mount_ask(
        &server,
        json!({
            "answer": null,
            "sources": [],
            "note": "Generator disabled; set OPENAI_CHAT_MODEL in .env to enable."
        }),
    )
    .await;

    let mut playground = playground_for(&server);
    playground.handle_ask("q").await;

    assert_eq!(playground.state().answer, AnswerState::Asked(None));

    colored::control::set_override(false);
    let out = ResultsView::default().render_state(playground.state());
    assert!(out.contains(NO_ANSWER_FALLBACK));
    assert!(out.contains(NO_RESULTS));
    assert!(out.contains("Generator disabled"));
}

#[tokio::test]
async fn test_ask_keeps_answer_when_a_source_is_malformed() {
    let server = MockServer::start().await;
    mount_ask(
        &server,
        json!({ "answer": "X", "sources": [{ "text": "good" }, { "text": null, "id": "b" }] }),
    )
    .await;

    let mut playground = playground_for(&server);
    playground.handle_ask("q").await;

    assert_eq!(playground.state().answer, AnswerState::Asked(Some("X".into())));
    let texts: Vec<&str> = playground
        .state()
        .results
        .iter()
        .map(|r| r.text.as_str())
        .collect();
    assert_eq!(texts, vec!["good", ""]);

    colored::control::set_override(false);
    let out = ResultsView::default().render_state(playground.state());
    assert!(!out.contains(NO_ANSWER_FALLBACK));
}

#[tokio::test]
async fn test_ask_falls_back_to_results_field() {
    let server = MockServer::start().await;
    mount_ask(&server, json!({ "results": [{ "text": "only results" }] })).await;

    let mut playground = playground_for(&server);
    playground.handle_ask("q").await;

    assert_eq!(playground.state().results, vec![SearchResult::new("only results")]);
    assert_eq!(playground.state().answer, AnswerState::Asked(None));
}

#[tokio::test]
async fn test_failed_search_keeps_previous_state() {
    let server = MockServer::start().await;
    mount_ask(&server, json!({ "answer": "X", "sources": [{ "text": "r1" }] })).await;

    let mut online = playground_for(&server);
    online.handle_ask("q").await;
    let before = online.state().clone();

    let mut playground = Playground::with_state(unreachable_client(), 5, before.clone());
    playground.handle_search("q").await;

    assert_eq!(playground.state(), &before);
    assert_eq!(playground.state().answer, AnswerState::Asked(Some("X".into())));
}

#[tokio::test]
async fn test_failed_ask_keeps_previous_state() {
    let mut before = AppState::default();
    before.apply_search(vec![SearchResult::new("stale")]);

    let mut playground = Playground::with_state(unreachable_client(), 5, before.clone());
    playground.handle_ask("q").await;

    assert_eq!(playground.state(), &before);
}

#[tokio::test]
async fn test_upload_notice_reports_added_count() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "added": 2 })))
        .mount(&server)
        .await;

    let playground = playground_for(&server);
    let notice = playground
        .handle_upload(vec![
            rag_playground::Document::new("a", "one"),
            rag_playground::Document::new("b", "two"),
        ])
        .await;

    assert_eq!(notice, UploadNotice::Added(2));
    assert_eq!(playground.state(), &AppState::default());
}

#[tokio::test]
async fn test_upload_backend_error_is_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": "collection missing" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let playground = playground_for(&server);
    let notice = playground
        .handle_upload(vec![rag_playground::Document::new("", "text")])
        .await;

    assert_eq!(notice, UploadNotice::Failed);
}

#[tokio::test]
async fn test_upload_form_submits_one_document_and_clears() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .and(body_json(json!({ "documents": [{ "title": "Notes", "text": "Body text" }] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "added": 1 })))
        .expect(1)
        .mount(&server)
        .await;

    let playground = playground_for(&server);
    let mut form = UploadForm::new();
    form.set_title("Notes");
    form.set_text("Body text");

    let notice = form.submit(&playground).await;

    assert_eq!(notice, Some(UploadNotice::Added(1)));
    assert_eq!(form, UploadForm::default());
}

#[tokio::test]
async fn test_upload_form_blank_title_omitted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .and(body_json(json!({ "documents": [{ "text": "Body" }] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "added": 1 })))
        .expect(1)
        .mount(&server)
        .await;

    let playground = playground_for(&server);
    let mut form = UploadForm::new();
    form.set_title("  ");
    form.set_text("Body");

    assert_eq!(form.submit(&playground).await, Some(UploadNotice::Added(1)));
}

#[tokio::test]
async fn test_upload_form_clears_after_failure() {
    let playground = Playground::new(unreachable_client(), 5);
    let mut form = UploadForm::new();
    form.set_title("Notes");
    form.set_text("Body text");

    let notice = form.submit(&playground).await;

    assert_eq!(notice, Some(UploadNotice::Failed));
    assert_eq!(form, UploadForm::default());
}

#[tokio::test]
async fn test_upload_form_whitespace_is_noop() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "added": 1 })))
        .expect(0)
        .mount(&server)
        .await;

    let playground = playground_for(&server);
    let mut form = UploadForm::new();
    form.set_title("Kept");
    form.set_text("   \n ");

    assert_eq!(form.submit(&playground).await, None);
    assert_eq!(form.title, "Kept");
    assert_eq!(playground.state(), &AppState::default());
}

#[tokio::test]
async fn test_query_form_keeps_query_between_actions() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/search"))
        .and(body_json(json!({ "query": "retrieval", "top_k": 5 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/ask"))
        .and(body_json(json!({ "query": "retrieval", "top_k": 5 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "answer": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let mut playground = playground_for(&server);
    let mut form = QueryForm::new();
    form.set_query("retrieval");

    form.search(&mut playground).await;
    form.ask(&mut playground).await;

    assert_eq!(form.query, "retrieval");
    assert_eq!(playground.state().answer, AnswerState::Asked(Some("ok".into())));
}

#[tokio::test]
async fn test_mount_pings_backend() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let playground = playground_for(&server);
    playground.mount().await.unwrap();

    assert_eq!(playground.state(), &AppState::default());
}

#[tokio::test]
async fn test_mount_failure_is_logged_only() {
    let playground = Playground::new(unreachable_client(), 5);
    playground.mount().await.unwrap();
    assert_eq!(playground.state(), &AppState::default());
}
