use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use faq_chat::AppState;
use faq_chat::faq::{FaqEntry, FaqIndex, NOT_UNDERSTOOD_TEXT};
use faq_chat::server::router;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> axum::Router {
    let faq = FaqIndex::build(
        vec![
            FaqEntry::new("How do I reset my password?", "Use the reset link on the login page."),
            FaqEntry::new("What are your opening hours?", "We are open 9am to 5pm."),
        ],
        0.2,
    )
    .expect("Failed to build index");
    router(AppState { faq: Arc::new(faq) })
}

async fn post_ask(body: Body) -> (StatusCode, Vec<u8>) {
    let response = app()
        .oneshot(
            Request::post("/ask")
                .header(header::CONTENT_TYPE, "application/json")
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn test_ask_returns_matching_answer() {
    let body = Body::from(json!({"message": "how can I reset my password"}).to_string());
    let (status, bytes) = post_ask(body).await;

    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value, json!({"response": "Use the reset link on the login page."}));
}

#[tokio::test]
async fn test_ask_unmatched_question() {
    let body = Body::from(json!({"message": "what's the weather"}).to_string());
    let (status, bytes) = post_ask(body).await;

    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["response"], NOT_UNDERSTOOD_TEXT);
}

#[tokio::test]
async fn test_ask_rejects_missing_message() {
    let (status, _) = post_ask(Body::from("{}")).await;
    assert!(status.is_client_error());

    let (status, _) = post_ask(Body::from("not json")).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_index_serves_chat_page() {
    let response = app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("id=\"chatForm\""));
}
