//! HTTP surface: the chat page at `/` and the `POST /ask` endpoint.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppState;
use crate::config::AppConfig;
use crate::faq::FaqIndex;
use crate::page;
use crate::wire::{ASK_PATH, AskRequest, AskResponse};

/// Build the router: the chat page at `/` and the ask endpoint.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route(ASK_PATH, post(ask_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let faq = FaqIndex::load(&config.faq.path, config.faq.threshold)?;
    info!(
        name: "faq.corpus.loaded",
        path = %config.faq.path,
        entries = faq.len(),
        "FAQ corpus loaded"
    );

    let state = AppState { faq: Arc::new(faq) };
    let app = router(state);

    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!(
        name: "server.started",
        address = %format!("http://{address}"),
        "Server started"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

/// GET / - the chat page.
async fn index_handler() -> impl IntoResponse {
    Html(page::chat_page())
}

/// POST /ask - answer a question from the FAQ corpus.
async fn ask_handler(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> Json<AskResponse> {
    tracing::info!(message_length = req.message.len(), "Received ask request");

    let response = state.faq.answer(&req.message).to_string();

    tracing::debug!(response = %response, "Answered ask request");
    Json(AskResponse { response })
}
