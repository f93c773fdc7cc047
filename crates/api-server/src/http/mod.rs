use axum::Router;
use axum::routing::{get, post};
use shared::llm::CompletionClient;
use shared::sessions::SessionStore;

mod chat;
mod checkpoint;
mod errors;
mod health;
mod summary;

#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub completions: CompletionClient,
    pub model: String,
}

pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(chat::chat))
        .route("/api/chat/new", post(chat::new_chat))
        .route("/api/chat/history/{session_id}", get(chat::history))
        .route("/api/checkpoint", post(checkpoint::checkpoint))
        .route("/api/summary", post(summary::summary))
        .route("/api/health", get(health::health))
        .with_state(app_state)
}
