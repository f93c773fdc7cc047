use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use shared::models::{
    ChatRequest, ChatResponse, HistoryResponse, NewChatRequest, NewChatResponse, Role, Turn,
};
use shared::prompt::{self, PromptContext};
use shared::sessions::HISTORY_WINDOW;
use tracing::{info, warn};

use super::{AppState, errors};

/// One conversation turn: validate, resolve the session, compose the system
/// prompt, append the user turn, invoke the completion endpoint with the
/// bounded window, append the reply, respond.
pub(super) async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Response {
    let Some(message) = req.message.filter(|message| !message.is_empty()) else {
        warn!("chat request rejected: message is missing");
        return errors::bad_request_response("missing_message", "Message is required");
    };

    let session_id = req
        .session_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Utc::now().timestamp_millis().to_string());

    let session = state.sessions.session(&session_id).await;
    // Held for the whole turn so concurrent requests on one session id
    // cannot interleave their history appends.
    let mut session_state = session.lock().await;

    let context = PromptContext {
        current_section: req.current_section.as_deref(),
        section_content: req.section_content.as_deref(),
        last_checkpoint_question: req.last_checkpoint_question.as_ref(),
        user_choices: req.user_choices.as_ref(),
    };
    let system_prompt = prompt::compose_system_prompt(&session_state, &context);

    session_state.append_turn(Role::User, message);

    let mut messages = Vec::with_capacity(HISTORY_WINDOW + 1);
    messages.push(Turn {
        role: Role::System,
        content: system_prompt,
    });
    messages.extend(session_state.recent_turns(HISTORY_WINDOW));

    let reply = match state.completions.complete(&state.model, &messages).await {
        Ok(reply) => reply,
        // The user turn appended above stays in history on failure.
        Err(err) => return errors::completion_error_response(err),
    };

    session_state.append_turn(Role::Assistant, reply.clone());

    (StatusCode::OK, Json(ChatResponse { response: reply })).into_response()
}

pub(super) async fn new_chat(
    State(state): State<AppState>,
    Json(req): Json<NewChatRequest>,
) -> Response {
    let Some(session_id) = req.session_id.filter(|id| !id.is_empty()) else {
        return errors::bad_request_response("missing_session_id", "Session ID is required");
    };

    state.sessions.reset(&session_id).await;
    info!("cleared chat history for session {session_id}");

    (
        StatusCode::OK,
        Json(NewChatResponse {
            success: true,
            session_id,
            message: "New chat session created successfully".to_string(),
        }),
    )
        .into_response()
}

pub(super) async fn history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    let messages = state.sessions.history(&session_id, None).await;

    (StatusCode::OK, Json(HistoryResponse { messages })).into_response()
}
