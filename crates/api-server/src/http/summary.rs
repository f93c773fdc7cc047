use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shared::models::{SummaryRequest, SummaryResponse};
use shared::summary::{SectionSummaryRequest, generate_section_summary};
use tracing::info;

use super::{AppState, errors};

pub(super) async fn summary(
    State(state): State<AppState>,
    Json(req): Json<SummaryRequest>,
) -> Response {
    let Some(session_id) = req.session_id.filter(|id| !id.is_empty()) else {
        return errors::bad_request_response("missing_session_id", "Session ID is required");
    };
    let Some(section_id) = req.section_id.filter(|id| !id.is_empty()) else {
        return errors::bad_request_response("missing_section_id", "Section ID is required");
    };
    let Some(section_content) = req.section_content.filter(|content| !content.is_empty()) else {
        return errors::bad_request_response(
            "missing_section_content",
            "Section content is required",
        );
    };
    let Some(checkpoint_question) = req.checkpoint_question else {
        return errors::bad_request_response(
            "missing_checkpoint_question",
            "Checkpoint question is required",
        );
    };

    let session = state.sessions.session(&session_id).await;
    let mut session_state = session.lock().await;

    let summary_request = SectionSummaryRequest {
        section_id: &section_id,
        section_content: &section_content,
        checkpoint_question: &checkpoint_question,
        user_answer: req.user_answer.as_deref(),
        is_correct: req.is_correct,
    };

    let summary = match generate_section_summary(
        &mut session_state,
        &state.completions,
        &state.model,
        &summary_request,
    )
    .await
    {
        Ok(summary) => summary,
        Err(err) => return errors::completion_error_response(err),
    };

    info!("stored summary for session {session_id} section {section_id}");

    (
        StatusCode::OK,
        Json(SummaryResponse {
            success: true,
            summary,
            message: "Section summary generated successfully".to_string(),
        }),
    )
        .into_response()
}
