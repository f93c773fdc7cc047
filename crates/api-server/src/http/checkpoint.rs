use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shared::models::CheckpointRequest;
use shared::questions::question_for_section;

use super::errors;

/// Returns the fixed checkpoint question for a section. The response
/// includes `correctAnswerId` because the frontend grades answers
/// client-side; see DESIGN.md before changing this.
pub(super) async fn checkpoint(Json(req): Json<CheckpointRequest>) -> Response {
    let Some(section_id) = req.section_id.filter(|id| !id.is_empty()) else {
        return errors::bad_request_response("missing_section_id", "Section ID is required");
    };

    (StatusCode::OK, Json(question_for_section(&section_id))).into_response()
}
