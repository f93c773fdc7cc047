use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shared::llm::CompletionError;
use shared::models::{ErrorBody, ErrorResponse};
use tracing::{error, warn};

pub(super) fn bad_request_response(code: &str, message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: message.to_string(),
            },
        }),
    )
        .into_response()
}

fn internal_error_response(code: &str, message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: message.to_string(),
            },
        }),
    )
        .into_response()
}

/// Maps completion failures onto the HTTP surface: missing key and
/// transport failures are 500s, upstream HTTP failures keep the upstream
/// status with its body embedded in the message. Nothing is retried or
/// suppressed.
pub(super) fn completion_error_response(err: CompletionError) -> Response {
    match err {
        CompletionError::MissingApiKey => {
            error!("request rejected: OPENAI_API_KEY is not configured");
            internal_error_response(
                "configuration_error",
                "Server configuration error: API Key is missing",
            )
        }
        CompletionError::UpstreamHttp { status, body } => {
            warn!("completion endpoint returned status {status}: {body}");
            let status =
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (
                status,
                Json(ErrorResponse {
                    error: ErrorBody {
                        code: "upstream_error".to_string(),
                        message: format!("API call failed: {body}"),
                    },
                }),
            )
                .into_response()
        }
        CompletionError::Unreachable(detail) => {
            warn!("completion endpoint unreachable: {detail}");
            internal_error_response("upstream_unreachable", &format!("API call failed: {detail}"))
        }
    }
}
