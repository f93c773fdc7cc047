use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use shared::models::HealthResponse;

pub(super) async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            message: "API is running".to_string(),
        }),
    )
}
