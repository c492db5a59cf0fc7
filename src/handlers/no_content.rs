use crate::routes;
use axum::http::StatusCode;

/// GET /api/test handler - Answer 204 No Content
///
/// Ignores query parameters and request body entirely.
#[utoipa::path(
    get,
    path = routes::API_TEST,
    responses(
        (status = 204, description = "Empty response")
    ),
    tag = "mock"
)]
pub async fn no_content_handler() -> StatusCode {
    StatusCode::NO_CONTENT
}
