use crate::models::ResourceResponse;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// GET /api/resource handler - Return the fixed mock payload
///
/// The message literal is fixed per variant at startup and never changes,
/// so repeated requests produce byte-identical responses.
#[utoipa::path(
    get,
    path = routes::API_RESOURCE,
    responses(
        (status = 200, description = "Mock resource payload", body = ResourceResponse)
    ),
    tag = "mock"
)]
pub async fn resource_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<ResourceResponse>) {
    tracing::debug!("Serving mock resource payload");
    (
        StatusCode::OK,
        Json(ResourceResponse {
            message: state.config.variant.resource_message().to_string(),
        }),
    )
}
