// Route path constants - single source of truth for all API paths

use axum::{Router, routing::get};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{no_content_handler, resource_handler};
use crate::state::AppState;

pub const API_RESOURCE: &str = "/api/resource";
pub const API_TEST: &str = "/api/test";

/// Build the router for the configured variant.
///
/// Both variants serve `/api/resource`; only the client variant mounts
/// `/api/test`. Everything else falls through to axum's default 404.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new().route(API_RESOURCE, get(resource_handler));

    if state.config.variant.serves_test_route() {
        router = router.route(API_TEST, get(no_content_handler));
    }

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}
