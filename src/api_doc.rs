use utoipa::OpenApi;

use crate::handlers;
use crate::models::ResourceResponse;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "mock-endpoints API",
        version = "1.0.0",
        description = "A minimal HTTP server exposing hardcoded JSON endpoints for local development and testing"
    ),
    paths(
        handlers::resource::resource_handler,
        handlers::no_content::no_content_handler
    ),
    components(schemas(ResourceResponse)),
    tags(
        (name = "mock", description = "Mock endpoint operations")
    )
)]
pub struct ApiDoc;
