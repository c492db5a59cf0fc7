use serde::{Deserialize, Serialize};

/// Response type for the mock resource endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ResourceResponse {
    pub message: String,
}
