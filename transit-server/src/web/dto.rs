//! Request and response types for the HTTP API.

use serde::{Deserialize, Serialize};

/// Query string of `GET /route`.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteQuery {
    pub from: String,
    pub to: String,
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
