//! JSON request pipeline.
//!
//! A base document describes stops, buses and settings; a stat document
//! carries queries answered against the base built from it.

mod base;
mod dto;
mod handler;

pub use base::{TransitBase, build_catalogue};
pub use dto::*;
pub use handler::RequestHandler;

use crate::router::RouterError;

/// Error from reading or answering requests.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The request document is not valid JSON of the expected shape
    #[error("invalid request document: {0}")]
    Json(#[from] serde_json::Error),

    /// Route query failed before searching
    #[error(transparent)]
    Router(#[from] RouterError),

    /// Map requested but the base has no render settings
    #[error("map not available: render settings missing")]
    MapNotConfigured,
}

/// Parse a `process_requests` document.
pub fn parse_process_document(input: &str) -> Result<ProcessDocument, RequestError> {
    Ok(serde_json::from_str(input)?)
}

/// Parse a `make_base` document.
pub fn parse_make_base_document(input: &str) -> Result<MakeBaseDocument, RequestError> {
    Ok(serde_json::from_str(input)?)
}
