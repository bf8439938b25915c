//! Web layer for the transit catalogue.
//!
//! Exposes stat requests, route search and the network map over HTTP.

mod config;
mod dto;
mod routes;
mod state;
pub mod templates;

pub use config::{ConfigError, DEFAULT_ADDR, DEFAULT_BASE_PATH, ServerConfig};
pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
