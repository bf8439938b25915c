//! Application state for the web layer.

use std::sync::Arc;

use crate::requests::TransitBase;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The loaded catalogue, router and map
    pub base: Arc<TransitBase>,
}

impl AppState {
    pub fn new(base: TransitBase) -> Self {
        Self {
            base: Arc::new(base),
        }
    }
}
