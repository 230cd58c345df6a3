//! Shared state for the HTTP handlers.

use std::sync::Arc;

use crate::query::QueryService;

/// Shared application state.
pub struct AppState<C> {
    pub service: Arc<QueryService<C>>,
}

impl<C> AppState<C> {
    pub fn new(service: QueryService<C>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

// Manual impl: cloning the state must not require `C: Clone`.
impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}
