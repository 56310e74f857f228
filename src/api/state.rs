//! API server state

use std::sync::Arc;

use crate::store::RecordStore;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Record store serving every guestbook operation
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}
