//! Application state management

use std::sync::Arc;

use crate::media_storage::ObjectStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Object store holding uploaded images
    pub store: Arc<dyn ObjectStore>,
    /// Base URL prefix public image links are built from
    pub public_base_url: Arc<str>,
}
