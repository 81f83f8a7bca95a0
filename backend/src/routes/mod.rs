mod health;
mod image;
mod upload;
mod widget;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Largest accepted upload body (15 MiB)
const MAX_UPLOAD_BYTES: usize = 15 * 1024 * 1024;

/// Creates the router with all handler routes
pub fn handler() -> Router<AppState> {
    Router::new()
        .route("/", get(widget::page))
        .route("/health", get(health::handler))
        .route("/api/upload", post(upload::upload_image))
        .route("/image/{key}", get(image::fetch_image))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}
