//! Retrieval handler: serves previously stored images back out

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use tracing::{debug, instrument};

use crate::{state::AppState, types::AppError};

/// Serves the object stored under `key`
///
/// Responds with the stored bytes, the content type recorded at write time,
/// the store's entity tag when present, and a permissive cross-origin
/// header so the image embeds anywhere.
#[instrument(skip(state))]
pub async fn fetch_image(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Response, AppError> {
    let Some(object) = state.store.get(&key).await? else {
        return Err(AppError::new(
            StatusCode::NOT_FOUND,
            "not_found",
            "Image not found",
        ));
    };

    debug!(
        "Serving image {} ({} bytes, {})",
        key,
        object.bytes.len(),
        object.content_type
    );

    let mut response = Response::builder()
        .header(header::CONTENT_TYPE, object.content_type)
        .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
    if let Some(etag) = object.etag {
        response = response.header(header::ETAG, etag);
    }

    response.body(Body::from(object.bytes)).map_err(|e| {
        AppError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            e.to_string(),
        )
    })
}
