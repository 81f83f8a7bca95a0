//! Upload handler: one multipart POST in, one stored object and URL out

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use mime::Mime;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{media_storage::generate_object_key, state::AppState, types::AppError};

/// Form field the image part is expected under
const IMAGE_FIELD: &str = "image";

/// JSON body of a successful upload
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Public URL of the stored image
    pub url: String,
}

/// Accepts one image as `multipart/form-data` and stores it
///
/// Validation short-circuits in order: the `image` field must be present,
/// and its declared content type must be `image/*`. The image is then
/// written to the object store in a single put under a freshly derived key,
/// and the public URL is returned.
#[instrument(skip_all)]
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut image = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(IMAGE_FIELD) {
            let filename = field.file_name().map(ToOwned::to_owned);
            let content_type = field.content_type().map(ToOwned::to_owned);
            let bytes = field.bytes().await?;
            image = Some((filename, content_type, bytes));
            break;
        }
    }

    let Some((filename, content_type, bytes)) = image else {
        return Err(AppError::new(
            StatusCode::BAD_REQUEST,
            "no_image",
            "No image provided",
        ));
    };

    info!(
        filename = filename.as_deref().unwrap_or_default(),
        content_type = content_type.as_deref().unwrap_or_default(),
        size = bytes.len(),
        "Received image upload"
    );

    let content_type = content_type.unwrap_or_default();
    let is_image = content_type
        .parse::<Mime>()
        .is_ok_and(|m| m.type_() == mime::IMAGE);
    if !is_image {
        return Err(AppError::new(
            StatusCode::BAD_REQUEST,
            "invalid_file_type",
            "Invalid file type. Only images are allowed.",
        ));
    }

    let key = generate_object_key(filename.as_deref());
    debug!("Writing upload to store under key: {key}");
    state.store.put(&key, bytes, &content_type).await?;

    let url = format!("{}/{}", state.public_base_url.trim_end_matches('/'), key);
    info!("Stored image {key} at {url}");

    Ok(Json(UploadResponse { url }))
}
