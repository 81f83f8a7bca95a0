//! Browser upload widget page

use axum::response::Html;

/// Serves the upload widget, a self-contained page that collects image
/// files from drag-drop, paste, or the file picker and drives the upload
/// endpoint
pub async fn page() -> Html<&'static str> {
    Html(include_str!("../../assets/upload.html"))
}
