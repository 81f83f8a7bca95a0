use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response, Router};
use backend::{
    media_storage::{MemoryStore, ObjectStore},
    server,
    state::AppState,
};
use tower::ServiceExt;

use super::{multipart_body, MULTIPART_BOUNDARY};

/// Public base URL configured for tests
pub const TEST_PUBLIC_BASE_URL: &str = "http://localhost:8080/image";

/// Initialize tracing for tests
pub fn setup_test_env() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// Builds the full application router (with layers) over the given store
pub fn test_router(store: Arc<dyn ObjectStore>) -> Router {
    setup_test_env();

    let state = AppState {
        store,
        public_base_url: Arc::from(TEST_PUBLIC_BASE_URL),
    };

    server::router(state)
}

/// Base test setup: the real router over an in-memory store
pub struct TestContext {
    pub router: Router,
    pub store: Arc<MemoryStore>,
}

impl TestContext {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let router = test_router(store.clone());
        Self { router, store }
    }

    /// Posts a single file part to the upload endpoint as multipart form data
    pub async fn send_upload_request(
        &self,
        field_name: &str,
        filename: Option<&str>,
        content_type: &str,
        data: &[u8],
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let body = multipart_body(field_name, filename, content_type, data);
        let request = Request::builder()
            .uri("/api/upload")
            .method("POST")
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
            )
            .body(Body::from(body))?;

        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn send_get_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("GET")
            .body(Body::empty())?;
        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    /// Sends a CORS preflight request for the given route
    pub async fn send_preflight_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("OPTIONS")
            .header("Origin", "http://example.com")
            .header("Access-Control-Request-Method", "POST")
            .header("Access-Control-Request-Headers", "content-type")
            .body(Body::empty())?;
        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }
}
