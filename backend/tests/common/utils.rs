use async_trait::async_trait;
use axum::response::Response;
use backend::media_storage::{ObjectStore, StoreError, StoreResult, StoredObject};
use bytes::Bytes;
use http_body_util::BodyExt;
use rand::RngCore;

/// Boundary used by the hand-built multipart bodies
pub const MULTIPART_BOUNDARY: &str = "image-host-test-boundary";

/// Builds a `multipart/form-data` body holding a single file part
pub fn multipart_body(
    field_name: &str,
    filename: Option<&str>,
    content_type: &str,
    data: &[u8],
) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());

    let disposition = match filename {
        Some(name) => {
            format!("Content-Disposition: form-data; name=\"{field_name}\"; filename=\"{name}\"\r\n")
        }
        None => format!("Content-Disposition: form-data; name=\"{field_name}\"\r\n"),
    };
    body.extend_from_slice(disposition.as_bytes());
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());

    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    body
}

/// Parse response body to JSON
pub async fn parse_response_body(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Collect the raw response body bytes
pub async fn response_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Generate random payload bytes for uploads
pub fn generate_payload(size: usize) -> Vec<u8> {
    let mut buf = vec![0u8; size];
    rand::rngs::OsRng.fill_bytes(&mut buf);
    buf
}

/// Store whose writes always fail, for fault-injection tests
pub struct FailingStore;

#[async_trait]
impl ObjectStore for FailingStore {
    async fn put(&self, _key: &str, _bytes: Bytes, _content_type: &str) -> StoreResult<()> {
        Err(StoreError::S3Error("injected write failure".to_string()))
    }

    async fn get(&self, _key: &str) -> StoreResult<Option<StoredObject>> {
        Ok(None)
    }
}
