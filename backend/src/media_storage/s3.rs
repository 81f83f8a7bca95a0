//! S3-backed object store

use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_s3::{
    error::SdkError, operation::get_object::GetObjectError, primitives::ByteStream,
    Client as S3Client,
};
use bytes::Bytes;
use tracing::{debug, error};

use super::{ObjectStore, StoreError, StoreResult, StoredObject};

/// Content type assumed when the store recorded none
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Object store backed by an S3 bucket
pub struct S3ObjectStore {
    s3_client: Arc<S3Client>,
    bucket_name: String,
}

impl S3ObjectStore {
    /// Creates a new S3-backed object store
    ///
    /// # Arguments
    ///
    /// * `s3_client` - Pre-configured S3 client
    /// * `bucket_name` - S3 bucket name for image storage
    #[must_use]
    pub const fn new(s3_client: Arc<S3Client>, bucket_name: String) -> Self {
        Self {
            s3_client,
            bucket_name,
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put(&self, key: &str, bytes: Bytes, content_type: &str) -> StoreResult<()> {
        debug!(
            "Writing object: {} ({} bytes, {})",
            key,
            bytes.len(),
            content_type
        );

        self.s3_client
            .put_object()
            .bucket(&self.bucket_name)
            .key(key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to write object {}: {}", key, e);
                StoreError::from(e)
            })?;

        Ok(())
    }

    async fn get(&self, key: &str) -> StoreResult<Option<StoredObject>> {
        debug!("Reading object: {}", key);

        let result = self
            .s3_client
            .get_object()
            .bucket(&self.bucket_name)
            .key(key)
            .send()
            .await;

        match result {
            Ok(output) => {
                let content_type = output
                    .content_type()
                    .unwrap_or(FALLBACK_CONTENT_TYPE)
                    .to_owned();
                let etag = output.e_tag().map(ToOwned::to_owned);
                let bytes = output
                    .body
                    .collect()
                    .await
                    .map_err(|e| StoreError::S3Error(format!("Failed to read object body: {e}")))?
                    .into_bytes();

                Ok(Some(StoredObject {
                    bytes,
                    content_type,
                    etag,
                }))
            }
            // A missing key is expected for stale or mistyped URLs
            Err(SdkError::ServiceError(service_err))
                if matches!(service_err.err(), GetObjectError::NoSuchKey(_)) =>
            {
                debug!("Object does not exist: {}", key);
                Ok(None)
            }
            Err(SdkError::ServiceError(service_err))
                if service_err.raw().status().as_u16() >= 500 =>
            {
                error!("Upstream error reading object {}: {:?}", key, service_err);
                Err(StoreError::UpstreamError(format!("{service_err:?}")))
            }
            Err(e) => {
                error!("Failed to read object {}: {}", key, e);
                Err(StoreError::from(e))
            }
        }
    }
}
