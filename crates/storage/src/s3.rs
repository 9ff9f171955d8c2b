//! S3-compatible [`ObjectStore`] implementation.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;

use crate::{ObjectStore, StorageConfig, StorageError};

/// Object store backed by an S3-compatible service (AWS S3, MinIO, etc.).
///
/// Public URLs are `{public_base_url}/{bucket}/{key}`, so the bucket name
/// acts as the marker used when re-deriving keys from stored URLs.
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
    bucket: String,
    public_base_url: String,
}

impl S3ObjectStore {
    /// Build a store from SDK environment configuration plus [`StorageConfig`].
    pub async fn from_env(config: &StorageConfig) -> Self {
        let sdk_config = aws_config::load_from_env().await;

        let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config)
            // Path-style addressing keeps MinIO and other self-hosted
            // S3 implementations working without DNS bucket aliases.
            .force_path_style(true);
        if let Some(endpoint) = &config.endpoint_url {
            builder = builder.endpoint_url(endpoint);
        }

        let client = aws_sdk_s3::Client::from_conf(builder.build());

        Self {
            client,
            bucket: config.bucket.clone(),
            public_base_url: config.public_base_url.clone(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<(), StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError::Upload {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!(key, bucket = %self.bucket, "Blob uploaded");
        Ok(())
    }

    async fn remove(&self, keys: &[String]) -> Result<(), StorageError> {
        for key in keys {
            self.client
                .delete_object()
                .bucket(&self.bucket)
                .key(key)
                .send()
                .await
                .map_err(|e| StorageError::Remove {
                    key: key.clone(),
                    message: e.to_string(),
                })?;

            tracing::debug!(key, bucket = %self.bucket, "Blob removed");
        }
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}/{key}", self.public_base_url, self.bucket)
    }

    fn bucket(&self) -> &str {
        &self.bucket
    }
}
