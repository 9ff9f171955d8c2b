//! Blob store boundary for brand asset files.
//!
//! Exposes the [`ObjectStore`] trait with the three operations the asset
//! workflow needs (`put`, `remove`, `public_url`) and two
//! implementations: [`S3ObjectStore`] for S3-compatible services and
//! [`MemoryObjectStore`] for tests and local development.
//!
//! No retry or backpressure logic lives here; failures propagate as-is
//! to the caller, which surfaces them to the user.

pub mod memory;
pub mod s3;

pub use memory::MemoryObjectStore;
pub use s3::S3ObjectStore;

use async_trait::async_trait;

/// Error returned by object store operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The underlying store rejected or failed an upload.
    #[error("Blob upload failed for '{key}': {message}")]
    Upload { key: String, message: String },

    /// The underlying store rejected or failed a removal.
    #[error("Blob removal failed for '{key}': {message}")]
    Remove { key: String, message: String },
}

/// External object store addressed by key, with public-URL derivation.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write a blob at `key`, overwriting any existing object.
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<(), StorageError>;

    /// Remove the blobs at `keys`, in order. Stops at the first failure.
    async fn remove(&self, keys: &[String]) -> Result<(), StorageError>;

    /// Derive the public URL for `key`. Pure; performs no I/O.
    fn public_url(&self, key: &str) -> String;

    /// Name of the bucket this store writes to. Used as the marker when
    /// re-deriving a storage key from a stored public URL.
    fn bucket(&self) -> &str;
}

/// Object store configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Bucket holding asset blobs (default: `brand-assets`).
    pub bucket: String,
    /// Base URL public asset URLs are derived from
    /// (default: `http://localhost:9000`).
    pub public_base_url: String,
    /// Optional custom S3 endpoint (e.g. MinIO); when unset the SDK's
    /// default endpoint resolution applies.
    pub endpoint_url: Option<String>,
}

impl StorageConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                  |
    /// |---------------------------|--------------------------|
    /// | `ASSET_BUCKET`            | `brand-assets`           |
    /// | `ASSET_PUBLIC_BASE_URL`   | `http://localhost:9000`  |
    /// | `ASSET_STORAGE_ENDPOINT`  | (unset)                  |
    pub fn from_env() -> Self {
        let bucket = std::env::var("ASSET_BUCKET")
            .unwrap_or_else(|_| brandhub_core::assets::ASSET_BUCKET.into());

        let public_base_url = std::env::var("ASSET_PUBLIC_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:9000".into())
            .trim_end_matches('/')
            .to_string();

        let endpoint_url = std::env::var("ASSET_STORAGE_ENDPOINT").ok();

        Self {
            bucket,
            public_base_url,
            endpoint_url,
        }
    }
}
