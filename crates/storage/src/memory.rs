//! In-process [`ObjectStore`] for tests and local development.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{ObjectStore, StorageError};

/// Object store backed by an in-process map.
///
/// Records every `put` key in order so tests can assert on upload
/// sequencing, and supports injected failures to exercise the
/// partial-failure paths of the asset workflow.
#[derive(Default)]
pub struct MemoryObjectStore {
    bucket: String,
    objects: Mutex<HashMap<String, Vec<u8>>>,
    put_log: Mutex<Vec<String>>,
    /// When set, `put` fails for any key containing this substring.
    fail_put_keys_containing: Option<String>,
    /// When true, every `remove` fails.
    fail_removals: bool,
}

impl MemoryObjectStore {
    pub fn new(bucket: &str) -> Self {
        Self {
            bucket: bucket.to_string(),
            ..Self::default()
        }
    }

    /// Make `put` fail for keys containing `fragment`.
    pub fn fail_puts_containing(mut self, fragment: &str) -> Self {
        self.fail_put_keys_containing = Some(fragment.to_string());
        self
    }

    /// Make every `remove` call fail.
    pub fn fail_removals(mut self) -> Self {
        self.fail_removals = true;
        self
    }

    /// Keys written so far, in `put` order (including overwrites).
    pub fn put_log(&self) -> Vec<String> {
        self.put_log.lock().unwrap().clone()
    }

    /// Whether a blob currently exists at `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.objects.lock().unwrap().contains_key(key)
    }

    /// Number of stored blobs.
    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<(), StorageError> {
        if let Some(fragment) = &self.fail_put_keys_containing {
            if key.contains(fragment.as_str()) {
                return Err(StorageError::Upload {
                    key: key.to_string(),
                    message: "injected upload failure".into(),
                });
            }
        }

        self.objects.lock().unwrap().insert(key.to_string(), bytes);
        self.put_log.lock().unwrap().push(key.to_string());
        Ok(())
    }

    async fn remove(&self, keys: &[String]) -> Result<(), StorageError> {
        for key in keys {
            if self.fail_removals {
                return Err(StorageError::Remove {
                    key: key.clone(),
                    message: "injected removal failure".into(),
                });
            }
            self.objects.lock().unwrap().remove(key);
        }
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("memory://{}/{key}", self.bucket)
    }

    fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn put_stores_and_logs_in_order() {
        let store = MemoryObjectStore::new("brand-assets");
        store.put("1/image/1-a.png", vec![1]).await.unwrap();
        store.put("1/image/2-b.png", vec![2]).await.unwrap();

        assert_eq!(store.put_log(), vec!["1/image/1-a.png", "1/image/2-b.png"]);
        assert!(store.contains("1/image/1-a.png"));
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn remove_deletes_blob() {
        let store = MemoryObjectStore::new("brand-assets");
        store.put("k", vec![0]).await.unwrap();
        store.remove(&["k".to_string()]).await.unwrap();
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn injected_put_failure() {
        let store = MemoryObjectStore::new("brand-assets").fail_puts_containing("boom");
        let err = store.put("1/image/1-boom.png", vec![]).await.unwrap_err();
        assert_matches!(err, StorageError::Upload { .. });
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn injected_remove_failure_keeps_blob() {
        let store = MemoryObjectStore::new("brand-assets").fail_removals();
        store.put("k", vec![0]).await.unwrap();
        let err = store.remove(&["k".to_string()]).await.unwrap_err();
        assert_matches!(err, StorageError::Remove { .. });
        assert!(store.contains("k"));
    }

    #[test]
    fn public_url_contains_bucket_marker() {
        let store = MemoryObjectStore::new("brand-assets");
        let url = store.public_url("7/logo/123-mark.svg");
        assert_eq!(url, "memory://brand-assets/7/logo/123-mark.svg");
        assert_eq!(
            brandhub_core::assets::key_from_public_url(&url, "brand-assets").unwrap(),
            "7/logo/123-mark.svg"
        );
    }
}
