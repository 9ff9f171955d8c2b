//! Storage-key conventions for brand assets.
//!
//! Asset blobs live in a single bucket under keys of the form
//! `{brand_id}/{kind}/{epoch_ms}-{original_filename}`. The millisecond
//! timestamp makes keys unique without a coordination step. Deletion
//! works backwards from a stored public URL by locating the bucket-name
//! marker and taking the remainder as the key.

use crate::error::CoreError;
use crate::types::DbId;

/// Name of the bucket holding all brand asset blobs.
pub const ASSET_BUCKET: &str = "brand-assets";

/// File extensions accepted for upload (images plus web font formats).
const ALLOWED_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "svg", "gif", "webp", "ttf", "otf", "woff", "woff2",
];

/// Build the storage key for an uploaded asset.
///
/// Convention: `{brand_id}/{kind}/{epoch_ms}-{filename}`.
///
/// # Examples
///
/// ```
/// use brandhub_core::assets::storage_key;
///
/// assert_eq!(storage_key(7, "logo", 1700000000000, "mark.svg"), "7/logo/1700000000000-mark.svg");
/// ```
pub fn storage_key(brand_id: DbId, kind: &str, epoch_ms: i64, filename: &str) -> String {
    format!("{brand_id}/{kind}/{epoch_ms}-{filename}")
}

/// Extract the storage key from a stored public URL.
///
/// Takes the substring following the `/{bucket}/` marker. Returns an
/// error if the marker is absent or nothing follows it, since a key
/// cannot be recovered from such a URL.
pub fn key_from_public_url(url: &str, bucket: &str) -> Result<String, CoreError> {
    let marker = format!("/{bucket}/");
    match url.split_once(&marker) {
        Some((_, key)) if !key.is_empty() => Ok(key.to_string()),
        _ => Err(CoreError::Validation(format!(
            "Cannot derive storage key: URL does not contain '{marker}'"
        ))),
    }
}

/// Check an original filename against the upload allow-list.
///
/// The extension comparison is case-insensitive. Files with no extension
/// are rejected.
pub fn validate_upload_filename(filename: &str) -> Result<(), CoreError> {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match extension {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => Err(CoreError::Validation(format!(
            "File type not allowed for '{filename}'. Accepted extensions: {ALLOWED_EXTENSIONS:?}"
        ))),
    }
}
