//! Domain logic shared across the brandhub crates.
//!
//! Keeps pure, dependency-light code: shared type aliases, the error
//! taxonomy, brand slug derivation, and storage-key conventions for
//! brand assets.

pub mod assets;
pub mod error;
pub mod slug;
pub mod types;
