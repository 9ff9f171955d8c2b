//! Authentication building blocks: JWT access tokens, refresh-token
//! helpers, and Argon2id password hashing.

pub mod jwt;
pub mod password;
