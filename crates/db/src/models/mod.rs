//! Entity models and request DTOs, one module per table.

pub mod asset;
pub mod brand;
pub mod client;
pub mod session;
pub mod team_member;
pub mod user;
pub mod workflow;
