//! Request handlers, one module per resource.

pub mod assets;
pub mod auth;
pub mod brands;
pub mod clients;
pub mod dashboard;
pub mod team;
pub mod workflows;
