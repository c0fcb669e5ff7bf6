//! DTO modules that bridge services with the HTTP layer.

pub mod api;
pub mod client;
pub mod main;
