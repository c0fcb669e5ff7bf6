//! Domain aggregates exposed by the CRM service layer.

pub mod client;
pub mod communication;
pub mod financial;
pub mod legacy;
pub mod note;
pub mod types;
