//! Server-shaped entity records and their mutation payloads.

pub mod asset_model;
pub mod client;
pub mod tax;
pub mod types;
pub mod user;
