//! Headless list/CRUD core for asset-management back-office screens.
//!
//! Every screen of the back office follows the same shape: a paginated grid
//! backed by a REST endpoint, a free-text/structured filter over the loaded
//! page, and add/edit/view drawers with shallow validation. Instead of
//! repeating that per entity, this crate implements the pattern once as a
//! generic [`ListController`](services::controller::ListController) driven
//! by a per-entity [`EntityScreen`](dto::EntityScreen) configuration. The REST backend, authentication, and rendering
//! are external collaborators reached through the
//! [`EntityGateway`](api::EntityGateway) trait.

pub mod api;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod prefs;
pub mod services;

pub use services::controller::ListController;
