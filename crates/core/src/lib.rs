//! Domain layer for the notes service.
//!
//! Holds the entity types, field validation, the persistence gateway traits,
//! and the integrity services that enforce uniqueness, existence and
//! cascading deletion on top of any gateway implementation.

pub mod category;
pub mod error;
pub mod note;
pub mod services;
pub mod store;
pub mod types;
