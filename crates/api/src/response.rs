//! Response bodies shared across handlers.
//!
//! Entities are returned bare; deletions acknowledge with a message.

use serde::Serialize;
use utoipa::ToSchema;

/// `{ "message": ... }` acknowledgment for deletions.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(value_type = String)]
    pub message: &'static str,
}

/// Acknowledgment for a cascade delete, with the number of notes removed.
#[derive(Debug, Serialize, ToSchema)]
pub struct CascadeDeleteResponse {
    #[schema(value_type = String)]
    pub message: &'static str,
    pub deleted: u64,
}
