#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The addressed entity does not exist.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// A category referenced by another entity does not exist.
    #[error("Category not found: {id}")]
    CategoryNotFound { id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Delete was requested for a category that still owns notes.
    #[error("Category {id} still has notes")]
    CategoryInUse { id: String },

    /// Cascade delete was requested for a category that owns no notes.
    #[error("No notes found in category {id}")]
    EmptyCategory { id: String },

    #[error("Internal error: {0}")]
    Internal(String),
}
