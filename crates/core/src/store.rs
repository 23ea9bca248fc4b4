//! Persistence gateway traits consumed by the integrity services.
//!
//! Implementations own the data and set timestamps; the services hold no
//! state and never see backend-specific errors, only [`StoreError`].

use std::future::Future;

use crate::category::Category;
use crate::note::Note;
use crate::types::EntityId;

/// Failure reported by a gateway implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    #[error("foreign key constraint violated: {constraint}")]
    ForeignKeyViolation { constraint: String },

    #[error("storage backend error: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Category persistence.
pub trait CategoryStore: Send + Sync {
    fn list_categories(&self) -> impl Future<Output = StoreResult<Vec<Category>>> + Send;

    fn find_category(
        &self,
        id: EntityId,
    ) -> impl Future<Output = StoreResult<Option<Category>>> + Send;

    /// Exact (case-sensitive) name lookup.
    fn find_category_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = StoreResult<Option<Category>>> + Send;

    fn create_category(&self, name: &str) -> impl Future<Output = StoreResult<Category>> + Send;

    /// Returns `None` if no row has this id.
    fn update_category(
        &self,
        id: EntityId,
        name: &str,
    ) -> impl Future<Output = StoreResult<Option<Category>>> + Send;

    /// Returns `true` if a row was removed.
    fn delete_category(&self, id: EntityId) -> impl Future<Output = StoreResult<bool>> + Send;
}

/// Note persistence.
pub trait NoteStore: Send + Sync {
    fn list_notes(&self) -> impl Future<Output = StoreResult<Vec<Note>>> + Send;

    fn find_note(&self, id: EntityId) -> impl Future<Output = StoreResult<Option<Note>>> + Send;

    fn list_notes_by_category(
        &self,
        category_id: EntityId,
    ) -> impl Future<Output = StoreResult<Vec<Note>>> + Send;

    fn count_notes_by_category(
        &self,
        category_id: EntityId,
    ) -> impl Future<Output = StoreResult<i64>> + Send;

    fn create_note(
        &self,
        title: &str,
        content: &str,
        category_id: EntityId,
    ) -> impl Future<Output = StoreResult<Note>> + Send;

    /// Replaces title, content and category. Returns `None` if no row has this id.
    fn update_note(
        &self,
        id: EntityId,
        title: &str,
        content: &str,
        category_id: EntityId,
    ) -> impl Future<Output = StoreResult<Option<Note>>> + Send;

    /// Returns `true` if a row was removed.
    fn delete_note(&self, id: EntityId) -> impl Future<Output = StoreResult<bool>> + Send;
}
