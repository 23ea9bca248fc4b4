//! Cascading deletion of every note in a category.
//!
//! Notes are removed one at a time, each delete independently fallible.
//! There is no transaction: a failure part-way leaves the already-deleted
//! notes deleted, and the category itself is never touched.

use std::sync::Arc;

use crate::error::CoreError;
use crate::services::{store_failure, CategoryService};
use crate::store::{CategoryStore, NoteStore};
use crate::types::EntityId;

/// Result of a completed cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeOutcome {
    pub category_id: EntityId,
    /// Notes actually removed by this call.
    pub deleted: u64,
}

pub struct CascadeDeleter<S> {
    store: Arc<S>,
    categories: CategoryService<S>,
}

impl<S> Clone for CascadeDeleter<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            categories: self.categories.clone(),
        }
    }
}

impl<S: CategoryStore + NoteStore> CascadeDeleter<S> {
    pub fn new(store: Arc<S>) -> Self {
        let categories = CategoryService::new(Arc::clone(&store));
        Self { store, categories }
    }

    /// Delete every note owned by `category_id`.
    ///
    /// Fails with [`CoreError::CategoryNotFound`] for an unknown category and
    /// [`CoreError::EmptyCategory`] when it owns no notes. The first gateway
    /// error stops the cascade without retrying.
    pub async fn delete_all_in_category(
        &self,
        category_id: &str,
    ) -> Result<CascadeOutcome, CoreError> {
        const CONTEXT: &str = "Failed to delete notes by category";

        let category = self.categories.resolve_reference(category_id).await?;

        let count = self
            .store
            .count_notes_by_category(category.id)
            .await
            .map_err(|e| store_failure(CONTEXT, e))?;
        if count == 0 {
            return Err(CoreError::EmptyCategory {
                id: category_id.to_string(),
            });
        }

        let notes = self
            .store
            .list_notes_by_category(category.id)
            .await
            .map_err(|e| store_failure(CONTEXT, e))?;
        let total = notes.len();

        let mut deleted: u64 = 0;
        for note in notes {
            match self.store.delete_note(note.id).await {
                Ok(true) => deleted += 1,
                // Removed concurrently; the goal state already holds.
                Ok(false) => {
                    tracing::debug!(note_id = %note.id, "Note already gone during cascade");
                }
                Err(err) => {
                    tracing::warn!(
                        category_id = %category.id,
                        note_id = %note.id,
                        deleted,
                        total,
                        error = %err,
                        "Cascade delete stopped part-way"
                    );
                    return Err(CoreError::Internal(format!(
                        "{CONTEXT}: removed {deleted} of {total} notes before failing"
                    )));
                }
            }
        }

        tracing::info!(category_id = %category.id, deleted, "Notes in category deleted");
        Ok(CascadeOutcome {
            category_id: category.id,
            deleted,
        })
    }
}
