//! Note integrity: required fields and a resolvable category reference.
//!
//! Notes are returned joined with their category. The join is explicit:
//! the note is fetched first, then its category by id.

use std::collections::HashMap;
use std::sync::Arc;

use crate::category::Category;
use crate::error::CoreError;
use crate::note::{validate_note_fields, Note, NoteWithCategory};
use crate::services::{store_failure, CategoryService};
use crate::store::{CategoryStore, NoteStore, StoreError};
use crate::types::{parse_entity_id, EntityId};

const ENTITY: &str = "Note";

pub struct NoteService<S> {
    store: Arc<S>,
    categories: CategoryService<S>,
}

impl<S> Clone for NoteService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            categories: self.categories.clone(),
        }
    }
}

impl<S: CategoryStore + NoteStore> NoteService<S> {
    pub fn new(store: Arc<S>) -> Self {
        let categories = CategoryService::new(Arc::clone(&store));
        Self { store, categories }
    }

    pub async fn list_all(&self) -> Result<Vec<NoteWithCategory>, CoreError> {
        const CONTEXT: &str = "Failed to fetch notes";

        let notes = self
            .store
            .list_notes()
            .await
            .map_err(|e| store_failure(CONTEXT, e))?;
        let categories: HashMap<EntityId, Category> = self
            .store
            .list_categories()
            .await
            .map_err(|e| store_failure(CONTEXT, e))?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        // The two reads are not a snapshot: a note whose category was
        // removed in between is dropped from the listing.
        Ok(notes
            .into_iter()
            .filter_map(|note| match categories.get(&note.category_id) {
                Some(category) => Some(NoteWithCategory {
                    category: category.clone(),
                    note,
                }),
                None => {
                    tracing::warn!(
                        note_id = %note.id,
                        category_id = %note.category_id,
                        "Skipping note whose category vanished during listing"
                    );
                    None
                }
            })
            .collect())
    }

    pub async fn get_by_id(&self, id: &str) -> Result<NoteWithCategory, CoreError> {
        const CONTEXT: &str = "Failed to fetch note";

        let note_id = parse_entity_id(id).ok_or_else(|| not_found(id))?;
        let note = self
            .store
            .find_note(note_id)
            .await
            .map_err(|e| store_failure(CONTEXT, e))?
            .ok_or_else(|| not_found(id))?;

        self.attach_category(note, CONTEXT).await
    }

    /// All notes referencing a category. An unknown category is an error,
    /// not an empty list.
    pub async fn list_by_category(
        &self,
        category_id: &str,
    ) -> Result<Vec<NoteWithCategory>, CoreError> {
        let category = self.categories.resolve_reference(category_id).await?;

        let notes = self
            .store
            .list_notes_by_category(category.id)
            .await
            .map_err(|e| store_failure("Failed to fetch notes by category", e))?;

        Ok(notes
            .into_iter()
            .map(|note| NoteWithCategory {
                note,
                category: category.clone(),
            })
            .collect())
    }

    pub async fn create(
        &self,
        title: &str,
        content: &str,
        category_id: &str,
    ) -> Result<NoteWithCategory, CoreError> {
        let fields = validate_note_fields(title, content, category_id)?;
        let category = self
            .categories
            .resolve_reference(&fields.category_id)
            .await?;

        let note = self
            .store
            .create_note(&fields.title, &fields.content, category.id)
            .await
            .map_err(|e| write_failure("Failed to create note", &fields.category_id, e))?;

        tracing::info!(note_id = %note.id, category_id = %category.id, "Note created");
        Ok(NoteWithCategory { note, category })
    }

    /// Replace title, content and category of an existing note.
    pub async fn update(
        &self,
        id: &str,
        title: &str,
        content: &str,
        category_id: &str,
    ) -> Result<NoteWithCategory, CoreError> {
        const CONTEXT: &str = "Failed to update note";

        let fields = validate_note_fields(title, content, category_id)?;

        let note_id = parse_entity_id(id).ok_or_else(|| not_found(id))?;
        self.store
            .find_note(note_id)
            .await
            .map_err(|e| store_failure(CONTEXT, e))?
            .ok_or_else(|| not_found(id))?;

        let category = self
            .categories
            .resolve_reference(&fields.category_id)
            .await?;

        let note = self
            .store
            .update_note(note_id, &fields.title, &fields.content, category.id)
            .await
            .map_err(|e| write_failure(CONTEXT, &fields.category_id, e))?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(%note_id, category_id = %category.id, "Note updated");
        Ok(NoteWithCategory { note, category })
    }

    pub async fn delete(&self, id: &str) -> Result<(), CoreError> {
        let note_id = parse_entity_id(id).ok_or_else(|| not_found(id))?;

        let deleted = self
            .store
            .delete_note(note_id)
            .await
            .map_err(|e| store_failure("Failed to delete note", e))?;
        if !deleted {
            return Err(not_found(id));
        }

        tracing::info!(%note_id, "Note deleted");
        Ok(())
    }

    async fn attach_category(
        &self,
        note: Note,
        context: &'static str,
    ) -> Result<NoteWithCategory, CoreError> {
        let category = self
            .store
            .find_category(note.category_id)
            .await
            .map_err(|e| store_failure(context, e))?
            .ok_or_else(|| dangling_reference(&note, context))?;
        Ok(NoteWithCategory { note, category })
    }
}

fn not_found(id: &str) -> CoreError {
    CoreError::NotFound {
        entity: ENTITY,
        id: id.to_string(),
    }
}

/// A stored note whose category is gone. The foreign key should make this
/// unreachable.
fn dangling_reference(note: &Note, context: &'static str) -> CoreError {
    tracing::error!(
        note_id = %note.id,
        category_id = %note.category_id,
        "Note references a missing category"
    );
    CoreError::Internal(context.to_string())
}

/// A foreign-key failure on write means the category was deleted after it
/// was resolved.
fn write_failure(context: &'static str, category_id: &str, err: StoreError) -> CoreError {
    match err {
        StoreError::ForeignKeyViolation { .. } => CoreError::CategoryNotFound {
            id: category_id.to_string(),
        },
        other => store_failure(context, other),
    }
}
