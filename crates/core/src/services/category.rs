//! Category integrity: non-empty, unique names and existence by id.

use std::sync::Arc;

use crate::category::{normalize_category_name, Category};
use crate::error::CoreError;
use crate::services::store_failure;
use crate::store::{CategoryStore, StoreError};
use crate::types::{parse_entity_id, EntityId};

const ENTITY: &str = "Category";

const DUPLICATE_NAME: &str = "A category with this name already exists";

pub struct CategoryService<S> {
    store: Arc<S>,
}

impl<S> Clone for CategoryService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: CategoryStore> CategoryService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> Result<Vec<Category>, CoreError> {
        self.store
            .list_categories()
            .await
            .map_err(|e| store_failure("Failed to fetch notes categories", e))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Category, CoreError> {
        let not_found = || CoreError::NotFound {
            entity: ENTITY,
            id: id.to_string(),
        };
        let category_id = parse_entity_id(id).ok_or_else(not_found)?;

        self.store
            .find_category(category_id)
            .await
            .map_err(|e| store_failure("Failed to fetch notes category", e))?
            .ok_or_else(not_found)
    }

    /// Resolve a category referenced from another entity.
    ///
    /// Same as [`get_by_id`](Self::get_by_id) but a miss is reported as
    /// [`CoreError::CategoryNotFound`].
    pub async fn resolve_reference(&self, id: &str) -> Result<Category, CoreError> {
        self.get_by_id(id).await.map_err(|err| match err {
            CoreError::NotFound { id, .. } => CoreError::CategoryNotFound { id },
            other => other,
        })
    }

    pub async fn create(&self, name: &str) -> Result<Category, CoreError> {
        let name = normalize_category_name(name)?;

        let existing = self
            .store
            .find_category_by_name(&name)
            .await
            .map_err(|e| store_failure("Failed to create notes category", e))?;
        if existing.is_some() {
            return Err(CoreError::Conflict(DUPLICATE_NAME.to_string()));
        }

        let category = self
            .store
            .create_category(&name)
            .await
            .map_err(|e| write_failure("Failed to create notes category", e))?;

        tracing::info!(category_id = %category.id, name = %category.name, "Category created");
        Ok(category)
    }

    /// Rename a category. Renaming to its own current name is not a conflict.
    pub async fn update(&self, id: &str, name: &str) -> Result<Category, CoreError> {
        let name = normalize_category_name(name)?;
        let current = self.get_by_id(id).await?;

        let holder = self
            .store
            .find_category_by_name(&name)
            .await
            .map_err(|e| store_failure("Failed to update notes category", e))?;
        if holder.is_some_and(|other| other.id != current.id) {
            return Err(CoreError::Conflict(DUPLICATE_NAME.to_string()));
        }

        let category = self
            .store
            .update_category(current.id, &name)
            .await
            .map_err(|e| write_failure("Failed to update notes category", e))?
            .ok_or_else(|| CoreError::NotFound {
                entity: ENTITY,
                id: id.to_string(),
            })?;

        tracing::info!(category_id = %category.id, name = %category.name, "Category renamed");
        Ok(category)
    }

    /// Remove a category. Dependent notes are not touched; see
    /// [`CascadeDeleter`](crate::services::CascadeDeleter).
    pub async fn delete(&self, id: &str) -> Result<(), CoreError> {
        let not_found = || CoreError::NotFound {
            entity: ENTITY,
            id: id.to_string(),
        };
        let category_id: EntityId = parse_entity_id(id).ok_or_else(not_found)?;

        let deleted = self
            .store
            .delete_category(category_id)
            .await
            .map_err(|err| match err {
                StoreError::ForeignKeyViolation { .. } => CoreError::CategoryInUse {
                    id: id.to_string(),
                },
                other => store_failure("Failed to delete notes category", other),
            })?;
        if !deleted {
            return Err(not_found());
        }

        tracing::info!(%category_id, "Category deleted");
        Ok(())
    }
}

/// Map a failed insert/update. The storage-level unique index is the
/// authority on name uniqueness when two writers race past the lookup.
fn write_failure(context: &'static str, err: StoreError) -> CoreError {
    match err {
        StoreError::UniqueViolation { .. } => CoreError::Conflict(DUPLICATE_NAME.to_string()),
        other => store_failure(context, other),
    }
}
