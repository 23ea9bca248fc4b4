//! [`PgStore`]: the PostgreSQL-backed persistence gateway.

use notekeep_core::category::Category;
use notekeep_core::note::Note;
use notekeep_core::store::{CategoryStore, NoteStore, StoreError, StoreResult};
use notekeep_core::types::EntityId;

use crate::repositories::{CategoryRepo, NoteRepo};
use crate::DbPool;

/// PostgreSQL error code for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL error code for foreign key violations.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Gateway over a connection pool. Cheap to clone.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Classify a sqlx error into the gateway's error kinds.
///
/// Constraint violations keep their constraint name so services can tell
/// a duplicate name from a dangling category reference; everything else is
/// flattened into [`StoreError::Backend`].
pub fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        let constraint = db_err.constraint().unwrap_or("unknown").to_string();
        match db_err.code().as_deref() {
            Some(UNIQUE_VIOLATION) => return StoreError::UniqueViolation { constraint },
            Some(FOREIGN_KEY_VIOLATION) => return StoreError::ForeignKeyViolation { constraint },
            _ => {}
        }
    }
    StoreError::Backend(err.to_string())
}

impl CategoryStore for PgStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let rows = CategoryRepo::list(&self.pool).await.map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn find_category(&self, id: EntityId) -> StoreResult<Option<Category>> {
        let row = CategoryRepo::find_by_id(&self.pool, id)
            .await
            .map_err(map_sqlx_error)?;
        Ok(row.map(Category::from))
    }

    async fn find_category_by_name(&self, name: &str) -> StoreResult<Option<Category>> {
        let row = CategoryRepo::find_by_name(&self.pool, name)
            .await
            .map_err(map_sqlx_error)?;
        Ok(row.map(Category::from))
    }

    async fn create_category(&self, name: &str) -> StoreResult<Category> {
        CategoryRepo::create(&self.pool, name)
            .await
            .map(Category::from)
            .map_err(map_sqlx_error)
    }

    async fn update_category(&self, id: EntityId, name: &str) -> StoreResult<Option<Category>> {
        let row = CategoryRepo::update(&self.pool, id, name)
            .await
            .map_err(map_sqlx_error)?;
        Ok(row.map(Category::from))
    }

    async fn delete_category(&self, id: EntityId) -> StoreResult<bool> {
        CategoryRepo::delete(&self.pool, id)
            .await
            .map_err(map_sqlx_error)
    }
}

impl NoteStore for PgStore {
    async fn list_notes(&self) -> StoreResult<Vec<Note>> {
        let rows = NoteRepo::list(&self.pool).await.map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Note::from).collect())
    }

    async fn find_note(&self, id: EntityId) -> StoreResult<Option<Note>> {
        let row = NoteRepo::find_by_id(&self.pool, id)
            .await
            .map_err(map_sqlx_error)?;
        Ok(row.map(Note::from))
    }

    async fn list_notes_by_category(&self, category_id: EntityId) -> StoreResult<Vec<Note>> {
        let rows = NoteRepo::list_by_category(&self.pool, category_id)
            .await
            .map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Note::from).collect())
    }

    async fn count_notes_by_category(&self, category_id: EntityId) -> StoreResult<i64> {
        NoteRepo::count_by_category(&self.pool, category_id)
            .await
            .map_err(map_sqlx_error)
    }

    async fn create_note(
        &self,
        title: &str,
        content: &str,
        category_id: EntityId,
    ) -> StoreResult<Note> {
        NoteRepo::create(&self.pool, title, content, category_id)
            .await
            .map(Note::from)
            .map_err(map_sqlx_error)
    }

    async fn update_note(
        &self,
        id: EntityId,
        title: &str,
        content: &str,
        category_id: EntityId,
    ) -> StoreResult<Option<Note>> {
        let row = NoteRepo::update(&self.pool, id, title, content, category_id)
            .await
            .map_err(map_sqlx_error)?;
        Ok(row.map(Note::from))
    }

    async fn delete_note(&self, id: EntityId) -> StoreResult<bool> {
        NoteRepo::delete(&self.pool, id)
            .await
            .map_err(map_sqlx_error)
    }
}
