//! Repository for the `notes` table.

use notekeep_core::types::EntityId;
use sqlx::PgPool;

use crate::models::note::NoteRow;

/// Column list for `notes` queries.
const COLUMNS: &str = "id, title, content, category_id, created_at, updated_at";

/// Provides data access for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// List all notes, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<NoteRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes ORDER BY created_at DESC, id");
        sqlx::query_as::<_, NoteRow>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<NoteRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1");
        sqlx::query_as::<_, NoteRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List notes in a category, newest first.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: EntityId,
    ) -> Result<Vec<NoteRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes WHERE category_id = $1 \
             ORDER BY created_at DESC, id"
        );
        sqlx::query_as::<_, NoteRow>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    pub async fn count_by_category(pool: &PgPool, category_id: EntityId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM notes WHERE category_id = $1")
            .bind(category_id)
            .fetch_one(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        title: &str,
        content: &str,
        category_id: EntityId,
    ) -> Result<NoteRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (title, content, category_id) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NoteRow>(&query)
            .bind(title)
            .bind(content)
            .bind(category_id)
            .fetch_one(pool)
            .await
    }

    /// Replace title, content and category. Returns `None` if the id does not exist.
    pub async fn update(
        pool: &PgPool,
        id: EntityId,
        title: &str,
        content: &str,
        category_id: EntityId,
    ) -> Result<Option<NoteRow>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET \
                 title = $2, \
                 content = $3, \
                 category_id = $4, \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NoteRow>(&query)
            .bind(id)
            .bind(title)
            .bind(content)
            .bind(category_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a note by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
