//! Repository for the `notes_categories` table.

use notekeep_core::types::EntityId;
use sqlx::PgPool;

use crate::models::category::CategoryRow;

/// Column list for `notes_categories` queries.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides data access for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<CategoryRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes_categories ORDER BY name");
        sqlx::query_as::<_, CategoryRow>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<CategoryRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes_categories WHERE id = $1");
        sqlx::query_as::<_, CategoryRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Exact, case-sensitive name match.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<CategoryRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes_categories WHERE name = $1");
        sqlx::query_as::<_, CategoryRow>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, name: &str) -> Result<CategoryRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes_categories (name) \
             VALUES ($1) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CategoryRow>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Rename a category. Returns `None` if the id does not exist.
    pub async fn update(
        pool: &PgPool,
        id: EntityId,
        name: &str,
    ) -> Result<Option<CategoryRow>, sqlx::Error> {
        let query = format!(
            "UPDATE notes_categories SET name = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CategoryRow>(&query)
            .bind(id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category by ID.
    ///
    /// Returns `true` if a row was deleted. Fails with a foreign key
    /// violation while notes still reference it.
    pub async fn delete(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes_categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
