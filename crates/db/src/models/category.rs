use notekeep_core::category::Category;
use notekeep_core::types::{EntityId, Timestamp};
use sqlx::FromRow;

/// A row from the `notes_categories` table.
#[derive(Debug, Clone, FromRow)]
pub struct CategoryRow {
    pub id: EntityId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
