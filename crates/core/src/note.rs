//! Note entity, the joined note/category view, and note field validation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::category::Category;
use crate::error::CoreError;
use crate::types::{EntityId, Timestamp};

/// Maximum length of a note title (matches the `VARCHAR(255)` column).
pub const MAX_NOTE_TITLE_LENGTH: usize = 255;

/// A titled note belonging to exactly one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[schema(value_type = String, format = Uuid)]
    pub id: EntityId,
    pub title: String,
    pub content: String,
    #[schema(value_type = String, format = Uuid)]
    pub category_id: EntityId,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

/// A note with its owning category attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct NoteWithCategory {
    #[serde(flatten)]
    pub note: Note,
    pub category: Category,
}

/// Trimmed, non-empty note input. The category id is still unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFields {
    pub title: String,
    pub content: String,
    pub category_id: String,
}

/// Trim and check the three required note fields.
///
/// Fields are checked in the order title, content, category id, and the
/// first failure wins. Category existence is not checked here.
pub fn validate_note_fields(
    title: &str,
    content: &str,
    category_id: &str,
) -> Result<NoteFields, CoreError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(CoreError::Validation(
            "Title is required and cannot be empty".to_string(),
        ));
    }
    if title.chars().count() > MAX_NOTE_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Title exceeds maximum length of {MAX_NOTE_TITLE_LENGTH} characters"
        )));
    }

    let content = content.trim();
    if content.is_empty() {
        return Err(CoreError::Validation(
            "Content is required and cannot be empty".to_string(),
        ));
    }

    let category_id = category_id.trim();
    if category_id.is_empty() {
        return Err(CoreError::Validation("Category ID is required".to_string()));
    }

    Ok(NoteFields {
        title: title.to_string(),
        content: content.to_string(),
        category_id: category_id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn returns_trimmed_fields() {
        let fields = validate_note_fields(" T ", "\tC\n", " cat ").unwrap();
        assert_eq!(
            fields,
            NoteFields {
                title: "T".to_string(),
                content: "C".to_string(),
                category_id: "cat".to_string(),
            }
        );
    }

    #[test]
    fn empty_title_reported_first() {
        let err = validate_note_fields(" ", "", "").unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.starts_with("Title"));
    }

    #[test]
    fn empty_content_rejected() {
        let err = validate_note_fields("T", "   ", "cat").unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.starts_with("Content"));
    }

    #[test]
    fn empty_category_id_rejected() {
        let err = validate_note_fields("T", "C", "  ").unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.starts_with("Category ID"));
    }

    #[test]
    fn overlong_title_rejected() {
        let title = "t".repeat(MAX_NOTE_TITLE_LENGTH + 1);
        assert_matches!(
            validate_note_fields(&title, "C", "cat"),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn long_content_accepted() {
        let content = "c".repeat(10_000);
        assert!(validate_note_fields("T", &content, "cat").is_ok());
    }

    #[test]
    fn joined_view_flattens_note_fields() {
        let now = chrono::Utc::now();
        let category = Category {
            id: uuid::Uuid::new_v4(),
            name: "Work".to_string(),
            created_at: now,
            updated_at: now,
        };
        let note = Note {
            id: uuid::Uuid::new_v4(),
            title: "T".to_string(),
            content: "C".to_string(),
            category_id: category.id,
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(NoteWithCategory { note, category }).unwrap();
        assert_eq!(json["title"], "T");
        assert_eq!(json["categoryId"], json["category"]["id"]);
        assert_eq!(json["category"]["name"], "Work");
    }
}
