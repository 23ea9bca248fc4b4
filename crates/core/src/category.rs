//! Category entity and name validation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::CoreError;
use crate::types::{EntityId, Timestamp};

/// Maximum length of a category name (matches the `VARCHAR(255)` column).
pub const MAX_CATEGORY_NAME_LENGTH: usize = 255;

/// A named grouping that notes reference by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[schema(value_type = String, format = Uuid)]
    pub id: EntityId,
    pub name: String,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

/// Trim a requested category name and check it is usable.
///
/// Uniqueness is compared on the trimmed value, so this must run before any
/// name lookup.
pub fn normalize_category_name(raw: &str) -> Result<String, CoreError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(CoreError::Validation(
            "Name is required and cannot be empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_CATEGORY_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Name exceeds maximum length of {MAX_CATEGORY_NAME_LENGTH} characters"
        )));
    }
    Ok(name.to_string())
}
