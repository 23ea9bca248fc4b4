/// All primary keys are PostgreSQL UUIDs generated by the database.
pub type EntityId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Parse a caller-supplied identifier.
///
/// Identifiers are opaque to callers; anything that is not a UUID can never
/// resolve, so it yields `None` rather than an error.
pub fn parse_entity_id(raw: &str) -> Option<EntityId> {
    EntityId::parse_str(raw.trim()).ok()
}
