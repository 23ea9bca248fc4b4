//! OpenAPI document for the notes service.
//!
//! Swagger UI is mounted at `/api-docs`; the raw document sits outside that
//! prefix because the UI claims every path below it.

use utoipa::OpenApi;

/// Path of the interactive documentation.
pub const DOCS_PATH: &str = "/api-docs";

/// Path of the raw OpenAPI JSON document.
pub const OPENAPI_JSON_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Notekeep API",
        version = env!("CARGO_PKG_VERSION"),
        description = "Notes grouped into named categories."
    ),
    paths(
        crate::routes::health::health_check,
        crate::handlers::categories::list_categories,
        crate::handlers::categories::create_category,
        crate::handlers::categories::get_category,
        crate::handlers::categories::update_category,
        crate::handlers::categories::delete_category,
        crate::handlers::notes::list_notes,
        crate::handlers::notes::create_note,
        crate::handlers::notes::get_note,
        crate::handlers::notes::update_note,
        crate::handlers::notes::delete_note,
        crate::handlers::notes::list_notes_by_category,
        crate::handlers::notes::delete_notes_by_category,
    ),
    components(schemas(
        crate::error::ErrorResponse,
        notekeep_core::category::Category,
        notekeep_core::note::Note,
    )),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Categories", description = "Note categories"),
        (name = "Notes", description = "Notes, per-category listing and cascade delete"),
    ),
)]
pub struct ApiDoc;

/// The generated OpenAPI document.
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
