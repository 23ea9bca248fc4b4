use axum::routing::get;
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Note routes mounted at `/notes`.
///
/// ```text
/// GET    /                          -> list_notes
/// POST   /                          -> create_note
/// GET    /{id}                      -> get_note
/// PUT    /{id}                      -> update_note
/// DELETE /{id}                      -> delete_note
/// GET    /category/{category_id}    -> list_notes_by_category
/// DELETE /category/{category_id}    -> delete_notes_by_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notes::list_notes).post(notes::create_note))
        .route(
            "/{id}",
            get(notes::get_note)
                .put(notes::update_note)
                .delete(notes::delete_note),
        )
        .route(
            "/category/{category_id}",
            get(notes::list_notes_by_category).delete(notes::delete_notes_by_category),
        )
}
