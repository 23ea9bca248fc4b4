pub mod categories;
pub mod health;
pub mod notes;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /notes-category                      list, create
/// /notes-category/{id}                 get, rename, delete
///
/// /notes                               list, create
/// /notes/{id}                          get, replace, delete
/// /notes/category/{category_id}        list by category, cascade delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/notes-category", categories::router())
        .nest("/notes", notes::router())
}
