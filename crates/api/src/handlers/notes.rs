//! Handlers for notes, including per-category listing and cascade delete.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use notekeep_core::note::NoteWithCategory;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::{AppResult, ErrorResponse};
use crate::response::{CascadeDeleteResponse, MessageResponse};
use crate::state::AppState;

/// Body for creating or replacing a note. Missing fields count as empty.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotePayload {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category_id: Option<String>,
}

impl NotePayload {
    fn fields(&self) -> (&str, &str, &str) {
        (
            self.title.as_deref().unwrap_or_default(),
            self.content.as_deref().unwrap_or_default(),
            self.category_id.as_deref().unwrap_or_default(),
        )
    }
}

/// GET /notes
#[utoipa::path(
    get,
    path = "/notes",
    tag = "Notes",
    responses(
        (status = 200, description = "All notes with their categories, newest first", body = Vec<NoteWithCategory>),
        (status = 500, description = "Internal error", body = ErrorResponse),
    )
)]
pub async fn list_notes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let notes = state.notes().list_all().await?;
    Ok(Json(notes))
}

/// POST /notes
#[utoipa::path(
    post,
    path = "/notes",
    tag = "Notes",
    request_body = NotePayload,
    responses(
        (status = 201, description = "Note created", body = NoteWithCategory),
        (status = 400, description = "Missing or blank field", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
    )
)]
pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<NotePayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let (title, content, category_id) = input.fields();
    let note = state.notes().create(title, content, category_id).await?;

    Ok((StatusCode::CREATED, Json(note)))
}

/// GET /notes/{id}
#[utoipa::path(
    get,
    path = "/notes/{id}",
    tag = "Notes",
    params(("id" = String, Path, description = "Note id")),
    responses(
        (status = 200, description = "The note with its category", body = NoteWithCategory),
        (status = 404, description = "No such note", body = ErrorResponse),
    )
)]
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let note = state.notes().get_by_id(&id).await?;
    Ok(Json(note))
}

/// PUT /notes/{id}
///
/// Full replacement of title, content and category.
#[utoipa::path(
    put,
    path = "/notes/{id}",
    tag = "Notes",
    params(("id" = String, Path, description = "Note id")),
    request_body = NotePayload,
    responses(
        (status = 200, description = "Note replaced", body = NoteWithCategory),
        (status = 400, description = "Missing or blank field", body = ErrorResponse),
        (status = 404, description = "No such note or category", body = ErrorResponse),
    )
)]
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<NotePayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let (title, content, category_id) = input.fields();
    let note = state.notes().update(&id, title, content, category_id).await?;

    Ok(Json(note))
}

/// DELETE /notes/{id}
#[utoipa::path(
    delete,
    path = "/notes/{id}",
    tag = "Notes",
    params(("id" = String, Path, description = "Note id")),
    responses(
        (status = 200, description = "Note deleted", body = MessageResponse),
        (status = 404, description = "No such note", body = ErrorResponse),
    )
)]
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    state.notes().delete(&id).await?;

    Ok(Json(MessageResponse {
        message: "Note deleted successfully",
    }))
}

/// GET /notes/category/{category_id}
#[utoipa::path(
    get,
    path = "/notes/category/{category_id}",
    tag = "Notes",
    params(("category_id" = String, Path, description = "Category id")),
    responses(
        (status = 200, description = "Notes in the category, possibly empty", body = Vec<NoteWithCategory>),
        (status = 404, description = "Category not found", body = ErrorResponse),
    )
)]
pub async fn list_notes_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let notes = state.notes().list_by_category(&category_id).await?;
    Ok(Json(notes))
}

/// DELETE /notes/category/{category_id}
///
/// Removes every note in the category; the category itself stays.
#[utoipa::path(
    delete,
    path = "/notes/category/{category_id}",
    tag = "Notes",
    params(("category_id" = String, Path, description = "Category id")),
    responses(
        (status = 200, description = "Notes deleted", body = CascadeDeleteResponse),
        (status = 404, description = "Category not found or owns no notes", body = ErrorResponse),
        (status = 500, description = "Cascade stopped part-way", body = ErrorResponse),
    )
)]
pub async fn delete_notes_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let outcome = state.cascade().delete_all_in_category(&category_id).await?;

    Ok(Json(CascadeDeleteResponse {
        message: "Notes deleted successfully",
        deleted: outcome.deleted,
    }))
}
