//! Handlers for note categories.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use notekeep_core::category::Category;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::{AppResult, ErrorResponse};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Body for creating or renaming a category.
///
/// A missing or null `name` is treated as empty and rejected by validation.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CategoryPayload {
    pub name: Option<String>,
}

impl CategoryPayload {
    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// GET /notes-category
#[utoipa::path(
    get,
    path = "/notes-category",
    tag = "Categories",
    responses(
        (status = 200, description = "All categories, ordered by name", body = Vec<Category>),
        (status = 500, description = "Internal error", body = ErrorResponse),
    )
)]
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = state.categories().list_all().await?;
    Ok(Json(categories))
}

/// POST /notes-category
#[utoipa::path(
    post,
    path = "/notes-category",
    tag = "Categories",
    request_body = CategoryPayload,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Missing or blank name", body = ErrorResponse),
        (status = 409, description = "Name already taken", body = ErrorResponse),
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<CategoryPayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let category = state.categories().create(input.name()).await?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /notes-category/{id}
#[utoipa::path(
    get,
    path = "/notes-category/{id}",
    tag = "Categories",
    params(("id" = String, Path, description = "Category id")),
    responses(
        (status = 200, description = "The category", body = Category),
        (status = 404, description = "No such category", body = ErrorResponse),
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let category = state.categories().get_by_id(&id).await?;
    Ok(Json(category))
}

/// PUT /notes-category/{id}
#[utoipa::path(
    put,
    path = "/notes-category/{id}",
    tag = "Categories",
    params(("id" = String, Path, description = "Category id")),
    request_body = CategoryPayload,
    responses(
        (status = 200, description = "Category renamed", body = Category),
        (status = 400, description = "Missing or blank name", body = ErrorResponse),
        (status = 404, description = "No such category", body = ErrorResponse),
        (status = 409, description = "Name already taken", body = ErrorResponse),
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CategoryPayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let category = state.categories().update(&id, input.name()).await?;

    Ok(Json(category))
}

/// DELETE /notes-category/{id}
///
/// Fails with 409 while notes still reference the category.
#[utoipa::path(
    delete,
    path = "/notes-category/{id}",
    tag = "Categories",
    params(("id" = String, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted", body = MessageResponse),
        (status = 404, description = "No such category", body = ErrorResponse),
        (status = 409, description = "Category still has notes", body = ErrorResponse),
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    state.categories().delete(&id).await?;

    Ok(Json(MessageResponse {
        message: "Notes category deleted successfully",
    }))
}
