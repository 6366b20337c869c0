use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info, instrument, warn};

use crate::{
    categories::{
        dto::{CreateCategoryRequest, ListCategoriesRequest},
        repo::Category,
    },
    error::ApiError,
    pagination,
    state::AppState,
    validate::ValidateRequest,
};

#[instrument(skip(state, payload))]
pub async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let Json(req) = payload.map_err(|e| {
        warn!(error = %e, "create_category body rejected");
        ApiError::BadRequest("Request parsing failed")
    })?;

    req.validate().map_err(|e| {
        warn!(field = e.field, "create_category validation failed");
        ApiError::Validation(e)
    })?;

    let category = state.categories.create(&req.name).await.map_err(|e| {
        error!(error = %e, name = %req.name, "create category failed");
        ApiError::Internal("Failed to create category")
    })?;

    info!(category_id = %category.id, "category created");
    Ok((StatusCode::CREATED, Json(category)))
}

#[instrument(skip(state, payload))]
pub async fn list_categories(
    State(state): State<AppState>,
    payload: Result<Json<ListCategoriesRequest>, JsonRejection>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let Json(req) = payload.map_err(|e| {
        warn!(error = %e, "list_categories body rejected");
        ApiError::BadRequest("Invalid parameters")
    })?;

    req.validate().map_err(|e| {
        warn!(field = e.field, "list_categories validation failed");
        ApiError::Validation(e)
    })?;

    let offset = pagination::offset(req.page(), req.limit());
    let categories = state
        .categories
        .list(req.limit(), offset)
        .await
        .map_err(|e| {
            error!(error = %e, "list categories failed");
            ApiError::Internal("Failed to get categories")
        })?;

    Ok(Json(categories))
}
