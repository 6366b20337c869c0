use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::{
    error::ApiError,
    pagination,
    state::AppState,
    users::{
        dto::{CreateUserRequest, ListUsersRequest, UserResponse},
        password::hash_password,
        repo::User,
    },
    validate::ValidateRequest,
};

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let Json(req) = payload.map_err(|e| {
        warn!(error = %e, "create_user body rejected");
        ApiError::BadRequest("Request parsing failed")
    })?;

    req.validate().map_err(|e| {
        warn!(field = e.field, "create_user validation failed");
        ApiError::Validation(e)
    })?;

    let hash = hash_password(&req.password).map_err(|e| ApiError::Hash(e.to_string()))?;

    let user = state
        .users
        .create(&req.name, &req.email, &hash)
        .await
        .map_err(|e| {
            error!(error = %e, email = %req.email, "create user failed");
            ApiError::Internal("Failed to create user")
        })?;

    info!(user_id = %user.id, email = %user.email, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

#[instrument(skip(state, payload))]
pub async fn list_users(
    State(state): State<AppState>,
    payload: Result<Json<ListUsersRequest>, JsonRejection>,
) -> Result<Json<Vec<User>>, ApiError> {
    let Json(req) = payload.map_err(|e| {
        warn!(error = %e, "list_users body rejected");
        ApiError::BadRequest("Invalid parameters")
    })?;

    req.validate().map_err(|e| {
        warn!(field = e.field, "list_users validation failed");
        ApiError::Validation(e)
    })?;

    let offset = pagination::offset(req.page(), req.limit());
    let users = state.users.list(req.limit(), offset).await.map_err(|e| {
        error!(error = %e, "list users failed");
        ApiError::Internal("Failed to get users")
    })?;

    Ok(Json(users))
}

#[instrument(skip(state, id))]
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let Path(id) = id.map_err(|e| {
        warn!(error = %e, "get_user invalid id");
        ApiError::BadRequest("Invalid parameters")
    })?;

    // Lookup failures collapse to the same generic not-found outcome; the
    // underlying error text stays in the logs.
    match state.users.get(id).await {
        Ok(Some(user)) => Ok(Json(UserResponse::from(user))),
        Ok(None) => Err(ApiError::NotFound("User not found")),
        Err(e) => {
            error!(error = %e, %id, "get user failed");
            Err(ApiError::NotFound("User not found"))
        }
    }
}
