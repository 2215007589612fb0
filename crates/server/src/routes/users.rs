use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use service::users::{User, UserInput};
use tracing::info;

use super::AppState;
use crate::errors::JsonApiError;

/// List all user accounts
#[utoipa::path(
    get, path = "/users", tag = "users",
    responses(
        (status = 200, description = "A list of user accounts", body = [crate::openapi::UserDoc]),
        (status = 500, description = "Storage unavailable", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, JsonApiError> {
    let users = state.users.list().await?;
    info!(count = users.len(), "list users");
    Ok(Json(users))
}

/// Create a new user account
#[utoipa::path(
    post, path = "/users", tag = "users",
    request_body = crate::openapi::UserInputDoc,
    responses(
        (status = 201, description = "User account created successfully", body = crate::openapi::UserDoc),
        (status = 422, description = "Invalid fields", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserInput>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), JsonApiError> {
    let Json(input) = payload?;
    let user = state.users.create(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Retrieve a user account by id
#[utoipa::path(
    get, path = "/users/{id}", tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "A user account", body = crate::openapi::UserDoc),
        (status = 400, description = "Id is not an integer", body = crate::openapi::ErrorDoc),
        (status = 404, description = "User not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<User>, JsonApiError> {
    let Path(id) = path?;
    Ok(Json(state.users.get(id).await?))
}

/// Replace every field of an existing user account
#[utoipa::path(
    put, path = "/users/{id}", tag = "users",
    params(("id" = i32, Path, description = "User id")),
    request_body = crate::openapi::UserInputDoc,
    responses(
        (status = 200, description = "User account updated successfully", body = crate::openapi::UserDoc),
        (status = 400, description = "Id is not an integer", body = crate::openapi::ErrorDoc),
        (status = 404, description = "User not found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Invalid fields", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UserInput>, JsonRejection>,
) -> Result<Json<User>, JsonApiError> {
    let Path(id) = path?;
    let Json(input) = payload?;
    Ok(Json(state.users.update(id, input).await?))
}

/// Delete a user account
#[utoipa::path(
    delete, path = "/users/{id}", tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 204, description = "User account deleted successfully"),
        (status = 400, description = "Id is not an integer", body = crate::openapi::ErrorDoc),
        (status = 404, description = "User not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = path?;
    state.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
