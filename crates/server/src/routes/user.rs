use crate::{
    dtos::{MessageResponse, user::UserResponse},
    error::{ApiError, ApiResult},
    extract::ApiPath,
    state::AppState,
};
use axum::{Json, extract::State};
use database::services::user::UserService;

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Every user", body = Vec<UserResponse>),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Users"
)]
pub async fn get_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = UserService::get_all_users(&state.db).await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = MessageResponse)
    ),
    tag = "Users"
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<UserResponse>> {
    UserService::get_user_by_id(&state.db, id)
        .await?
        .map(|user| Json(user.into()))
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
}
