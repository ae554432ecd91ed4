use crate::{
    dtos::{
        MessageResponse,
        auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse},
    },
    error::ApiResult,
    extract::ApiJson,
    state::AppState,
};
use axum::{Json, extract::State};
use database::services::auth::AuthService;

/// Exchange credentials for a session token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 401, description = "Unknown email or wrong password", body = MessageResponse)
    ),
    tag = "Authentication"
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let session = AuthService::login(&state.db, &request.email, &request.password).await?;

    Ok(Json(LoginResponse {
        token: session.token,
        user: session.user.into(),
    }))
}

/// Create an active account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created", body = RegisterResponse),
        (status = 400, description = "Missing field, unknown role or email already used", body = MessageResponse)
    ),
    tag = "Authentication"
)]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> ApiResult<Json<RegisterResponse>> {
    let user = AuthService::register(&state.db, request.into()).await?;

    Ok(Json(RegisterResponse {
        message: "User registered successfully".to_string(),
        user: user.into(),
    }))
}
