//! Registration and login endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{LoginRequest, MessageResponse, RegisterRequest},
    AppState,
};

use super::ApiJson;

/// Register a new user
#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = MessageResponse),
        (status = 400, description = "Email already registered", body = crate::error::ErrorResponse),
        (status = 500, description = "Datastore failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state.services.users.register(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Registration successful")),
    ))
}

/// Check a user's credentials
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = MessageResponse),
        (status = 401, description = "Invalid email or password", body = crate::error::ErrorResponse),
        (status = 500, description = "Datastore failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> AppResult<Json<MessageResponse>> {
    state.services.users.login(request).await?;
    Ok(Json(MessageResponse::new("Login successful")))
}
