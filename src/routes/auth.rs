use axum::{extract::State, http::StatusCode, Extension, Json};

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{LoginRequest, MessageResponse, RegisterRequest, TokenResponse},
    routes::AppState,
};

/// Handler for account registration
pub async fn register(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    tracing::info!(
        request_id = %request_id,
        username = %request.username,
        "Processing registration"
    );

    state.auth.register(request).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "User registered successfully".to_string(),
        }),
    ))
}

/// Handler for login
pub async fn login(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    tracing::info!(
        request_id = %request_id,
        username = %request.username,
        "Processing login"
    );

    let token = state.auth.login(&request.username, &request.password).await?;
    Ok(Json(token))
}
