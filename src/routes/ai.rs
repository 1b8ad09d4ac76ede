use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{GenreContent, RecommendationRequest, RecommendationResponse},
    routes::AppState,
    services::{genre_content, recommendations},
};

/// Handler for top movies and TV shows of a genre
pub async fn get_genre_content(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(genre_id): Path<u32>,
) -> Json<GenreContent> {
    tracing::info!(request_id = %request_id, genre_id, "Processing genre request");

    Json(genre_content::fetch_genre_content(state.provider.as_ref(), genre_id).await)
}

/// Handler for prompt-based recommendations
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    let prompt = request
        .prompt
        .ok_or_else(|| AppError::InvalidInput("Missing prompt".to_string()))?;

    tracing::info!(request_id = %request_id, prompt = %prompt, "Processing recommendation request");

    let movies = recommendations::get_recommendations(state.provider.as_ref(), &prompt).await?;

    tracing::info!(request_id = %request_id, count = movies.len(), "Recommendations returned");
    Ok(Json(RecommendationResponse { movies }))
}
