use crate::{
    error::{AppError, AppResult},
    models::Movie,
    services::{genres, providers::MovieProvider},
};

/// Maximum movies returned for a prompt
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Static list served when TMDB cannot be reached
pub fn fallback_movies() -> Vec<Movie> {
    vec![
        Movie {
            id: 1,
            title: "The Shawshank Redemption".to_string(),
            overview: "Two imprisoned men bond over a number of years, finding solace and eventual redemption through acts of common decency.".to_string(),
            poster_path: Some("/q6y0Go1tsGEsmtFryDOJo3dEmqu.jpg".to_string()),
            vote_average: 8.7,
            release_date: "1994-09-23".to_string(),
        },
        Movie {
            id: 2,
            title: "The Godfather".to_string(),
            overview: "The aging patriarch of an organized crime dynasty transfers control of his clandestine empire to his reluctant son.".to_string(),
            poster_path: Some("/3bhkrj58Vtu7enYsRolD1fZdja1.jpg".to_string()),
            vote_average: 8.7,
            release_date: "1972-03-14".to_string(),
        },
        Movie {
            id: 3,
            title: "The Dark Knight".to_string(),
            overview: "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham, Batman must accept one of the greatest psychological and physical tests of his ability to fight injustice.".to_string(),
            poster_path: Some("/qJ2tW6WMUDux911r6m7haRef0WH.jpg".to_string()),
            vote_average: 8.5,
            release_date: "2008-07-16".to_string(),
        },
    ]
}

/// Turns a free-text prompt into movie recommendations
///
/// A genre keyword in the prompt selects TMDB's discover-by-genre listing; otherwise
/// the whole lowered prompt is used as a search query. An empty result falls back to
/// popular movies. If TMDB is unavailable at any step the static
/// [`fallback_movies`] list is returned instead of an error.
pub async fn get_recommendations(
    provider: &dyn MovieProvider,
    prompt: &str,
) -> AppResult<Vec<Movie>> {
    if prompt.trim().is_empty() {
        return Err(AppError::InvalidInput("Prompt cannot be empty".to_string()));
    }

    let prompt_lower = prompt.to_lowercase();
    match resolve(provider, &prompt_lower).await {
        Ok(movies) => Ok(movies),
        Err(e) if e.is_unavailable() => {
            tracing::warn!(
                error = %e,
                provider = provider.name(),
                "External service unavailable, returning fallback movies"
            );
            Ok(fallback_movies())
        }
        Err(e) => Err(e),
    }
}

async fn resolve(provider: &dyn MovieProvider, prompt_lower: &str) -> AppResult<Vec<Movie>> {
    let mut movies = match genres::match_genre(prompt_lower) {
        Some(hit) => {
            tracing::info!(
                keyword = hit.keyword,
                genre_id = hit.genre_id,
                "Prompt matched genre"
            );
            provider.discover_movies(hit.genre_id).await?
        }
        None => {
            tracing::info!(query = %prompt_lower, "No genre matched, searching by keyword");
            provider.search_movies(prompt_lower).await?
        }
    };
    movies.truncate(MAX_RECOMMENDATIONS);

    if movies.is_empty() {
        tracing::info!("No movies found, falling back to popular movies");
        movies = provider.popular_movies().await?;
        movies.truncate(MAX_RECOMMENDATIONS);
    }

    tracing::info!(count = movies.len(), "Recommendations resolved");
    Ok(movies)
}
