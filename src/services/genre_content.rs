use crate::{
    error::AppResult,
    models::GenreContent,
    services::providers::MovieProvider,
};

/// Maximum entries per list for a genre page
pub const MAX_GENRE_RESULTS: usize = 10;

/// Fetches the top movies and TV shows of a genre
///
/// Both TMDB calls run concurrently and are awaited together. Each list degrades on its
/// own: a failed call is logged and yields an empty list while the other is still
/// returned. There is no static fallback here.
pub async fn fetch_genre_content(provider: &dyn MovieProvider, genre_id: u32) -> GenreContent {
    tracing::info!(genre_id, provider = provider.name(), "Fetching genre content");

    let (movies, tv_shows) = tokio::join!(
        provider.discover_movies(genre_id),
        provider.discover_tv(genre_id)
    );

    let content = GenreContent {
        movies: keep_top(movies, genre_id, "movies"),
        tv_shows: keep_top(tv_shows, genre_id, "tv_shows"),
    };

    tracing::info!(
        genre_id,
        movies = content.movies.len(),
        tv_shows = content.tv_shows.len(),
        "Genre content fetched"
    );

    content
}

fn keep_top<T>(result: AppResult<Vec<T>>, genre_id: u32, list: &'static str) -> Vec<T> {
    match result {
        Ok(mut items) => {
            items.truncate(MAX_GENRE_RESULTS);
            items
        }
        Err(e) => {
            tracing::warn!(error = %e, genre_id, list, "Genre list fetch failed");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::{Movie, TvShow};
    use crate::services::providers::MockMovieProvider;

    fn movie(id: u64) -> Movie {
        Movie {
            id,
            title: format!("Movie {}", id),
            overview: String::new(),
            poster_path: None,
            vote_average: 6.5,
            release_date: String::new(),
        }
    }

    fn show(id: u64) -> TvShow {
        TvShow {
            id,
            name: format!("Show {}", id),
            overview: String::new(),
            poster_path: None,
            vote_average: 6.5,
            first_air_date: String::new(),
        }
    }

    fn mock() -> MockMovieProvider {
        let mut provider = MockMovieProvider::new();
        provider.expect_name().return_const("mock");
        provider
    }

    #[tokio::test]
    async fn test_both_lists_capped_at_ten() {
        let mut provider = mock();
        provider
            .expect_discover_movies()
            .withf(|genre_id| *genre_id == 35)
            .returning(|_| Ok((0..20).map(movie).collect()));
        provider
            .expect_discover_tv()
            .withf(|genre_id| *genre_id == 35)
            .returning(|_| Ok((0..15).map(show).collect()));

        let content = fetch_genre_content(&provider, 35).await;
        assert_eq!(content.movies.len(), MAX_GENRE_RESULTS);
        assert_eq!(content.tv_shows.len(), MAX_GENRE_RESULTS);
    }

    #[tokio::test]
    async fn test_tv_failure_keeps_movies() {
        let mut provider = mock();
        provider
            .expect_discover_movies()
            .times(1)
            .returning(|_| Ok(vec![movie(1), movie(2)]));
        provider
            .expect_discover_tv()
            .times(1)
            .returning(|_| Err(AppError::ExternalServiceUnavailable("timeout".into())));

        let content = fetch_genre_content(&provider, 18).await;
        assert_eq!(content.movies.len(), 2);
        assert!(content.tv_shows.is_empty());
    }

    #[tokio::test]
    async fn test_movie_failure_keeps_tv() {
        let mut provider = mock();
        provider
            .expect_discover_movies()
            .returning(|_| Err(AppError::Internal("bad json".into())));
        provider
            .expect_discover_tv()
            .returning(|_| Ok(vec![show(7)]));

        let content = fetch_genre_content(&provider, 18).await;
        assert!(content.movies.is_empty());
        assert_eq!(content.tv_shows[0].id, 7);
    }
}
