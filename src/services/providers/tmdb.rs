/// TMDB (The Movie Database) v3 provider
///
/// Endpoints used:
/// - `/discover/movie` and `/discover/tv` with `with_genres` + `sort_by=popularity.desc`
/// - `/search/movie` with `query`
/// - `/movie/popular`
///
/// Every call authenticates with the `api_key` query parameter and is bounded by the
/// client-wide timeout.
use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

use crate::{
    error::{AppError, AppResult},
    models::{Movie, TmdbMovie, TmdbPage, TmdbTvShow, TvShow},
    services::providers::MovieProvider,
};

const SORT_BY_POPULARITY: &str = "popularity.desc";
const FIRST_PAGE: &str = "1";

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbProvider {
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET `{api_url}{path}` and decode the `results` page
    async fn fetch_page<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> AppResult<Vec<T>> {
        let url = format!("{}{}", self.api_url, path);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("page", FIRST_PAGE)])
            .query(params)
            .send()
            .await
            .map_err(|e| classify_transport_error(path, e))?;

        let status = response.status();
        tracing::debug!(path = %path, status = %status, provider = "tmdb", "TMDB responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                path = %path,
                status = %status,
                body = %body,
                provider = "tmdb",
                "TMDB returned non-success status"
            );
            return Err(AppError::ExternalServiceUnavailable(format!(
                "TMDB {} returned status {}",
                path, status
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| classify_transport_error(path, e))?;

        let page: TmdbPage<T> = serde_json::from_str(&text).map_err(|e| {
            tracing::error!(error = %e, path = %path, "Failed to deserialize TMDB response");
            AppError::Internal(format!("Failed to parse TMDB response from {}: {}", path, e))
        })?;

        Ok(page.results)
    }
}

/// Timeouts and connection failures mean TMDB is unavailable; other client errors are bugs.
fn classify_transport_error(path: &str, e: reqwest::Error) -> AppError {
    if e.is_timeout() || e.is_connect() || e.is_request() || e.is_body() {
        tracing::warn!(error = %e, path = %path, provider = "tmdb", "TMDB unreachable");
        AppError::ExternalServiceUnavailable(format!("TMDB {} unreachable: {}", path, e))
    } else {
        AppError::HttpClient(e)
    }
}

#[async_trait::async_trait]
impl MovieProvider for TmdbProvider {
    async fn discover_movies(&self, genre_id: u32) -> AppResult<Vec<Movie>> {
        let genre = genre_id.to_string();
        let movies: Vec<TmdbMovie> = self
            .fetch_page(
                "/discover/movie",
                &[("with_genres", genre.as_str()), ("sort_by", SORT_BY_POPULARITY)],
            )
            .await?;

        tracing::info!(genre_id, results = movies.len(), provider = "tmdb", "Discovered movies");
        Ok(movies.into_iter().map(Movie::from).collect())
    }

    async fn discover_tv(&self, genre_id: u32) -> AppResult<Vec<TvShow>> {
        let genre = genre_id.to_string();
        let shows: Vec<TmdbTvShow> = self
            .fetch_page(
                "/discover/tv",
                &[("with_genres", genre.as_str()), ("sort_by", SORT_BY_POPULARITY)],
            )
            .await?;

        tracing::info!(genre_id, results = shows.len(), provider = "tmdb", "Discovered TV shows");
        Ok(shows.into_iter().map(TvShow::from).collect())
    }

    async fn search_movies(&self, query: &str) -> AppResult<Vec<Movie>> {
        let movies: Vec<TmdbMovie> = self
            .fetch_page("/search/movie", &[("query", query)])
            .await?;

        tracing::info!(query = %query, results = movies.len(), provider = "tmdb", "Movie search completed");
        Ok(movies.into_iter().map(Movie::from).collect())
    }

    async fn popular_movies(&self) -> AppResult<Vec<Movie>> {
        let movies: Vec<TmdbMovie> = self.fetch_page("/movie/popular", &[]).await?;

        tracing::info!(results = movies.len(), provider = "tmdb", "Fetched popular movies");
        Ok(movies.into_iter().map(Movie::from).collect())
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
