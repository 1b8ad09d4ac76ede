/// Movie metadata provider abstraction
///
/// The resolver and the genre fetcher only talk to [`MovieProvider`], which keeps the
/// fallback logic testable without a network and leaves room for a second catalog.
use crate::{
    error::AppResult,
    models::{Movie, TvShow},
};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Trait for movie/TV metadata providers
///
/// Implementations return every result of the first page, already projected to
/// [`Movie`] / [`TvShow`]. Callers decide how many to keep.
///
/// Failures that mean "the service cannot answer right now" (unreachable, timed
/// out, non-success status) must surface as `AppError::ExternalServiceUnavailable`
/// so callers can degrade; anything else is treated as a bug.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieProvider: Send + Sync {
    /// Movies in a genre, most popular first
    async fn discover_movies(&self, genre_id: u32) -> AppResult<Vec<Movie>>;

    /// TV shows in a genre, most popular first
    async fn discover_tv(&self, genre_id: u32) -> AppResult<Vec<TvShow>>;

    /// Free-text movie search
    async fn search_movies(&self, query: &str) -> AppResult<Vec<Movie>>;

    /// Currently popular movies
    async fn popular_movies(&self) -> AppResult<Vec<Movie>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
