use serde::{Deserialize, Serialize};

/// Movie record returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub vote_average: f64,
    pub release_date: String,
}

/// TV show record returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TvShow {
    pub id: u64,
    pub name: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub vote_average: f64,
    pub first_air_date: String,
}

/// Body of `POST /api/ai/recommend`
#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub movies: Vec<Movie>,
}

/// Response of `GET /api/ai/genre/{genre_id}`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GenreContent {
    pub movies: Vec<Movie>,
    pub tv_shows: Vec<TvShow>,
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// Paged list envelope shared by every TMDB listing endpoint
#[derive(Debug, Deserialize)]
pub struct TmdbPage<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// Raw movie entry from /discover/movie, /search/movie and /movie/popular
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub release_date: Option<String>,
}

/// Raw TV entry from /discover/tv
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbTvShow {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub first_air_date: Option<String>,
}

impl From<TmdbMovie> for Movie {
    fn from(movie: TmdbMovie) -> Self {
        Movie {
            id: movie.id,
            title: movie.title,
            overview: movie.overview,
            poster_path: movie.poster_path,
            vote_average: movie.vote_average,
            release_date: movie.release_date.unwrap_or_default(),
        }
    }
}

impl From<TmdbTvShow> for TvShow {
    fn from(show: TmdbTvShow) -> Self {
        TvShow {
            id: show.id,
            name: show.name,
            overview: show.overview,
            poster_path: show.poster_path,
            vote_average: show.vote_average,
            first_air_date: show.first_air_date.unwrap_or_default(),
        }
    }
}
