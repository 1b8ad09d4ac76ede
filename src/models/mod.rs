pub mod account;
pub mod media;

pub use account::{Account, LoginRequest, MessageResponse, RegisterRequest, TokenResponse};
pub use media::{
    GenreContent, Movie, RecommendationRequest, RecommendationResponse, TmdbMovie, TmdbPage,
    TmdbTvShow, TvShow,
};
