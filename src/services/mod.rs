pub mod auth;
pub mod genre_content;
pub mod genres;
pub mod providers;
pub mod recommendations;

pub use auth::AuthService;
pub use providers::{MovieProvider, TmdbProvider};
