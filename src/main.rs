use std::{sync::Arc, time::Duration};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movierec_api::{
    config::{Config, DEFAULT_SIGNING_SECRET},
    db::InMemoryCredentialStore,
    middleware::cors::cors_layer,
    routes::{create_router, AppState},
    services::{auth::TokenIssuer, AuthService, TmdbProvider},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    warn_on_weak_config(&config);

    let store = Arc::new(InMemoryCredentialStore::new());
    let tokens = TokenIssuer::new(&config.signing_secret, config.token_ttl_minutes)?;
    let auth = AuthService::new(store, tokens);

    let provider = TmdbProvider::new(
        config.tmdb_api_key.clone(),
        config.tmdb_api_url.clone(),
        Duration::from_millis(config.external_timeout_ms),
    )?;

    let state = AppState::new(auth, Arc::new(provider));
    let app = create_router(state).layer(cors_layer(&config));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, origins = ?config.allowed_origins, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}

fn warn_on_weak_config(config: &Config) {
    if config.signing_secret == DEFAULT_SIGNING_SECRET {
        tracing::warn!("SECRET_KEY not set, signing tokens with the built-in default secret");
    }
    if config.tmdb_api_key.is_empty() {
        tracing::warn!("TMDB_API_KEY not set, recommendations will use the fallback list");
    }
    tracing::debug!(
        database_url = ?config.database_url,
        cache_type = %config.cache_type,
        cache_default_timeout = config.cache_default_timeout,
        ratelimit_default = %config.ratelimit_default,
        "Storage, cache and rate-limit settings are accepted but not wired"
    );
}
