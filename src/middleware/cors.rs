use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::Config;

/// Build the single CORS policy from configuration.
///
/// `*` in `allowed_origins` admits any origin. Credentials are never allowed, so the
/// wildcard stays valid. Unparseable origins are skipped with a warning.
pub fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .map(|o| o.trim())
        .filter(|o| !o.is_empty())
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %o, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Method, Request},
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    fn config(origins: &str) -> Config {
        Config::from_iter(vec![("ALLOWED_ORIGINS".to_string(), origins.to_string())]).unwrap()
    }

    async fn allowed_origin(config: &Config, origin: &str) -> Option<String> {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(cors_layer(config));

        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_listed_origin_allowed() {
        let config = config("http://localhost:5173,http://localhost:5174");
        assert_eq!(
            allowed_origin(&config, "http://localhost:5174").await.as_deref(),
            Some("http://localhost:5174")
        );
        assert_eq!(allowed_origin(&config, "http://evil.example").await, None);
    }

    #[tokio::test]
    async fn test_wildcard_allows_any() {
        let config = config("*");
        assert_eq!(
            allowed_origin(&config, "http://anywhere.example").await.as_deref(),
            Some("*")
        );
    }
}
