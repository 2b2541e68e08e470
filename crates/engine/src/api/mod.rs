//! API layer - HTTP entry points.

pub mod http;

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::app::App;

/// Build the full router: item routes, request tracing, and CORS when
/// `cors_allowed_origins` is set.
pub fn router(app: Arc<App>, cors_allowed_origins: Option<&str>) -> Router {
    let mut router = http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = cors_allowed_origins.and_then(build_cors_layer) {
        router = router.layer(cors);
    }

    router
}

/// `*` allows any origin; otherwise a comma separated list of origins.
fn build_cors_layer(allowed_origins: &str) -> Option<CorsLayer> {
    let allowed_origins = allowed_origins.trim();
    if allowed_origins.is_empty() {
        return None;
    }

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    if allowed_origins == "*" {
        return Some(cors.allow_origin(Any));
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    if origins.is_empty() {
        tracing::warn!(allowed_origins, "No usable CORS origins, CORS layer disabled");
        return None;
    }

    Some(cors.allow_origin(origins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request as HttpRequest, StatusCode};
    use tower::ServiceExt;

    use crate::infrastructure::ports::MockItemRepo;

    #[test]
    fn blank_origin_list_disables_cors() {
        assert!(build_cors_layer("   ").is_none());
        assert!(build_cors_layer(" , ").is_none());
    }

    #[test]
    fn wildcard_and_lists_build_a_layer() {
        assert!(build_cors_layer("*").is_some());
        assert!(build_cors_layer("http://localhost:5173, http://localhost:3000").is_some());
    }

    #[tokio::test]
    async fn cors_header_is_sent_for_allowed_origin() {
        let app = Arc::new(App::new(Arc::new(MockItemRepo::new())));
        let router = router(app, Some("http://localhost:5173"));

        let response = router
            .oneshot(
                HttpRequest::builder()
                    .uri("/api/health")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "http://localhost:5173"
        );
    }

    #[tokio::test]
    async fn default_config_allows_any_origin() {
        let config = crate::config::EngineConfig::default();
        let app = Arc::new(App::new(Arc::new(MockItemRepo::new())));
        let router = router(app, Some(&config.cors_allowed_origins));

        let response = router
            .oneshot(
                HttpRequest::builder()
                    .uri("/api/health")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }
}
