//! E2E test helpers for constructing the full application stack.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request as HttpRequest, StatusCode};
use axum::Router;
use chrono::{TimeZone, Utc};
use tempfile::TempDir;
use tower::ServiceExt;

use crate::api;
use crate::app::App;
use crate::infrastructure::clock::FixedClock;
use crate::infrastructure::ports::ItemRepo;
use crate::infrastructure::sqlite::SqliteItemRepo;

/// A fully wired router backed by a throwaway SQLite file.
pub struct E2EApp {
    pub router: Router,
    _temp_dir: TempDir,
}

impl E2EApp {
    /// Router whose clock is pinned to 2024-06-01T08:30:00Z.
    pub async fn new() -> Self {
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap());
        Self::build(|repo| App::with_clock(repo, Arc::new(clock))).await
    }

    /// Router stamping items with the real system clock.
    pub async fn with_system_clock() -> Self {
        Self::build(App::new).await
    }

    async fn build<F>(make_app: F) -> Self
    where
        F: FnOnce(Arc<dyn ItemRepo>) -> App,
    {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let db_path = temp_dir.path().join("inventory.db");
        let repo = SqliteItemRepo::open(&db_path.to_string_lossy())
            .await
            .expect("open item store");

        let app = Arc::new(make_app(Arc::new(repo)));

        Self {
            router: api::router(app, None),
            _temp_dir: temp_dir,
        }
    }

    /// Send a request and decode the JSON reply.
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let builder = HttpRequest::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        let response = self.router.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let json = serde_json::from_slice(&bytes).expect("json body");
        (status, json)
    }

    pub async fn list(&self) -> Vec<serde_json::Value> {
        let (status, json) = self.send("GET", "/api/items", None).await;
        assert_eq!(status, StatusCode::OK);
        json.as_array().cloned().expect("array of items")
    }
}
