//! Common test utilities for driving the web form in-process.
//!
//! The fixture builds the real router on top of a temporary photo folder,
//! so requests run the organizer against actual files.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use photokey_core::{Config, RunDefaults};
use photokey_server::api::create_router;
use photokey_server::state::AppState;

/// In-process server whose default folder is a fresh temporary directory.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_preview() {
///     let fixture = TestFixture::new();
///     fixture.touch("IMG_1234.jpg");
///
///     let response = fixture.post_form("/", &[("action", "preview")]).await;
///     assert!(response.body.contains("[MOVE]"));
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Keeps the photo folder alive for the fixture's lifetime
    pub temp_dir: TempDir,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TestFixture {
    pub fn new() -> Self {
        Self::with_defaults(RunDefaults::default())
    }

    /// Create a fixture with custom run defaults. The folder is always
    /// replaced by the fixture's temporary directory.
    pub fn with_defaults(defaults: RunDefaults) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        let config = Config {
            defaults: RunDefaults {
                folder: Some(temp_dir.path().to_path_buf()),
                ..defaults
            },
            ..Default::default()
        };

        let state = Arc::new(AppState::new(config));
        let router = create_router(state);

        Self { router, temp_dir }
    }

    /// The default photo folder.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a file (and its parent directories) under the photo folder.
    pub fn touch(&self, relative: &str) -> PathBuf {
        let path = self.root().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, relative.as_bytes()).unwrap();
        path
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// Send a POST request with an urlencoded form body.
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        TestResponse {
            status,
            body: String::from_utf8_lossy(&body_bytes).into_owned(),
        }
    }
}
