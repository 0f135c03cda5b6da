//! Common test utilities for in-process API testing with mocks.
//!
//! Builds the router with a mock ticket submitter so handlers can be
//! exercised without a real ticket service.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use campusdesk_core::testing::{MockTicketSubmitter, RecordingNotifier};
use campusdesk_core::{Config, MatchStrategy, Notifier, TicketSubmitter};
use campusdesk_server::{api::create_router, state::AppState};

/// Re-export fixtures for test convenience
pub use campusdesk_core::testing::fixtures;

/// Test fixture with an in-process router.
pub struct TestFixture {
    pub router: Router,
    /// Mock ticket service - configure responses and failures
    pub submitter: Arc<MockTicketSubmitter>,
    /// Notices raised by ticket submissions
    pub notifier: Arc<RecordingNotifier>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub text: String,
}

impl TestFixture {
    /// Create a new test fixture with the default (code) matcher.
    pub fn new() -> Self {
        Self::with_matching(MatchStrategy::default())
    }

    pub fn with_matching(matching: MatchStrategy) -> Self {
        let mut config = Config::default();
        config.timeline.matching = matching;

        let submitter = Arc::new(MockTicketSubmitter::new());
        let notifier = Arc::new(RecordingNotifier::new());

        let state = Arc::new(AppState::new(
            config,
            Arc::clone(&submitter) as Arc<dyn TicketSubmitter>,
            Arc::clone(&notifier) as Arc<dyn Notifier>,
        ));

        Self {
            router: create_router(state),
            submitter,
            notifier,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        let bytes = serde_json::to_vec(&body).unwrap();
        self.request("POST", path, Some(bytes)).await
    }

    /// Send a POST request with raw string body (for testing malformed JSON).
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        self.request("POST", path, Some(body.as_bytes().to_vec()))
            .await
    }

    async fn request(&self, method: &str, path: &str, body: Option<Vec<u8>>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);

        let body = match body {
            Some(bytes) => {
                request_builder = request_builder.header("Content-Type", "application/json");
                Body::from(bytes)
            }
            None => Body::empty(),
        };

        let request = request_builder.body(body).unwrap();

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

        let text = String::from_utf8_lossy(&body_bytes).to_string();
        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body, text }
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status, $response.status, $response.text
        );
    };
}
