//! HTTP mock server helpers for testing outbound HTTP calls.
//!
//! This module provides a thin wrapper around `wiremock` for declarative
//! HTTP stubbing.
//!
//! # Quick Start
//!
//! ```ignore
//! use crate::common::http_mock::MockHttpServer;
//!
//! #[tokio::test]
//! async fn test_external_api_call() {
//!     let server = MockHttpServer::start().await;
//!
//!     server
//!         .expect_get("/jurisdictions")
//!         .with_query_param("apikey", "test-api-key")
//!         .respond_with_json(json!({"results": [], "pagination": {...}}))
//!         .mount()
//!         .await;
//!
//!     let client = HttpJurisdictionClient::with_base_url(server.url(), "test-api-key");
//! }
//! ```
//!
//! # Patterns
//!
//! - **Success response**: `.respond_with_json(value)` or `.respond_with_body(string)`
//! - **Error response**: `.respond_with_status(500)`, optionally `.with_json_response(value)`
//! - **Timeout simulation**: `.respond_with_delay(Duration::from_secs(30))`
//! - **Request verification**: `.expect_times(1)` then `server.verify().await`

use std::time::Duration;

use serde_json::Value;
pub use wiremock::matchers::{method, path, query_param};
pub use wiremock::{Mock, MockServer as WiremockServer, ResponseTemplate};

/// Running stub server for one test.
pub struct MockHttpServer {
    server: WiremockServer,
}

impl MockHttpServer {
    pub async fn start() -> Self {
        Self {
            server: WiremockServer::start().await,
        }
    }

    /// Base URL to hand to a client under test.
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Underlying wiremock server, for matchers this wrapper does not cover.
    pub fn inner(&self) -> &WiremockServer {
        &self.server
    }

    /// Start a stub for `GET {path}`.
    pub fn expect_get(&self, path: &str) -> StubBuilder<'_> {
        StubBuilder {
            server: &self.server,
            path: path.to_string(),
            query: Vec::new(),
            status: 200,
            body: None,
            delay: None,
            times: None,
        }
    }

    /// Assert every `expect_times` expectation was met.
    pub async fn verify(&self) {
        self.server.verify().await;
    }

    /// Query pairs of every request received so far, in arrival order.
    pub async fn received_queries(&self) -> Vec<Vec<(String, String)>> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| {
                request
                    .url
                    .query_pairs()
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect()
            })
            .collect()
    }
}

enum StubBody {
    Json(Value),
    Raw(String),
}

/// Builder for one GET stub. Nothing is served until [`StubBuilder::mount`].
pub struct StubBuilder<'a> {
    server: &'a WiremockServer,
    path: String,
    query: Vec<(String, String)>,
    status: u16,
    body: Option<StubBody>,
    delay: Option<Duration>,
    times: Option<u64>,
}

impl StubBuilder<'_> {
    /// Only match requests carrying this query pair.
    pub fn with_query_param(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn respond_with_json(mut self, body: Value) -> Self {
        self.body = Some(StubBody::Json(body));
        self
    }

    pub fn respond_with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(StubBody::Raw(body.into()));
        self
    }

    pub fn respond_with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Attach a JSON body without changing the status.
    pub fn with_json_response(self, body: Value) -> Self {
        self.respond_with_json(body)
    }

    pub fn respond_with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn expect_times(mut self, times: u64) -> Self {
        self.times = Some(times);
        self
    }

    pub async fn mount(self) {
        let mut builder = Mock::given(method("GET")).and(path(self.path.as_str()));
        for (key, value) in &self.query {
            builder = builder.and(query_param(key.as_str(), value.as_str()));
        }

        let mut template = ResponseTemplate::new(self.status);
        match self.body {
            Some(StubBody::Json(value)) => template = template.set_body_json(value),
            Some(StubBody::Raw(text)) => template = template.set_body_string(text),
            None => {}
        }
        if let Some(delay) = self.delay {
            template = template.set_delay(delay);
        }

        let mut mock = builder.respond_with(template);
        if let Some(times) = self.times {
            mock = mock.expect(times);
        }
        mock.mount(self.server).await;
    }
}
