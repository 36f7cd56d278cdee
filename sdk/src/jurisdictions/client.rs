//! Jurisdiction API client.
//!
//! Lists and fetches jurisdiction records (states, municipalities,
//! countries), optionally with their chambers and legislative sessions.
//!
//! # Example
//!
//! ```ignore
//! use openstates_sdk::jurisdictions::{
//!     HttpJurisdictionClient, JurisdictionApiClient, JurisdictionClassification,
//! };
//!
//! let client = HttpJurisdictionClient::new("my-api-key");
//! let page = client
//!     .list_jurisdictions(JurisdictionClassification::State, true, false, 1, 20)
//!     .await?;
//! println!("{} of {}", page.results.len(), page.pagination.total_items);
//! ```

use async_trait::async_trait;

use super::types::{Jurisdiction, JurisdictionClassification, JurisdictionList};
use crate::config::ApiConfig;
use crate::query::QueryParams;
use crate::transport::{ApiError, HttpTransport, DEFAULT_BASE_URL};

const JURISDICTIONS_ENDPOINT: &str = "/jurisdictions";

/// Trait for jurisdiction API operations.
///
/// Use `HttpJurisdictionClient` for real HTTP calls, or
/// `mock::MockJurisdictionClient` in tests.
#[async_trait]
pub trait JurisdictionApiClient: Send + Sync {
    /// List one page of jurisdictions of the given classification.
    async fn list_jurisdictions(
        &self,
        classification: JurisdictionClassification,
        include_organizations: bool,
        include_legislative_sessions: bool,
        page: u32,
        per_page: u32,
    ) -> Result<JurisdictionList, ApiError>;

    /// Fetch a single jurisdiction by its OCD id.
    ///
    /// The id is used as a path suffix verbatim and must already be URL-safe.
    async fn get_jurisdiction(
        &self,
        id: &str,
        include_organizations: bool,
        include_legislative_sessions: bool,
    ) -> Result<Jurisdiction, ApiError>;
}

/// HTTP-based implementation of `JurisdictionApiClient`.
#[derive(Debug, Clone)]
pub struct HttpJurisdictionClient {
    transport: HttpTransport,
}

impl HttpJurisdictionClient {
    /// Create a client against the production API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Create a client against a different host, e.g. a local stub server.
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, api_key)
    }

    /// Create a client with a custom `reqwest::Client` (timeouts, proxies, TLS).
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            transport: HttpTransport::new(client, base_url, api_key),
        }
    }

    /// Create a client from loaded configuration.
    ///
    /// # Errors
    /// Returns `ApiError::Request` if the HTTP client cannot be built.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Ok(Self {
            transport: HttpTransport::from_config(config)?,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }
}

fn push_inclusions(
    query: &mut QueryParams,
    include_organizations: bool,
    include_legislative_sessions: bool,
) {
    if include_organizations {
        query.push("include", "organizations");
    }
    if include_legislative_sessions {
        query.push("include", "legislative_sessions");
    }
}

/// Query parameters for the list endpoint, excluding `apikey`.
#[must_use]
pub fn list_query(
    classification: JurisdictionClassification,
    include_organizations: bool,
    include_legislative_sessions: bool,
    page: u32,
    per_page: u32,
) -> QueryParams {
    let mut query = QueryParams::new();
    query.push("classification", classification);
    push_inclusions(&mut query, include_organizations, include_legislative_sessions);
    query.push("page", page).push("per_page", per_page);
    query
}

/// Query parameters for the detail endpoint, excluding `apikey`.
#[must_use]
pub fn detail_query(include_organizations: bool, include_legislative_sessions: bool) -> QueryParams {
    let mut query = QueryParams::new();
    push_inclusions(&mut query, include_organizations, include_legislative_sessions);
    query
}

#[async_trait]
impl JurisdictionApiClient for HttpJurisdictionClient {
    async fn list_jurisdictions(
        &self,
        classification: JurisdictionClassification,
        include_organizations: bool,
        include_legislative_sessions: bool,
        page: u32,
        per_page: u32,
    ) -> Result<JurisdictionList, ApiError> {
        let query = list_query(
            classification,
            include_organizations,
            include_legislative_sessions,
            page,
            per_page,
        );

        self.transport.get_json(JURISDICTIONS_ENDPOINT, &query).await
    }

    async fn get_jurisdiction(
        &self,
        id: &str,
        include_organizations: bool,
        include_legislative_sessions: bool,
    ) -> Result<Jurisdiction, ApiError> {
        let path = format!("{JURISDICTIONS_ENDPOINT}/{id}");
        let query = detail_query(include_organizations, include_legislative_sessions);

        match self.transport.get_json::<Jurisdiction>(&path, &query).await {
            Err(ApiError::Status { status: 404, .. }) => Err(ApiError::NotFound(id.to_string())),
            other => other,
        }
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::missing_const_for_fn,
    clippy::must_use_candidate
)]
pub mod mock {
    //! Mock implementation for unit testing.

    use super::{
        ApiError, Jurisdiction, JurisdictionApiClient, JurisdictionClassification,
        JurisdictionList,
    };
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Arguments recorded for one `list_jurisdictions` call.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ListCall {
        pub classification: JurisdictionClassification,
        pub include_organizations: bool,
        pub include_legislative_sessions: bool,
        pub page: u32,
        pub per_page: u32,
    }

    /// Mock implementation of `JurisdictionApiClient` for unit tests.
    ///
    /// Configure responses with `set_*_result` methods and verify
    /// calls with `list_calls()` and `get_calls()`.
    pub struct MockJurisdictionClient {
        list_result: Mutex<Option<Result<JurisdictionList, ApiError>>>,
        get_result: Mutex<Option<Result<Jurisdiction, ApiError>>>,
        list_calls: Mutex<Vec<ListCall>>,
        get_calls: Mutex<Vec<String>>,
    }

    impl MockJurisdictionClient {
        pub fn new() -> Self {
            Self {
                list_result: Mutex::new(None),
                get_result: Mutex::new(None),
                list_calls: Mutex::new(Vec::new()),
                get_calls: Mutex::new(Vec::new()),
            }
        }

        /// Set the result for the next `list_jurisdictions` call.
        pub fn set_list_result(&self, result: Result<JurisdictionList, ApiError>) {
            *self.list_result.lock().unwrap() = Some(result);
        }

        /// Set the result for the next `get_jurisdiction` call.
        pub fn set_get_result(&self, result: Result<Jurisdiction, ApiError>) {
            *self.get_result.lock().unwrap() = Some(result);
        }

        pub fn list_calls(&self) -> Vec<ListCall> {
            self.list_calls.lock().unwrap().clone()
        }

        /// Get all ids passed to `get_jurisdiction`.
        pub fn get_calls(&self) -> Vec<String> {
            self.get_calls.lock().unwrap().clone()
        }
    }

    impl Default for MockJurisdictionClient {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl JurisdictionApiClient for MockJurisdictionClient {
        async fn list_jurisdictions(
            &self,
            classification: JurisdictionClassification,
            include_organizations: bool,
            include_legislative_sessions: bool,
            page: u32,
            per_page: u32,
        ) -> Result<JurisdictionList, ApiError> {
            self.list_calls.lock().unwrap().push(ListCall {
                classification,
                include_organizations,
                include_legislative_sessions,
                page,
                per_page,
            });

            self.list_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(JurisdictionList::default()))
        }

        async fn get_jurisdiction(
            &self,
            id: &str,
            _include_organizations: bool,
            _include_legislative_sessions: bool,
        ) -> Result<Jurisdiction, ApiError> {
            self.get_calls.lock().unwrap().push(id.to_string());

            self.get_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Err(ApiError::NotFound(id.to_string())))
        }
    }
}
