//! People API client.
//!
//! Lists legislators either by filter (jurisdiction, name, district,
//! explicit ids) or by geographic coordinate.
//!
//! # Example
//!
//! ```ignore
//! use openstates_sdk::people::{FilterType, HttpPeopleClient, Inclusion, PeopleApiClient, PeopleQuery};
//!
//! let client = HttpPeopleClient::new("my-api-key");
//! let query = PeopleQuery::new()
//!     .filter(FilterType::Jurisdiction, "North Carolina")
//!     .include(Inclusion::Links);
//! let people = client.list_people(&query).await?;
//!
//! let nearby = client.list_people_geo(35.7796, -78.6382, &[]).await?;
//! ```

use std::collections::BTreeMap;

use async_trait::async_trait;

use super::types::{FilterType, Inclusion, OrgClassification, PeopleList};
use crate::config::ApiConfig;
use crate::query::QueryParams;
use crate::transport::{ApiError, HttpTransport, DEFAULT_BASE_URL};

const PEOPLE_ENDPOINT: &str = "/people";
const PEOPLE_GEO_ENDPOINT: &str = "/people.geo";

/// Parameters for a people listing.
///
/// Filters are keyed by kind, so each kind carries at most one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeopleQuery {
    pub filters: BTreeMap<FilterType, String>,
    pub ids: Vec<String>,
    pub org_classification: Option<OrgClassification>,
    /// Requested inclusions; duplicates are sent once.
    pub include: Vec<Inclusion>,
    /// 1-based page number.
    pub page: u32,
    pub per_page: u32,
}

impl Default for PeopleQuery {
    fn default() -> Self {
        Self {
            filters: BTreeMap::new(),
            ids: Vec::new(),
            org_classification: None,
            include: Vec::new(),
            page: 1,
            per_page: 10,
        }
    }
}

impl PeopleQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for one filter kind, replacing any previous value.
    #[must_use]
    pub fn filter(mut self, kind: FilterType, value: impl Into<String>) -> Self {
        self.filters.insert(kind, value.into());
        self
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.ids.push(id.into());
        self
    }

    #[must_use]
    pub const fn org_classification(mut self, classification: OrgClassification) -> Self {
        self.org_classification = Some(classification);
        self
    }

    #[must_use]
    pub fn include(mut self, inclusion: Inclusion) -> Self {
        self.include.push(inclusion);
        self
    }

    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    #[must_use]
    pub const fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Query parameters for the list endpoint, excluding `apikey`.
    #[must_use]
    pub fn to_query_params(&self) -> QueryParams {
        let mut query = QueryParams::new();
        for (kind, value) in &self.filters {
            query.push(kind.as_str(), value);
        }
        for id in &self.ids {
            query.push("id", id);
        }
        if let Some(classification) = self.org_classification {
            query.push("org_classification", classification);
        }
        query.push_unique("include", &self.include);
        query.push("page", self.page).push("per_page", self.per_page);
        query
    }
}

/// Check that `lat`/`lng` is a finite point on the globe.
///
/// # Errors
/// Returns `ApiError::InvalidCoordinate` for NaN, infinite or out-of-range values.
pub fn validate_coordinates(lat: f64, lng: f64) -> Result<(), ApiError> {
    if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng) {
        Ok(())
    } else {
        Err(ApiError::InvalidCoordinate { lat, lng })
    }
}

/// Query parameters for the geo endpoint, excluding `apikey`.
#[must_use]
pub fn geo_query(lat: f64, lng: f64, include: &[Inclusion]) -> QueryParams {
    let mut query = QueryParams::new();
    query.push("lat", lat).push("lng", lng);
    query.push_unique("include", include);
    query
}

/// Trait for people API operations.
///
/// Use `HttpPeopleClient` for real HTTP calls, or `mock::MockPeopleClient`
/// in tests.
#[async_trait]
pub trait PeopleApiClient: Send + Sync {
    /// List one page of people matching the query.
    async fn list_people(&self, query: &PeopleQuery) -> Result<PeopleList, ApiError>;

    /// List people whose districts contain the given coordinate.
    async fn list_people_geo(
        &self,
        lat: f64,
        lng: f64,
        include: &[Inclusion],
    ) -> Result<PeopleList, ApiError>;
}

/// HTTP-based implementation of `PeopleApiClient`.
#[derive(Debug, Clone)]
pub struct HttpPeopleClient {
    transport: HttpTransport,
}

impl HttpPeopleClient {
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

#[async_trait]
impl PeopleApiClient for HttpPeopleClient {
    async fn list_people(&self, query: &PeopleQuery) -> Result<PeopleList, ApiError> {
        self.transport
            .get_json(PEOPLE_ENDPOINT, &query.to_query_params())
            .await
    }

    async fn list_people_geo(
        &self,
        lat: f64,
        lng: f64,
        include: &[Inclusion],
    ) -> Result<PeopleList, ApiError> {
        validate_coordinates(lat, lng)?;
        self.transport
            .get_json(PEOPLE_GEO_ENDPOINT, &geo_query(lat, lng, include))
            .await
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

    use super::{ApiError, Inclusion, PeopleApiClient, PeopleList, PeopleQuery};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Mock implementation of `PeopleApiClient` for unit tests.
    ///
    /// Configure responses with `set_*_result` methods and verify
    /// calls with `list_calls()` and `geo_calls()`.
    pub struct MockPeopleClient {
        list_result: Mutex<Option<Result<PeopleList, ApiError>>>,
        geo_result: Mutex<Option<Result<PeopleList, ApiError>>>,
        list_calls: Mutex<Vec<PeopleQuery>>,
        geo_calls: Mutex<Vec<(f64, f64, Vec<Inclusion>)>>,
    }

    impl MockPeopleClient {
        pub fn new() -> Self {
            Self {
                list_result: Mutex::new(None),
                geo_result: Mutex::new(None),
                list_calls: Mutex::new(Vec::new()),
                geo_calls: Mutex::new(Vec::new()),
            }
        }

        /// Set the result for the next `list_people` call.
        pub fn set_list_result(&self, result: Result<PeopleList, ApiError>) {
            *self.list_result.lock().unwrap() = Some(result);
        }

        /// Set the result for the next `list_people_geo` call.
        pub fn set_geo_result(&self, result: Result<PeopleList, ApiError>) {
            *self.geo_result.lock().unwrap() = Some(result);
        }

        pub fn list_calls(&self) -> Vec<PeopleQuery> {
            self.list_calls.lock().unwrap().clone()
        }

        /// Get all coordinates and inclusions passed to `list_people_geo`.
        pub fn geo_calls(&self) -> Vec<(f64, f64, Vec<Inclusion>)> {
            self.geo_calls.lock().unwrap().clone()
        }
    }

    impl Default for MockPeopleClient {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl PeopleApiClient for MockPeopleClient {
        async fn list_people(&self, query: &PeopleQuery) -> Result<PeopleList, ApiError> {
            self.list_calls.lock().unwrap().push(query.clone());

            self.list_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(PeopleList::default()))
        }

        async fn list_people_geo(
            &self,
            lat: f64,
            lng: f64,
            include: &[Inclusion],
        ) -> Result<PeopleList, ApiError> {
            self.geo_calls
                .lock()
                .unwrap()
                .push((lat, lng, include.to_vec()));

            self.geo_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(PeopleList::default()))
        }
    }
}
