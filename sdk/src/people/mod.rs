//! People provider.
//!
//! - [`PeopleApiClient`] - Trait defining the list and geo operations
//! - [`HttpPeopleClient`] - Real HTTP implementation using reqwest
//! - [`mock::MockPeopleClient`] - Mock for unit tests (behind `test-utils` feature)

mod client;
mod types;

pub use client::{
    geo_query, validate_coordinates, HttpPeopleClient, PeopleApiClient, PeopleQuery,
};
pub use types::{
    AltIdentifier, AltName, CompactJurisdiction, CurrentRole, District, FilterType, Inclusion,
    Link, Office, OrgClassification, PeopleList, Person,
};

#[cfg(any(test, feature = "test-utils"))]
pub use client::mock;
