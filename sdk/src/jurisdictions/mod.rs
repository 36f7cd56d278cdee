//! Jurisdiction provider.
//!
//! # Architecture
//!
//! - [`JurisdictionApiClient`] - Trait defining the list and detail operations
//! - [`HttpJurisdictionClient`] - Real HTTP implementation using reqwest
//! - [`mock::MockJurisdictionClient`] - Mock for unit tests (behind `test-utils` feature)

mod client;
mod types;

pub use client::{detail_query, list_query, HttpJurisdictionClient, JurisdictionApiClient};
pub use types::{
    Chamber, Jurisdiction, JurisdictionClassification, JurisdictionList, LegislativeSession, Post,
};

#[cfg(any(test, feature = "test-utils"))]
pub use client::mock;
