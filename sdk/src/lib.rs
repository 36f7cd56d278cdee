//! Typed client for the Open States v3 API.
//!
//! Two independent providers wrap the jurisdictions and people resources:
//!
//! - [`jurisdictions::HttpJurisdictionClient`] lists and fetches jurisdictions
//! - [`people::HttpPeopleClient`] lists legislators by filter or coordinate
//!
//! Both decode list responses into [`pagination::ListResponse`] envelopes.

#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

pub mod config;
pub mod jurisdictions;
pub mod pagination;
pub mod people;
pub mod query;
pub mod transport;

pub use transport::{ApiError, DEFAULT_BASE_URL};
