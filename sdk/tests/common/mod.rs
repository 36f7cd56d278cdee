//! Common test utilities for integration tests.
//!
//! - [`http_mock::MockHttpServer`] - Declarative wiremock stubs for the Open States endpoints
//! - [`fixtures`] - Canned JSON bodies shaped like real API responses

#![allow(dead_code)]

pub mod fixtures;
pub mod http_mock;
