//! Pagination metadata attached to every list response.

use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_default_from_null;

/// Page bookkeeping returned alongside list results.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationMeta {
    pub per_page: u32,
    pub page: u32,
    pub max_page: u32,
    pub total_items: u64,
}

impl PaginationMeta {
    /// Whether a page after this one exists.
    ///
    /// Callers walk pages themselves; the client never follows them.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.page < self.max_page
    }
}

/// Envelope shared by every list endpoint: `{results, pagination}`.
///
/// A `null` results array decodes as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ListResponse<T> {
    #[serde(
        deserialize_with = "deserialize_default_from_null",
        bound(deserialize = "T: Deserialize<'de>")
    )]
    pub results: Vec<T>,
    pub pagination: PaginationMeta,
}
