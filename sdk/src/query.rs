//! Query-string construction shared by the providers.
//!
//! Parameters keep insertion order and may repeat (`include`, `id`), so they
//! are stored as an ordered list of pairs rather than a map.

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

/// Ordered list of query parameters for one request.
///
/// The API key is not part of this list; the transport prepends it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a parameter. Repeated keys are kept.
    pub fn push(&mut self, key: &'static str, value: impl Display) -> &mut Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Append one parameter per value, skipping values already seen.
    pub fn push_unique<T>(&mut self, key: &'static str, values: &[T]) -> &mut Self
    where
        T: Copy + Eq + Hash + Display,
    {
        for value in dedup_preserving_order(values) {
            self.push(key, value);
        }
        self
    }

    /// All values recorded under `key`, in insertion order.
    #[must_use]
    pub fn values(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Whether any value was recorded under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| *k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Error returned when a string names no known wire value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Drop repeated items, keeping the first occurrence of each.
#[must_use]
pub fn dedup_preserving_order<T>(items: &[T]) -> Vec<T>
where
    T: Copy + Eq + Hash,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .copied()
        .filter(|item| seen.insert(*item))
        .collect()
}
