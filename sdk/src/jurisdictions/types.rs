//! Data types for jurisdiction responses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_aux::field_attributes::deserialize_default_from_null;

use crate::pagination::ListResponse;
use crate::query::UnknownVariant;

/// Kind of government a jurisdiction represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JurisdictionClassification {
    State,
    Municipality,
    Country,
}

impl JurisdictionClassification {
    pub const ALL: [Self; 3] = [Self::State, Self::Municipality, Self::Country];

    /// Value sent as the `classification` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::State => "state",
            Self::Municipality => "municipality",
            Self::Country => "country",
        }
    }
}

impl fmt::Display for JurisdictionClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JurisdictionClassification {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "jurisdiction classification",
                value: s.to_string(),
            })
    }
}

/// Missing, `null` and `""` all mean the API sent no classification.
fn deserialize_optional_classification<'de, D>(
    deserializer: D,
) -> Result<Option<JurisdictionClassification>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// A seat or district within a chamber.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub label: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub role: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub division_id: String,
    pub maximum_memberships: u32,
}

/// A legislative body (e.g. upper or lower house) within a jurisdiction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chamber {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub classification: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub districts: Vec<Post>,
}

/// A bounded period during which a legislature convenes.
///
/// Dates are kept exactly as the API renders them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegislativeSession {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub identifier: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub classification: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub start_date: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub end_date: String,
}

/// A state, municipality or country tracked by the API.
///
/// `organizations` and `legislative_sessions` are only populated when the
/// matching `include` was requested; otherwise they decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Jurisdiction {
    /// OCD jurisdiction id (e.g., "ocd-jurisdiction/country:us/state:tx/government")
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub name: String,
    /// `None` when the API sent no classification.
    #[serde(deserialize_with = "deserialize_optional_classification")]
    pub classification: Option<JurisdictionClassification>,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub division_id: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub url: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub organizations: Vec<Chamber>,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub legislative_sessions: Vec<LegislativeSession>,
}

/// Response from the jurisdictions list endpoint.
pub type JurisdictionList = ListResponse<Jurisdiction>;
