//! Data types for people (legislator) responses and request filters.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_default_from_null;

use crate::pagination::ListResponse;
use crate::query::UnknownVariant;

/// Implements `as_str`, `Display` and `FromStr` from one exhaustive table.
macro_rules! wire_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Value sent on the wire for this variant.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err(UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

/// Field a people listing can be filtered on. Each is its own query key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterType {
    Jurisdiction,
    Name,
    District,
}

wire_enum!(FilterType, "filter type", {
    Jurisdiction => "jurisdiction",
    Name => "name",
    District => "district",
});

/// Classification of the organization a person currently holds a role in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrgClassification {
    Legislature,
    Executive,
    Lower,
    Upper,
    Government,
}

wire_enum!(OrgClassification, "org classification", {
    Legislature => "legislature",
    Executive => "executive",
    Lower => "lower",
    Upper => "upper",
    Government => "government",
});

/// Optional nested data requested through repeated `include` parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Inclusion {
    OtherNames,
    OtherIdentifiers,
    Links,
}

wire_enum!(Inclusion, "inclusion", {
    OtherNames => "other_names",
    OtherIdentifiers => "other_identifiers",
    Links => "links",
});

/// District of a current role.
///
/// The API sends a string for most offices and a bare number for some, so
/// both shapes are kept as-is. An absent or null district is `None` on
/// [`CurrentRole::district`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum District {
    Number(i64),
    Text(String),
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Summary of the role a person currently holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentRole {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub title: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub org_classification: String,
    pub district: Option<District>,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub division_id: String,
}

/// Minimal jurisdiction reference embedded in a person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompactJurisdiction {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub classification: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AltIdentifier {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub identifier: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub scheme: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AltName {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub note: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub url: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub note: String,
}

/// Contact office (capitol or district) of a person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Office {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub fax: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub voice: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub address: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub classification: String,
}

/// A legislator or other office holder.
///
/// `other_identifiers`, `other_names` and `links` are only populated when
/// requested via [`Inclusion`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    /// OCD person id (e.g., "ocd-person/adb58f21-f2fd-4830-85b6-f490b0867d14")
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub party: String,
    pub current_role: Option<CurrentRole>,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub jurisdiction: CompactJurisdiction,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub given_name: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub family_name: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub image: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub email: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub gender: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub birth_date: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub death_date: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub extras: HashMap<String, String>,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub created_at: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub updated_at: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub openstates_url: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub other_identifiers: Vec<AltIdentifier>,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub other_names: Vec<AltName>,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub links: Vec<Link>,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub sources: Vec<Link>,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub offices: Vec<Office>,
}

/// Response from the people and people.geo endpoints.
pub type PeopleList = ListResponse<Person>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_type_wire_strings() {
        let rendered: Vec<_> = FilterType::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(rendered, vec!["jurisdiction", "name", "district"]);
    }

    #[test]
    fn test_org_classification_wire_strings() {
        let rendered: Vec<_> = OrgClassification::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec!["legislature", "executive", "lower", "upper", "government"]
        );
    }

    #[test]
    fn test_inclusion_wire_strings() {
        let rendered: Vec<_> = Inclusion::ALL.iter().map(|i| i.as_str()).collect();
        assert_eq!(rendered, vec!["other_names", "other_identifiers", "links"]);
    }

    #[test]
    fn test_wire_strings_parse_back() {
        for inclusion in Inclusion::ALL {
            assert_eq!(inclusion.as_str().parse::<Inclusion>(), Ok(*inclusion));
        }
        for classification in OrgClassification::ALL {
            assert_eq!(
                classification.as_str().parse::<OrgClassification>(),
                Ok(*classification)
            );
        }
        assert!("government ".parse::<OrgClassification>().is_err());
        assert!("sources".parse::<Inclusion>().is_err());
    }

    #[test]
    fn test_district_shapes() {
        let cases = [
            (r#"{"district": "5"}"#, Some(District::Text("5".into()))),
            (r#"{"district": 5}"#, Some(District::Number(5))),
            (r#"{"district": "At-Large"}"#, Some(District::Text("At-Large".into()))),
            (r#"{"district": null}"#, None),
            (r#"{}"#, None),
        ];

        for (json, expected) in cases {
            let role: CurrentRole = serde_json::from_str(json).unwrap();
            assert_eq!(role.district, expected, "case {json}");
        }
    }

    #[test]
    fn test_district_serializes_in_received_shape() {
        let number = serde_json::to_value(District::Number(7)).unwrap();
        let text = serde_json::to_value(District::Text("7".into())).unwrap();
        assert_eq!(number, serde_json::json!(7));
        assert_eq!(text, serde_json::json!("7"));
        assert_eq!(District::Number(7).to_string(), District::Text("7".into()).to_string());
    }

    #[test]
    fn test_person_with_nulls_decodes() {
        let json = r#"{
            "id": "ocd-person/1",
            "name": "Jane Doe",
            "party": "Democratic",
            "current_role": {"title": "Senator", "org_classification": "upper", "district": 12, "division_id": null},
            "jurisdiction": {"id": "ocd-jurisdiction/country:us/state:nc/government", "name": "North Carolina", "classification": "state"},
            "given_name": "Jane",
            "family_name": "Doe",
            "image": null,
            "email": null,
            "gender": "Female",
            "birth_date": "",
            "death_date": "",
            "extras": null,
            "created_at": "2020-01-01T00:00:00+00:00",
            "updated_at": "2024-01-01T00:00:00+00:00",
            "openstates_url": "https://openstates.org/person/jane-doe/",
            "other_names": [{"name": "J. Doe", "note": null}]
        }"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert!(person.image.is_empty());
        assert!(person.extras.is_empty());
        assert_eq!(person.other_names[0].name, "J. Doe");
        assert!(person.links.is_empty());
        let role = person.current_role.unwrap();
        assert_eq!(role.district, Some(District::Number(12)));
    }

    #[test]
    fn test_person_without_current_role() {
        let person: Person =
            serde_json::from_str(r#"{"id": "ocd-person/2", "name": "Former Member", "current_role": null}"#)
                .unwrap();
        assert!(person.current_role.is_none());
    }

    #[test]
    fn test_nested_null_strings_decode_as_empty() {
        let json = r#"{
            "id": "ocd-person/3",
            "name": "Nulls",
            "jurisdiction": {"id": null, "name": null, "classification": null},
            "other_identifiers": [{"identifier": null, "scheme": null}],
            "other_names": [{"name": null, "note": null}],
            "links": [{"url": null, "note": null}]
        }"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.jurisdiction, CompactJurisdiction::default());
        assert_eq!(person.other_identifiers, vec![AltIdentifier::default()]);
        assert_eq!(person.other_names, vec![AltName::default()]);
        assert_eq!(person.links, vec![Link::default()]);
    }
}
