//! Canned response bodies.

use serde_json::{json, Value};

pub const ABILENE_ID: &str = "ocd-jurisdiction/country:us/state:tx/place:abilene/government";

pub fn pagination(per_page: u32, page: u32, max_page: u32, total_items: u64) -> Value {
    json!({
        "per_page": per_page,
        "page": page,
        "max_page": max_page,
        "total_items": total_items
    })
}

pub fn abilene() -> Value {
    json!({
        "id": ABILENE_ID,
        "name": "Abilene",
        "classification": "municipality",
        "division_id": "ocd-division/country:us/state:tx/place:abilene",
        "url": "https://abilenetx.gov"
    })
}

pub fn north_carolina_with_inclusions() -> Value {
    json!({
        "id": "ocd-jurisdiction/country:us/state:nc/government",
        "name": "North Carolina",
        "classification": "state",
        "division_id": "ocd-division/country:us/state:nc",
        "url": "https://nc.gov",
        "organizations": [{
            "id": "ocd-organization/nc-senate",
            "name": "Senate",
            "classification": "upper",
            "districts": [{
                "label": "1",
                "role": "Senator",
                "division_id": "ocd-division/country:us/state:nc/sldu:1",
                "maximum_memberships": 1
            }]
        }],
        "legislative_sessions": [{
            "identifier": "2023",
            "name": "2023-2024 Session",
            "classification": "primary",
            "start_date": "2023-01-11",
            "end_date": "2024-12-31"
        }]
    })
}

/// A person whose district is rendered with the given JSON value.
pub fn person_with_district(district: Value) -> Value {
    json!({
        "id": "ocd-person/adb58f21-f2fd-4830-85b6-f490b0867d14",
        "name": "Jane Doe",
        "party": "Democratic",
        "current_role": {
            "title": "Representative",
            "org_classification": "lower",
            "district": district,
            "division_id": "ocd-division/country:us/state:nc/sldl:5"
        },
        "jurisdiction": {
            "id": "ocd-jurisdiction/country:us/state:nc/government",
            "name": "North Carolina",
            "classification": "state"
        },
        "given_name": "Jane",
        "family_name": "Doe",
        "image": null,
        "email": "jane.doe@ncleg.gov",
        "gender": "Female",
        "birth_date": "",
        "death_date": "",
        "extras": {"occupation": "Teacher"},
        "created_at": "2020-01-01T00:00:00+00:00",
        "updated_at": "2024-06-01T00:00:00+00:00",
        "openstates_url": "https://openstates.org/person/jane-doe-abc/",
        "offices": [{
            "name": "Capitol Office",
            "fax": null,
            "voice": "919-555-0100",
            "address": "16 W. Jones Street, Raleigh, NC 27601",
            "classification": "capitol"
        }]
    })
}

pub fn people_envelope(people: Vec<Value>) -> Value {
    let total = people.len() as u64;
    json!({
        "results": people,
        "pagination": pagination(10, 1, 1, total)
    })
}
