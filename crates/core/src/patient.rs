//! OpenMRS REST patient, person, and identifier payloads.
//!
//! Write shapes follow what `/ws/rest/v1/patient` accepts on create; read
//! shapes keep only the fields the PMTCT workflows look at. Unknown fields
//! in responses are ignored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Lightweight `{uuid, display}` reference as returned by OpenMRS
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceRef {
    pub uuid: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

/// Reference to another OpenMRS object.
///
/// Create payloads carry a bare uuid; reads return a `{uuid, display, links}`
/// object. Both decode into this type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Reference {
    Uuid(String),
    Resource(ResourceRef),
}

impl Reference {
    pub fn uuid(&self) -> &str {
        match self {
            Reference::Uuid(uuid) => uuid,
            Reference::Resource(r) => &r.uuid,
        }
    }

    pub fn display(&self) -> Option<&str> {
        match self {
            Reference::Uuid(_) => None,
            Reference::Resource(r) => r.display.as_deref(),
        }
    }
}

impl From<&str> for Reference {
    fn from(uuid: &str) -> Self {
        Reference::Uuid(uuid.to_string())
    }
}

impl From<String> for Reference {
    fn from(uuid: String) -> Self {
        Reference::Uuid(uuid)
    }
}

/// Patient create body for `POST /ws/rest/v1/patient`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    /// Client-assigned uuid, if the caller wants a stable one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    pub person: Person,

    #[serde(default)]
    pub identifiers: Vec<PatientIdentifier>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    pub names: Vec<PersonName>,

    /// OpenMRS gender code: "M", "F", "O" or "U"
    pub gender: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate_estimated: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<PersonAddress>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<PersonAttribute>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    pub given_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,

    pub family_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_village: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_province: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonAttribute {
    pub attribute_type: Reference,
    pub value: JsonValue,
}

/// Patient identifier, both as sent to and as read from OpenMRS
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientIdentifier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    pub identifier: String,

    pub identifier_type: Reference,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Reference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred: Option<bool>,
}

/// Body returned by the idgen identifier source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedIdentifier {
    pub identifier: String,
}

/// Resource echoed back by OpenMRS after a successful create
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResource {
    pub uuid: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// Everything else in the representation
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// Standard OpenMRS list envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsPage<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// Response of the identifier lookup with the custom
/// `identifiers:(identifier,identifierType:(uuid,display)),person:(uuid,display)`
/// representation
pub type IdentifierSearch = ResultsPage<IdentifierMatch>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifierMatch {
    #[serde(default)]
    pub identifiers: Vec<IdentifierSummary>,
    pub person: ResourceRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierSummary {
    pub identifier: String,
    pub identifier_type: ResourceRef,
}
