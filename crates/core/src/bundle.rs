use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// FHIR Bundle types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BundleType {
    Searchset,
    History,
    Collection,
    Document,
    Message,
    Transaction,
    TransactionResponse,
    Batch,
    BatchResponse,
}

/// FHIR Bundle resource (simplified for search responses from the fhir2 module)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    #[serde(default = "Bundle::resource_type_default")]
    pub resource_type: String,

    #[serde(rename = "type", default = "Bundle::bundle_type_default")]
    pub bundle_type: BundleType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub link: Vec<BundleLink>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entry: Vec<BundleEntry>,
}

impl Bundle {
    fn resource_type_default() -> String {
        "Bundle".to_string()
    }

    fn bundle_type_default() -> BundleType {
        BundleType::Searchset
    }

    /// Decode the resource of the first entry, if there is one
    pub fn first_resource<T: DeserializeOwned>(&self) -> Result<Option<T>, serde_json::Error> {
        match self.entry.first().and_then(|e| e.resource.clone()) {
            Some(resource) => serde_json::from_value(resource).map(Some),
            None => Ok(None),
        }
    }
}

/// Navigation link within a searchset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleLink {
    pub relation: String,
    pub url: String,
}

/// Single entry of a Bundle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<JsonValue>,
}
