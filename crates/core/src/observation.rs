use serde::{Deserialize, Serialize};

/// FHIR Observation (only the fields read by the PMTCT outcome lookups)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_codeable_concept: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date_time: Option<String>,
}

impl Observation {
    /// Display text of the first coding of the coded value
    pub fn coded_display(&self) -> Option<&str> {
        self.value_codeable_concept
            .as_ref()?
            .coding
            .first()?
            .display
            .as_deref()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeableConcept {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coding: Vec<Coding>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Coding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coded_display_without_coding() {
        let obs: Observation = serde_json::from_value(json!({
            "resourceType": "Observation",
            "valueCodeableConcept": {"text": "Transferred out"}
        }))
        .unwrap();
        assert_eq!(obs.coded_display(), None);

        let obs: Observation = serde_json::from_value(json!({"valueQuantity": {"value": 3}})).unwrap();
        assert_eq!(obs.coded_display(), None);
    }
}
