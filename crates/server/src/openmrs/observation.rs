use pmtct_core::{Bundle, Observation};

use super::client::{ClientError, OpenmrsClient};

const FHIR_BASE: &str = "/ws/fhir2/R4";

impl OpenmrsClient {
    /// Display text of the child's most recently updated coded observation
    /// for `concept_uuid`, optionally restricted to one encounter type
    pub async fn fetch_child_latest_final_outcome(
        &self,
        child_uuid: &str,
        concept_uuid: &str,
        encounter_type_uuid: Option<&str>,
    ) -> Result<Option<String>, ClientError> {
        let mut query = vec![("patient", child_uuid), ("code", concept_uuid)];
        if let Some(encounter_type) = encounter_type_uuid.filter(|t| !t.is_empty()) {
            query.push(("encounter.type", encounter_type));
        }
        // latest obs only
        query.push(("_sort", "-_lastUpdated"));
        query.push(("_count", "1"));

        let path = format!("{FHIR_BASE}/Observation");
        let Some(bundle) = self.get_json::<Bundle>(&path, &query).await? else {
            return Ok(None);
        };

        let observation: Option<Observation> =
            bundle.first_resource().map_err(|source| ClientError::Decode {
                path: path.clone(),
                source,
            })?;

        Ok(observation.and_then(|obs| obs.coded_display().map(str::to_string)))
    }
}
