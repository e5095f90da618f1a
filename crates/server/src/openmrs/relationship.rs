use pmtct_core::{CreatedResource, Relationship, RelationshipRecord, ResultsPage};

use super::client::{ClientError, OpenmrsClient, REST_BASE};

impl OpenmrsClient {
    /// Create a relationship between two people
    pub async fn save_relationship(
        &self,
        relationship: &Relationship,
    ) -> Result<CreatedResource, ClientError> {
        self.post_json(&format!("{REST_BASE}/relationship"), relationship).await
    }

    /// All relationships a person takes part in, on either side
    pub async fn get_family_relationships(
        &self,
        patient_uuid: &str,
    ) -> Result<Vec<RelationshipRecord>, ClientError> {
        let page: Option<ResultsPage<RelationshipRecord>> = self
            .get_json(
                &format!("{REST_BASE}/relationship"),
                &[("v", "full"), ("person", patient_uuid)],
            )
            .await?;

        Ok(page.map(|p| p.results).unwrap_or_default())
    }
}
