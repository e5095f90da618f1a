//! Patient, identifier, and identifier-generation calls

use futures::future::try_join_all;
use pmtct_core::{
    CreatedResource, GeneratedIdentifier, IdentifierSearch, Patient, PatientIdentifier,
    ResultsPage,
};
use serde_json::json;

use super::client::{ClientError, OpenmrsClient, REST_BASE, segment};

/// Representation requested by identifier lookups
const IDENTIFIER_INFO_REPRESENTATION: &str =
    "custom:(identifiers:(identifier,identifierType:(uuid,display)),person:(uuid,display))";

impl OpenmrsClient {
    /// Draw the next identifier from an idgen identifier source
    pub async fn generate_identifier(
        &self,
        source: &str,
    ) -> Result<GeneratedIdentifier, ClientError> {
        let source = segment(source)?;
        self.post_json(
            &format!("{REST_BASE}/idgen/identifiersource/{source}/identifier"),
            &json!({}),
        )
        .await
    }

    /// Create a patient
    pub async fn save_patient(&self, patient: &Patient) -> Result<CreatedResource, ClientError> {
        self.post_json(&format!("{REST_BASE}/patient"), patient).await
    }

    /// Create several patients concurrently.
    ///
    /// Results come back in input order. The first failure fails the whole
    /// batch; patients already created are not rolled back.
    pub async fn save_patients(
        &self,
        patients: &[Patient],
    ) -> Result<Vec<CreatedResource>, ClientError> {
        try_join_all(patients.iter().map(|p| self.save_patient(p))).await
    }

    /// List a patient's identifiers, `None` if there are none
    pub async fn fetch_patient_identifiers(
        &self,
        patient_uuid: &str,
    ) -> Result<Option<Vec<PatientIdentifier>>, ClientError> {
        let patient_uuid = segment(patient_uuid)?;
        let page: Option<ResultsPage<PatientIdentifier>> = self
            .get_json(&format!("{REST_BASE}/patient/{patient_uuid}/identifier"), &[])
            .await?;

        Ok(page
            .map(|p| p.results)
            .filter(|results| !results.is_empty()))
    }

    /// Add an identifier to an existing patient
    pub async fn save_identifier(
        &self,
        identifier: &PatientIdentifier,
        patient_uuid: &str,
    ) -> Result<CreatedResource, ClientError> {
        let patient_uuid = segment(patient_uuid)?;
        self.post_json(
            &format!("{REST_BASE}/patient/{patient_uuid}/identifier"),
            identifier,
        )
        .await
    }

    /// Look up which patients carry `identifier`
    pub async fn get_identifier_info(
        &self,
        identifier: &str,
    ) -> Result<Option<IdentifierSearch>, ClientError> {
        self.get_json(
            &format!("{REST_BASE}/patient"),
            &[
                ("identifier", identifier),
                ("v", IDENTIFIER_INFO_REPRESENTATION),
            ],
        )
        .await
    }
}
