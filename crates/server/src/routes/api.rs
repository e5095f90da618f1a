//! JSON pass-through handlers, one per OpenMRS client operation

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use pmtct_core::{Patient, PatientIdentifier, Relationship};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::openmrs::OpenmrsClient;

/// `?ptracker_id=` on the per-patient report routes
#[derive(Debug, Deserialize)]
pub struct PtrackerQuery {
    ptracker_id: String,
}

/// Query parameters for the final outcome lookup
#[derive(Debug, Deserialize)]
pub struct FinalOutcomeQuery {
    concept: String,
    encounter_type: Option<String>,
}

#[derive(Serialize)]
pub struct FinalOutcomeResponse {
    outcome: String,
}

/// Turn a missing result into a 404
fn found<T>(value: Option<T>, what: impl FnOnce() -> String) -> Result<Json<T>, AppError> {
    value.map(Json).ok_or_else(|| AppError::NotFound(what()))
}

/// POST /api/identifiersource/{source}/identifier
pub async fn generate_identifier(
    State(client): State<OpenmrsClient>,
    Path(source): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let generated = client.generate_identifier(&source).await?;
    Ok((StatusCode::CREATED, Json(generated)))
}

/// POST /api/patient
pub async fn save_patient(
    State(client): State<OpenmrsClient>,
    Json(patient): Json<Patient>,
) -> Result<impl IntoResponse, AppError> {
    let created = client.save_patient(&patient).await?;
    tracing::info!(patient_uuid = %created.uuid, "Patient created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// POST /api/patients - all or nothing from the caller's point of view
pub async fn save_patients(
    State(client): State<OpenmrsClient>,
    Json(patients): Json<Vec<Patient>>,
) -> Result<impl IntoResponse, AppError> {
    if patients.is_empty() {
        return Err(AppError::BadRequest("No patients supplied".to_string()));
    }

    let created = client.save_patients(&patients).await?;
    tracing::info!(count = created.len(), "Patients created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// POST /api/relationship
pub async fn save_relationship(
    State(client): State<OpenmrsClient>,
    Json(relationship): Json<Relationship>,
) -> Result<impl IntoResponse, AppError> {
    let created = client.save_relationship(&relationship).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/patient/{uuid}/identifier
pub async fn fetch_patient_identifiers(
    State(client): State<OpenmrsClient>,
    Path(uuid): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let identifiers = client.fetch_patient_identifiers(&uuid).await?;
    found(identifiers, || format!("Patient/{uuid} has no identifiers"))
}

/// POST /api/patient/{uuid}/identifier
pub async fn save_identifier(
    State(client): State<OpenmrsClient>,
    Path(uuid): Path<String>,
    Json(identifier): Json<PatientIdentifier>,
) -> Result<impl IntoResponse, AppError> {
    let created = client.save_identifier(&identifier, &uuid).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/patient/{uuid}/anc-visits?ptracker_id=
pub async fn anc_visits(
    State(client): State<OpenmrsClient>,
    Path(uuid): Path<String>,
    Query(q): Query<PtrackerQuery>,
) -> Result<impl IntoResponse, AppError> {
    let dataset = client.get_anc_visit_count(&q.ptracker_id, &uuid).await?;
    found(dataset, || format!("No ANC visits dataset for Patient/{uuid}"))
}

/// GET /api/patient/{uuid}/edd?ptracker_id=
pub async fn estimated_delivery_date(
    State(client): State<OpenmrsClient>,
    Path(uuid): Path<String>,
    Query(q): Query<PtrackerQuery>,
) -> Result<impl IntoResponse, AppError> {
    let dataset = client
        .get_estimated_delivery_date(&uuid, &q.ptracker_id)
        .await?;
    found(dataset, || format!("No EDD dataset for Patient/{uuid}"))
}

/// GET /api/patient/{uuid}/hiv-status?ptracker_id=
pub async fn mother_hiv_status(
    State(client): State<OpenmrsClient>,
    Path(uuid): Path<String>,
    Query(q): Query<PtrackerQuery>,
) -> Result<impl IntoResponse, AppError> {
    let dataset = client.fetch_mother_hiv_status(&uuid, &q.ptracker_id).await?;
    found(dataset, || format!("No HIV status dataset for Patient/{uuid}"))
}

/// GET /api/patient/{uuid}/relationships
pub async fn family_relationships(
    State(client): State<OpenmrsClient>,
    Path(uuid): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(client.get_family_relationships(&uuid).await?))
}

/// GET /api/identifier/{identifier}
pub async fn identifier_info(
    State(client): State<OpenmrsClient>,
    Path(identifier): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let info = client.get_identifier_info(&identifier).await?;
    found(info, || format!("Identifier {identifier} not found"))
}

/// GET /api/child/{uuid}/final-outcome?concept=&encounter_type=
pub async fn child_final_outcome(
    State(client): State<OpenmrsClient>,
    Path(uuid): Path<String>,
    Query(q): Query<FinalOutcomeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = client
        .fetch_child_latest_final_outcome(&uuid, &q.concept, q.encounter_type.as_deref())
        .await?;
    found(outcome.map(|outcome| FinalOutcomeResponse { outcome }), || {
        format!("No final outcome recorded for Patient/{uuid}")
    })
}

/// GET /api/summary
pub async fn summary(State(client): State<OpenmrsClient>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(client.dashboard_summary().await?))
}
