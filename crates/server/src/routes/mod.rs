mod api;
pub mod health;
pub mod metrics;
mod pages;

use axum::{
    Router,
    routing::{get, post},
};

use crate::openmrs::OpenmrsClient;

/// Build the page routes (mounted under the SPA base path)
pub fn page_routes() -> Router<OpenmrsClient> {
    Router::new()
        .route("/ohri-home", get(pages::ohri_home))
        .route("/form-render-test", get(pages::form_render_test))
}

/// Build the JSON routes over the OpenMRS client operations
pub fn api_routes() -> Router<OpenmrsClient> {
    Router::new()
        .route(
            "/identifiersource/{source}/identifier",
            post(api::generate_identifier),
        )
        .route("/patient", post(api::save_patient))
        .route("/patients", post(api::save_patients))
        .route("/relationship", post(api::save_relationship))
        .route(
            "/patient/{uuid}/identifier",
            get(api::fetch_patient_identifiers).post(api::save_identifier),
        )
        .route("/patient/{uuid}/anc-visits", get(api::anc_visits))
        .route("/patient/{uuid}/edd", get(api::estimated_delivery_date))
        .route("/patient/{uuid}/hiv-status", get(api::mother_hiv_status))
        .route("/patient/{uuid}/relationships", get(api::family_relationships))
        .route("/identifier/{identifier}", get(api::identifier_info))
        .route("/child/{uuid}/final-outcome", get(api::child_final_outcome))
        .route("/summary", get(api::summary))
}
