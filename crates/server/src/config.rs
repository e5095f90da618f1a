//! Server configuration

use std::time::Duration;

use pmtct_core::ReportDefinitions;

use crate::openmrs::{ClientError, Credentials, OpenmrsClient};

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub openmrs_base_url: String,
    pub openmrs_username: Option<String>,
    pub openmrs_password: Option<String>,
    /// Path the page routes are mounted under
    pub spa_base: String,
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    pub reports: ReportDefinitions,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = ReportDefinitions::default();

        Self {
            bind_address: std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            openmrs_base_url: std::env::var("OPENMRS_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080/openmrs".into()),
            openmrs_username: std::env::var("OPENMRS_USERNAME").ok(),
            openmrs_password: std::env::var("OPENMRS_PASSWORD").ok(),
            spa_base: normalize_base_path(
                &std::env::var("SPA_BASE").unwrap_or_else(|_| "/openmrs/spa".into()),
            ),
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".into())
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            reports: ReportDefinitions {
                anc_visits: std::env::var("ANC_VISITS_REPORT_UUID").unwrap_or(defaults.anc_visits),
                edd: std::env::var("EDD_REPORT_UUID").unwrap_or(defaults.edd),
                mother_hiv_status: std::env::var("MOTHER_HIV_STATUS_REPORT_UUID")
                    .unwrap_or(defaults.mother_hiv_status),
            },
        }
    }

    /// Basic-auth credentials, when both halves are configured
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.openmrs_username, &self.openmrs_password) {
            (Some(username), Some(password)) => Some(Credentials {
                username: username.clone(),
                password: password.clone(),
            }),
            _ => None,
        }
    }

    /// Build the OpenMRS client described by this configuration
    pub fn openmrs_client(&self) -> Result<OpenmrsClient, ClientError> {
        Ok(OpenmrsClient::with_timeout(
            &self.openmrs_base_url,
            Duration::from_secs(self.request_timeout_secs),
        )?
        .credentials(self.credentials())
        .reports(self.reports.clone()))
    }
}

/// Normalize a mount path to `/segment[/segment...]`, or `""` for the root
pub fn normalize_base_path(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
