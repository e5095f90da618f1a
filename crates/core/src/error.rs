use thiserror::Error;

/// Errors raised while interpreting OpenMRS payloads
#[derive(Debug, Error)]
pub enum PmtctError {
    #[error("Report column '{column}' has a non-numeric value: {value}")]
    InvalidReportValue { column: String, value: String },
}
