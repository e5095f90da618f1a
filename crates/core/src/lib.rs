//! pmtct-core: Shared OpenMRS and FHIR wire types for the PMTCT module
//!
//! This crate provides the request and response shapes exchanged with the
//! OpenMRS REST and FHIR endpoints (patients, identifiers, relationships,
//! report datasets, observations), the report column helpers used by the
//! dashboard counts, and the OperationOutcome used for error bodies.

pub mod bundle;
pub mod error;
pub mod observation;
pub mod outcome;
pub mod patient;
pub mod relationship;
pub mod report;

pub use bundle::{Bundle, BundleEntry, BundleLink};
pub use error::PmtctError;
pub use observation::{CodeableConcept, Coding, Observation};
pub use outcome::{IssueSeverity, IssueType, OperationOutcome, OperationOutcomeIssue};
pub use patient::{
    CreatedResource, GeneratedIdentifier, IdentifierMatch, IdentifierSearch, IdentifierSummary,
    Patient, PatientIdentifier, Person, PersonAddress, PersonAttribute, PersonName, Reference,
    ResourceRef, ResultsPage,
};
pub use relationship::{Relationship, RelationshipRecord, RelationshipTypeRef};
pub use report::{
    DashboardIndicator, DashboardSummary, DataSet, MambaRecordItem, MambaReport, MambaResult,
    ReportDefinitions, parse_leading_int,
};
