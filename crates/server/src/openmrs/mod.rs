//! OpenMRS REST and FHIR client
//!
//! Each operation issues a single request (or, for `save_patients`, one
//! concurrent batch) against an endpoint OpenMRS already exposes and unwraps
//! the part of the response callers need.

mod client;
mod observation;
mod patient;
mod relationship;
mod reports;

pub use client::{ClientError, Credentials, OpenmrsClient, REST_BASE};
