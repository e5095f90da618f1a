//! HTTP middleware

pub mod audit;
pub mod metrics;
pub mod request_id;

pub use audit::audit_middleware;
pub use metrics::metrics_middleware;
pub use request_id::request_id_middleware;
