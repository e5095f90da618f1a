//! Shared HTTP plumbing for all OpenMRS calls

use std::time::Duration;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use pmtct_core::{PmtctError, ReportDefinitions};
use reqwest::{Method, RequestBuilder, StatusCode, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use thiserror::Error;

/// Prefix of the OpenMRS REST web services
pub const REST_BASE: &str = "/ws/rest/v1";

/// Everything except RFC 3986 unreserved characters
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Errors from talking to OpenMRS
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("OpenMRS returned {status} for {path}")]
    Status {
        status: StatusCode,
        path: String,
        body: String,
    },

    #[error("Unexpected response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid path segment: {0:?}")]
    InvalidSegment(String),

    #[error(transparent)]
    Report(#[from] PmtctError),
}

impl ClientError {
    /// HTTP status returned by OpenMRS, if the request got that far
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status(),
            _ => None,
        }
    }
}

/// Static credentials forwarded as HTTP basic auth
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Client for an OpenMRS instance
#[derive(Clone, Debug)]
pub struct OpenmrsClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Option<Credentials>,
    pub(super) reports: ReportDefinitions,
}

impl OpenmrsClient {
    /// Create a client for the OpenMRS webapp at `base_url`
    /// (e.g. `http://localhost:8080/openmrs`)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    /// Create a client whose requests give up after `timeout`
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_http(http, base_url))
    }

    fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials: None,
            reports: ReportDefinitions::default(),
        }
    }

    pub fn credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn reports(mut self, reports: ReportDefinitions) -> Self {
        self.reports = reports;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .header(header::ACCEPT, "application/json");

        match &self.credentials {
            Some(c) => builder.basic_auth(&c.username, Some(&c.password)),
            None => builder,
        }
    }

    /// Send a request and return the raw body of a 2xx response
    async fn send(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<Vec<u8>, ClientError> {
        tracing::debug!(method = %method, path = %path, "OpenMRS request");

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                metrics::counter!(
                    "openmrs_requests_total",
                    "method" => method.to_string(),
                    "status" => "error"
                )
                .increment(1);
                return Err(ClientError::Transport(e));
            }
        };

        let status = response.status();
        metrics::counter!(
            "openmrs_requests_total",
            "method" => method.to_string(),
            "status" => status.as_u16().to_string()
        )
        .increment(1);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                status = %status,
                path = %path,
                body = %body,
                "OpenMRS request rejected"
            );
            return Err(ClientError::Status {
                status,
                path: path.to_string(),
                body,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// GET `path` and decode the body, or `None` if the body is empty or `null`
    pub(super) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Option<T>, ClientError> {
        let builder = self.request(Method::GET, path).query(query);
        let bytes = self.send(Method::GET, path, builder).await?;
        decode_optional(path, &bytes)
    }

    /// POST `body` as JSON to `path` and decode the response
    pub(super) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let builder = self.request(Method::POST, path).json(body);
        let bytes = self.send(Method::POST, path, builder).await?;
        serde_json::from_slice(&bytes).map_err(|source| ClientError::Decode {
            path: path.to_string(),
            source,
        })
    }

    /// Check that OpenMRS answers on its session endpoint
    pub async fn check_session(&self) -> Result<(), ClientError> {
        let path = format!("{REST_BASE}/session");
        let builder = self.request(Method::GET, &path);
        self.send(Method::GET, &path, builder).await.map(|_| ())
    }
}

/// Encode `value` as a single URL path segment.
///
/// Empty values and the dot segments `.` and `..` are rejected, since a URL
/// parser would resolve them against the surrounding path.
pub(super) fn segment(value: &str) -> Result<String, ClientError> {
    if value.is_empty() || value == "." || value == ".." {
        return Err(ClientError::InvalidSegment(value.to_string()));
    }
    Ok(utf8_percent_encode(value, PATH_SEGMENT).to_string())
}

fn decode_optional<T: DeserializeOwned>(
    path: &str,
    bytes: &[u8],
) -> Result<Option<T>, ClientError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let decode_err = |source| ClientError::Decode {
        path: path.to_string(),
        source,
    };

    let value: JsonValue = serde_json::from_slice(bytes).map_err(decode_err)?;
    if value.is_null() {
        return Ok(None);
    }
    serde_json::from_value(value).map(Some).map_err(decode_err)
}
