//! HTTP transport abstraction
//!
//! Provides the trait seam between the API client and the wire so tests can
//! record requests and replay canned responses without a network.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Method;
use serde_json::Value;

use crate::error::ApiError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("moltbook/", env!("CARGO_PKG_VERSION"));

/// A fully specified API request, ready to be executed
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute URL including the API base path
    pub url: String,
    /// Query parameters, appended in order
    pub query: Vec<(String, String)>,
    /// JSON body for mutating operations
    pub body: Option<Value>,
    /// Token placed in the Authorization header as a bearer credential
    pub bearer_token: String,
}

/// Raw response before classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Trait for executing a single HTTP exchange
///
/// The production implementation is [`HttpTransport`]; tests substitute
/// `MockTransport`.
pub trait Transport {
    /// Perform the exchange and hand back the raw status and body
    fn execute(&self, request: ApiRequest) -> std::result::Result<RawResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: ApiRequest) -> std::result::Result<RawResponse, ApiError> {
        (**self).execute(request)
    }
}

/// Blocking reqwest-backed transport
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build the underlying HTTP client
    ///
    /// The request timeout bounds the only wait in the program.
    pub fn new() -> std::result::Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: ApiRequest) -> std::result::Result<RawResponse, ApiError> {
        let mut builder = self
            .client
            .request(request.method, &request.url)
            .bearer_auth(&request.bearer_token);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        log::debug!("response status {status} ({} bytes)", body.len());

        Ok(RawResponse { status, body })
    }
}
