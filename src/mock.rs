//! Mock implementations for testing
//!
//! Provides a scripted transport for unit testing without a network. The
//! mock records every request so tests can assert on exactly what would
//! have gone over the wire.

use std::sync::Mutex;

use serde_json::Value;

use crate::api::{ApiRequest, RawResponse, Transport};
use crate::error::ApiError;

/// Mock transport replaying queued responses in order
///
/// When the queue runs dry it answers `200 {}`, which classifies as an
/// empty success payload.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<Vec<RawResponse>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and raw body
    pub fn with_response(self, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(RawResponse::new(status, body));
        self
    }

    /// Queue a 200 response with the given JSON payload
    pub fn with_json(self, payload: Value) -> Self {
        let body = payload.to_string();
        self.with_response(200, &body)
    }

    /// Every request executed so far, in order
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Transport for MockTransport {
    fn execute(&self, request: ApiRequest) -> std::result::Result<RawResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Ok(RawResponse::new(200, "{}"));
        }
        Ok(responses.remove(0))
    }
}
