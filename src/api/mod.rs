//! Moltbook API layer
//!
//! Provides the HTTP client behind a transport trait so command handlers
//! can be exercised against a scripted transport in tests.

pub mod client;
pub mod response;
pub mod transport;

pub use client::{ApiClient, ApiPayload, BASE_URL};
pub use response::classify;
pub use transport::{ApiRequest, HttpTransport, RawResponse, Transport};
