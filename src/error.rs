//! Unified error types for moltbook
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Classified failure from the Moltbook API
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Failure to load the API credentials
    #[error(transparent)]
    Credentials(#[from] CredentialError),

    /// Local input validation failure, caught before any request
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// IO error (writing output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Classified outcome of a failed API exchange
///
/// The service signals failures inconsistently: sometimes through the HTTP
/// status code, sometimes through a `success: false` envelope inside a 2xx
/// response. All interpretation happens in [`crate::api::classify`]; these
/// variants are the taxonomy it produces.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The service refused a mutating operation until the window expires
    #[error("{message}")]
    RateLimited {
        message: String,
        hint: Option<String>,
        retry_after_minutes: u64,
    },

    /// 401/403, or a token the service rejected
    #[error("{detail}")]
    Auth { detail: String },

    /// 404, or a body saying the resource does not exist
    #[error("Not found")]
    NotFound { hint: Option<String> },

    /// The service rejected the request and said why
    #[error("{message}")]
    Validation {
        message: String,
        hint: Option<String>,
    },

    /// The request never produced a response
    #[error("{}", network_detail(.0))]
    Network(#[from] reqwest::Error),

    /// Anything the other variants do not cover; the body is kept verbatim
    #[error("Invalid response from server (status {status})")]
    Unknown { status: u16, body: String },
}

fn network_detail(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "Request timed out".to_string()
    } else if err.is_connect() {
        "Could not connect to moltbook.com".to_string()
    } else {
        format!("Network error: {err}")
    }
}

/// Errors from loading the credential file
///
/// These are all authentication failures in the user's eyes: without a token
/// no request is worth sending, so they surface before any network work.
#[derive(Error, Debug)]
pub enum CredentialError {
    /// None of the candidate credential files exist
    #[error("Credentials file not found")]
    NotFound { searched: Vec<PathBuf> },

    /// The credential file exists but could not be read
    #[error("Could not read credentials file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The credential file exists but holds no token
    #[error("Credentials file {} is empty", path.display())]
    Empty { path: PathBuf },
}

/// Errors from local input validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required text field was empty or whitespace-only
    #[error("Missing required field: {field} must not be empty")]
    BlankField { field: &'static str },
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
