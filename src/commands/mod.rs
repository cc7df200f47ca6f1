//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command:
//! load credentials, build the client, perform the single call, render.

pub mod comment;
pub mod create;
pub mod delete;
pub mod feed;
pub mod post;
pub mod submolts;
pub mod user;
pub mod vote;

pub use comment::run_comment;
pub use create::run_create;
pub use delete::run_delete;
pub use feed::run_feed;
pub use post::run_post;
pub use submolts::run_submolts;
pub use user::run_user;
pub use vote::{run_vote_comment, run_vote_post};

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::api::{ApiClient, ApiPayload, HttpTransport};
use crate::cli::output::{print_json, print_output, OutputFormat, TextDisplay};
use crate::credentials::Credentials;
use crate::error::{ApiError, AppError, DomainError, Result};

/// Load credentials and build the production client
fn build_client(credentials_path: Option<&Path>) -> Result<ApiClient<HttpTransport>> {
    let credentials = Credentials::load(credentials_path)?;
    Ok(ApiClient::new(credentials)?)
}

/// Reject empty or whitespace-only required text before any request
fn require_non_blank(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DomainError::BlankField { field }.into());
    }
    Ok(())
}

/// Decode a classified payload into its typed envelope
///
/// A success body that does not match the expected shape maps to the same
/// error as a non-JSON body, keeping the payload and the status it arrived
/// under.
fn decode<T: DeserializeOwned>(payload: &ApiPayload) -> Result<T> {
    serde_json::from_value(payload.value.clone()).map_err(|_| {
        AppError::Api(ApiError::Unknown {
            status: payload.status,
            body: payload.value.to_string(),
        })
    })
}

/// Render a payload: raw passthrough in JSON mode, typed view in text mode
fn render<T, V>(payload: ApiPayload, format: OutputFormat, view: impl FnOnce(T) -> V) -> Result<()>
where
    T: DeserializeOwned,
    V: TextDisplay,
{
    match format {
        OutputFormat::Json => print_json(&payload.value)?,
        OutputFormat::Text => print_output(&view(decode(&payload)?))?,
    }
    Ok(())
}
