//! Submolts command implementation
//!
//! Lists the communities on the site.

use std::path::Path;

use crate::api::{ApiClient, Transport};
use crate::cli::output::{OutputFormat, SubmoltListView};
use crate::domain::SubmoltsResponse;
use crate::error::Result;

use super::{build_client, render};

/// Execute the submolts command
pub fn run_submolts(credentials: Option<&Path>, format: OutputFormat) -> Result<()> {
    let client = build_client(credentials)?;
    list_submolts(&client, format)
}

fn list_submolts<T: Transport>(client: &ApiClient<T>, format: OutputFormat) -> Result<()> {
    let payload = client.submolts()?;
    render(payload, format, |response: SubmoltsResponse| {
        SubmoltListView::from(response)
    })
}
