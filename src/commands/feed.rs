//! Feed command implementation
//!
//! Fetches and renders the post feed.

use std::path::Path;

use crate::api::{ApiClient, Transport};
use crate::cli::args::FeedArgs;
use crate::cli::output::{FeedView, OutputFormat};
use crate::domain::{FeedQuery, FeedResponse};
use crate::error::Result;

use super::{build_client, render};

/// Execute the feed command
pub fn run_feed(args: &FeedArgs, credentials: Option<&Path>, format: OutputFormat) -> Result<()> {
    let client = build_client(credentials)?;
    show_feed(&client, &FeedQuery::from(args), format)
}

fn show_feed<T: Transport>(
    client: &ApiClient<T>,
    query: &FeedQuery,
    format: OutputFormat,
) -> Result<()> {
    let payload = client.feed(query)?;
    render(payload, format, |response: FeedResponse| {
        FeedView::from(response)
    })
}
