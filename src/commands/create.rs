//! Create command implementation
//!
//! Creates a new post after validating the required fields locally.

use std::path::Path;

use crate::api::{ApiClient, Transport};
use crate::cli::args::CreateArgs;
use crate::cli::output::{OutputFormat, PostCreatedView};
use crate::domain::{CreatePostResponse, PostDraft};
use crate::error::Result;

use super::{build_client, render, require_non_blank};

/// Execute the create command
pub fn run_create(
    args: &CreateArgs,
    credentials: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let client = build_client(credentials)?;
    create_post(&client, args, format)
}

fn create_post<T: Transport>(
    client: &ApiClient<T>,
    args: &CreateArgs,
    format: OutputFormat,
) -> Result<()> {
    require_non_blank("title", &args.title)?;
    require_non_blank("content", &args.content)?;

    let draft = PostDraft {
        title: args.title.clone(),
        content: args.content.clone(),
        submolt: args.submolt.clone(),
    };
    let payload = client.create_post(&draft)?;
    render(payload, format, |response: CreatePostResponse| {
        PostCreatedView::from(response)
    })
}
