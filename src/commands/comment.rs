//! Comment command implementation
//!
//! Adds a comment to a post, optionally as a reply to an existing comment.

use std::path::Path;

use crate::api::{ApiClient, Transport};
use crate::cli::args::CommentArgs;
use crate::cli::output::{CommentCreatedView, OutputFormat};
use crate::domain::{CommentCreatedResponse, CommentDraft};
use crate::error::Result;

use super::{build_client, render, require_non_blank};

/// Execute the comment command
pub fn run_comment(
    args: &CommentArgs,
    credentials: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let client = build_client(credentials)?;
    add_comment(&client, args, format)
}

fn add_comment<T: Transport>(
    client: &ApiClient<T>,
    args: &CommentArgs,
    format: OutputFormat,
) -> Result<()> {
    require_non_blank("content", &args.content)?;

    let draft = CommentDraft {
        content: args.content.clone(),
        parent_id: args.reply_to.clone(),
    };
    let payload = client.create_comment(&args.post_id, &draft)?;
    render(payload, format, |response: CommentCreatedResponse| {
        CommentCreatedView::from(response)
    })
}
