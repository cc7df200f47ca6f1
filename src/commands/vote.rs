//! Vote command implementations
//!
//! Upvotes and downvotes for posts and comments share one shape: POST to
//! the entity's vote endpoint, then echo the server's acknowledgement.

use std::path::Path;

use crate::api::{ApiClient, Transport};
use crate::cli::output::{ActionView, OutputFormat};
use crate::domain::{MessageResponse, VoteDirection};
use crate::error::Result;

use super::{build_client, render};

/// Execute an upvote/downvote on a post
pub fn run_vote_post(
    post_id: &str,
    direction: VoteDirection,
    credentials: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let client = build_client(credentials)?;
    vote_post(&client, post_id, direction, format)
}

/// Execute an upvote/downvote on a comment
pub fn run_vote_comment(
    comment_id: &str,
    direction: VoteDirection,
    credentials: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let client = build_client(credentials)?;
    vote_comment(&client, comment_id, direction, format)
}

fn vote_post<T: Transport>(
    client: &ApiClient<T>,
    post_id: &str,
    direction: VoteDirection,
    format: OutputFormat,
) -> Result<()> {
    let payload = client.vote_post(post_id, direction)?;
    render(payload, format, move |response: MessageResponse| {
        ActionView::new(response, direction.default_message())
    })
}

fn vote_comment<T: Transport>(
    client: &ApiClient<T>,
    comment_id: &str,
    direction: VoteDirection,
    format: OutputFormat,
) -> Result<()> {
    let payload = client.vote_comment(comment_id, direction)?;
    render(payload, format, move |response: MessageResponse| {
        ActionView::new(response, direction.default_message())
    })
}
