//! Post command implementation
//!
//! Shows a single post with its comment thread.

use std::path::Path;

use crate::api::{ApiClient, Transport};
use crate::cli::output::{print_json, print_output, Notice, OutputFormat, PostView};
use crate::domain::PostDetailResponse;
use crate::error::Result;

use super::{build_client, decode};

/// Execute the post command
pub fn run_post(post_id: &str, credentials: Option<&Path>, format: OutputFormat) -> Result<()> {
    let client = build_client(credentials)?;
    show_post(&client, post_id, format)
}

fn show_post<T: Transport>(
    client: &ApiClient<T>,
    post_id: &str,
    format: OutputFormat,
) -> Result<()> {
    let payload = client.post_detail(post_id)?;
    match format {
        OutputFormat::Json => print_json(&payload.value)?,
        OutputFormat::Text => {
            let response: PostDetailResponse = decode(&payload)?;
            match response.post {
                Some(post) => print_output(&PostView {
                    post,
                    comments: response.comments,
                })?,
                // A well-formed envelope without a post is a miss the
                // service chose not to 404.
                None => print_output(&Notice("Post not found"))?,
            }
        }
    }
    Ok(())
}
