//! Comment domain types
//!
//! Comments form a tree through parent pointers. A post detail response
//! flattens that tree into top-level comments with their replies nested
//! under a `replies` array, so the type is recursive.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::user::Author;

/// A single comment, possibly carrying its nested replies
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    /// Opaque comment identifier
    pub id: String,
    /// Markdown body, passed through untouched
    pub content: String,
    /// None marks a top-level comment
    pub parent_id: Option<String>,
    pub upvotes: u32,
    pub downvotes: u32,
    pub created_at: Option<DateTime<Utc>>,
    /// None for anonymous or deleted authors
    pub author: Option<Author>,
    /// Nested replies, present only in post detail responses
    pub replies: Vec<Comment>,
}

impl Comment {
    /// Net vote tally (may be negative)
    pub fn score(&self) -> i64 {
        i64::from(self.upvotes) - i64::from(self.downvotes)
    }

    /// Author display name, falling back for anonymous or deleted authors
    ///
    /// Comment payloads key the author by display name rather than by
    /// username.
    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .and_then(|a| a.name.as_deref())
            .unwrap_or("anonymous")
    }
}

/// Comment creation acknowledgement:
/// `{"success": true, "message", "comment": {"id"}}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentCreatedResponse {
    pub message: Option<String>,
    pub comment: Option<CreatedComment>,
}

/// The id the service echoes for a new comment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatedComment {
    pub id: String,
}

/// Request body for creating a comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    pub content: String,
    pub parent_id: Option<String>,
}

impl CommentDraft {
    /// JSON body for the comment endpoint
    ///
    /// `parent_id` is omitted entirely for top-level comments: the service
    /// distinguishes a reply by the key being present, not by a null value.
    pub fn to_body(&self) -> serde_json::Value {
        let mut body = serde_json::json!({ "content": self.content });
        if let Some(parent_id) = &self.parent_id {
            body["parent_id"] = serde_json::json!(parent_id);
        }
        body
    }
}
