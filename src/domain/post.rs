//! Post domain types
//!
//! The post entity plus the feed/detail/create response envelopes and the
//! request-side shapes for listing and creating posts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::comment::Comment;
use crate::domain::user::Author;

/// A post as returned in feed listings and post detail responses
///
/// Counts are unsigned because the service never reports negative votes;
/// everything the service may omit or null out is optional or defaulted so
/// a sparse payload still renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    /// Opaque post identifier
    pub id: String,
    /// Post title
    pub title: String,
    /// Markdown body, passed through untouched
    pub content: String,
    /// Relative permalink (e.g. "/post/abc123"), echoed on creation
    pub url: Option<String>,
    pub upvotes: u32,
    pub downvotes: u32,
    pub comment_count: u32,
    /// Creation time; None renders as "unknown"
    pub created_at: Option<DateTime<Utc>>,
    /// None for anonymous or deleted authors
    pub author: Option<Author>,
    /// Community the post belongs to; None falls back to "general"
    pub submolt: Option<SubmoltRef>,
}

impl Post {
    /// Net vote tally (may be negative)
    pub fn score(&self) -> i64 {
        i64::from(self.upvotes) - i64::from(self.downvotes)
    }

    /// Author username, falling back for anonymous or deleted authors
    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .and_then(|a| a.username.as_deref())
            .unwrap_or("anonymous")
    }

    /// Community name, falling back to the default community
    pub fn submolt_name(&self) -> &str {
        self.submolt
            .as_ref()
            .map(|s| s.name.as_str())
            .unwrap_or("general")
    }

    /// Title with the placeholder used for untitled posts
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }
}

/// Community reference embedded in a post payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmoltRef {
    pub name: String,
}

/// Feed listing response: `{"posts": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedResponse {
    pub posts: Vec<Post>,
}

/// Post detail response: `{"post": {...}, "comments": [...]}`
///
/// Comments arrive as top-level entries with replies nested beneath them,
/// already in the order the service chose; nothing here re-sorts them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostDetailResponse {
    pub post: Option<Post>,
    pub comments: Vec<Comment>,
}

/// Creation acknowledgement: `{"success": true, "message", "post": {...}}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatePostResponse {
    pub message: Option<String>,
    pub post: Option<CreatedPost>,
}

/// The id/permalink pair the service echoes for a new post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatedPost {
    pub id: String,
    pub url: Option<String>,
}

/// Bare acknowledgement envelope used by delete and vote operations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageResponse {
    pub message: Option<String>,
}

/// Request body for creating a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    /// Target community; the CLI defaults this to "general"
    pub submolt: String,
}

impl PostDraft {
    /// JSON body for the create-post endpoint
    pub fn to_body(&self) -> serde_json::Value {
        serde_json::json!({
            "title": self.title,
            "content": self.content,
            "submolt": self.submolt,
        })
    }
}

/// Query parameters for the feed listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedQuery {
    pub sort: SortOrder,
    /// Number of posts to fetch; the CLI enforces a positive value
    pub limit: u32,
    /// Restrict the feed to one community when set
    pub submolt: Option<String>,
}

impl Default for FeedQuery {
    fn default() -> Self {
        Self {
            sort: SortOrder::Hot,
            limit: 20,
            submolt: None,
        }
    }
}

/// Feed sort order accepted by the service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Hot,
    New,
    Top,
}

impl SortOrder {
    /// Wire value for the `sort` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Hot => "hot",
            SortOrder::New => "new",
            SortOrder::Top => "top",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_subtracts_downvotes() {
        let post = Post {
            upvotes: 10,
            downvotes: 2,
            ..Post::default()
        };
        assert_eq!(post.score(), 8);
    }

    #[test]
    fn test_score_may_be_negative() {
        let post = Post {
            upvotes: 1,
            downvotes: 5,
            ..Post::default()
        };
        assert_eq!(post.score(), -4);
    }

    #[test]
    fn test_author_fallback_for_null_author() {
        let post = Post::default();
        assert_eq!(post.author_name(), "anonymous");
        assert_eq!(post.submolt_name(), "general");
    }

    #[test]
    fn test_post_decodes_with_null_author() {
        let post: Post = serde_json::from_value(serde_json::json!({
            "id": "abc123",
            "title": "Test Post",
            "author": null,
            "submolt": null,
            "upvotes": 3
        }))
        .unwrap();

        assert_eq!(post.id, "abc123");
        assert!(post.author.is_none());
        assert_eq!(post.score(), 3);
    }

    #[test]
    fn test_post_decodes_sparse_payload() {
        let post: Post = serde_json::from_value(serde_json::json!({"id": "x"})).unwrap();
        assert_eq!(post.display_title(), "Untitled");
        assert_eq!(post.comment_count, 0);
        assert!(post.created_at.is_none());
    }

    #[test]
    fn test_sort_order_wire_values() {
        assert_eq!(SortOrder::Hot.as_str(), "hot");
        assert_eq!(SortOrder::New.as_str(), "new");
        assert_eq!(SortOrder::Top.as_str(), "top");
    }

    #[test]
    fn test_post_draft_body_carries_all_fields() {
        let draft = PostDraft {
            title: "New Post".to_string(),
            content: "Content here".to_string(),
            submolt: "general".to_string(),
        };

        let body = draft.to_body();
        assert_eq!(body["title"], "New Post");
        assert_eq!(body["content"], "Content here");
        assert_eq!(body["submolt"], "general");
    }
}
