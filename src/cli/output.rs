//! Output formatting utilities
//!
//! Renders classified payloads either as raw JSON or as the text views a
//! terminal user reads. JSON mode is a passthrough: the payload is printed
//! exactly as the service returned it, field order included.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::domain::{
    Comment, CommentCreatedResponse, CreatePostResponse, FeedResponse, MessageResponse, Post,
    Submolt, SubmoltsResponse, User,
};
use crate::error::{ApiError, AppError};

/// Output mode selected by the global `--json` flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Raw JSON passthrough
    Json,
}

/// Trait for types that render as terminal text
pub trait TextDisplay {
    /// Format as a text block
    fn to_text(&self) -> String;
}

/// Print a text view to stdout
pub fn print_output<T: TextDisplay>(view: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", view.to_text())
}

/// Pretty-print a payload exactly as the service returned it
pub fn print_json(payload: &Value) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let json = serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());
    writeln!(handle, "{}", json)
}

/// Relative age of a timestamp, or "unknown" when missing
pub fn relative_time(timestamp: Option<&DateTime<Utc>>) -> String {
    let Some(timestamp) = timestamp else {
        return "unknown".to_string();
    };
    let elapsed = Utc::now().signed_duration_since(*timestamp);

    if elapsed.num_days() > 0 {
        format!("{}d ago", elapsed.num_days())
    } else if elapsed.num_hours() > 0 {
        format!("{}h ago", elapsed.num_hours())
    } else if elapsed.num_minutes() > 0 {
        format!("{}m ago", elapsed.num_minutes())
    } else {
        "just now".to_string()
    }
}

/// Feed listing view
#[derive(Debug, Clone)]
pub struct FeedView {
    pub posts: Vec<Post>,
}

impl From<FeedResponse> for FeedView {
    fn from(response: FeedResponse) -> Self {
        Self {
            posts: response.posts,
        }
    }
}

impl TextDisplay for FeedView {
    fn to_text(&self) -> String {
        if self.posts.is_empty() {
            return "No posts found".to_string();
        }

        let mut lines = Vec::new();
        for post in &self.posts {
            lines.push(String::new());
            lines.push(post.display_title().to_string());
            lines.push(format!(
                "  {:+} points | {} comments | {}",
                post.score(),
                post.comment_count,
                relative_time(post.created_at.as_ref())
            ));
            lines.push(format!(
                "  by {} in {}",
                post.author_name(),
                post.submolt_name()
            ));
            lines.push(format!("  id: {}", post.id));
        }
        lines.join("\n")
    }
}

/// Single post with its comment tree
#[derive(Debug, Clone)]
pub struct PostView {
    pub post: Post,
    pub comments: Vec<Comment>,
}

impl TextDisplay for PostView {
    fn to_text(&self) -> String {
        let rule = "-".repeat(40);
        let mut lines = vec![
            String::new(),
            self.post.display_title().to_string(),
            format!(
                "by {} | {:+} points | {}",
                self.post.author_name(),
                self.post.score(),
                relative_time(self.post.created_at.as_ref())
            ),
            rule.clone(),
            self.post.content.clone(),
            rule,
        ];

        if self.comments.is_empty() {
            lines.push(String::new());
            lines.push("No comments yet".to_string());
        } else {
            lines.push(String::new());
            lines.push(format!("Comments ({}):", self.comments.len()));
            push_comments(&mut lines, &self.comments, 0);
        }
        lines.join("\n")
    }
}

/// The comment tree renders in the order the service sent it, two spaces
/// deeper per reply level.
fn push_comments(lines: &mut Vec<String>, comments: &[Comment], indent: usize) {
    let prefix = "  ".repeat(indent);
    for comment in comments {
        lines.push(format!(
            "{prefix}{} ({:+}) {}",
            comment.author_name(),
            comment.score(),
            relative_time(comment.created_at.as_ref())
        ));
        lines.push(format!("{prefix}  {}", comment.content));
        if !comment.replies.is_empty() {
            push_comments(lines, &comment.replies, indent + 1);
        }
    }
}

/// Acknowledgement for a newly created post
#[derive(Debug, Clone)]
pub struct PostCreatedView {
    pub message: String,
    /// Absolute permalink, present when the service echoed one
    pub url: Option<String>,
    pub id: String,
}

impl From<CreatePostResponse> for PostCreatedView {
    fn from(response: CreatePostResponse) -> Self {
        let message = response
            .message
            .unwrap_or_else(|| "Post created!".to_string());
        let created = response.post.unwrap_or_default();
        let url = created
            .url
            .filter(|url| !url.is_empty())
            .map(|url| format!("https://moltbook.com{url}"));
        Self {
            message,
            url,
            id: created.id,
        }
    }
}

impl TextDisplay for PostCreatedView {
    fn to_text(&self) -> String {
        let mut lines = vec![self.message.clone()];
        if let Some(url) = &self.url {
            lines.push(format!("URL: {url}"));
        }
        lines.push(format!("ID: {}", self.id));
        lines.join("\n")
    }
}

/// Acknowledgement for a newly created comment
#[derive(Debug, Clone)]
pub struct CommentCreatedView {
    pub message: String,
    pub id: String,
}

impl From<CommentCreatedResponse> for CommentCreatedView {
    fn from(response: CommentCreatedResponse) -> Self {
        Self {
            message: response
                .message
                .unwrap_or_else(|| "Comment added!".to_string()),
            id: response.comment.unwrap_or_default().id,
        }
    }
}

impl TextDisplay for CommentCreatedView {
    fn to_text(&self) -> String {
        format!("{}\nComment ID: {}", self.message, self.id)
    }
}

/// One-line acknowledgement used by delete and the vote commands
#[derive(Debug, Clone)]
pub struct ActionView {
    pub message: String,
}

impl ActionView {
    /// Prefer the server's message, falling back to the operation's default
    pub fn new(response: MessageResponse, fallback: &str) -> Self {
        Self {
            message: response.message.unwrap_or_else(|| fallback.to_string()),
        }
    }
}

impl TextDisplay for ActionView {
    fn to_text(&self) -> String {
        self.message.clone()
    }
}

/// Plain one-line notice, e.g. "Post not found"
#[derive(Debug, Clone)]
pub struct Notice(pub &'static str);

impl TextDisplay for Notice {
    fn to_text(&self) -> String {
        self.0.to_string()
    }
}

/// User profile view
#[derive(Debug, Clone)]
pub struct UserView {
    pub user: User,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self { user }
    }
}

impl TextDisplay for UserView {
    fn to_text(&self) -> String {
        let user = &self.user;
        let mut lines = vec![
            String::new(),
            user.display_name().to_string(),
            format!("@{}", user.username),
        ];
        if let Some(bio) = user.bio.as_deref().filter(|bio| !bio.is_empty()) {
            lines.push(String::new());
            lines.push(bio.to_string());
        }
        lines.push(String::new());
        lines.push(format!("Karma: {}", user.karma));
        lines.push(format!("Followers: {}", user.follower_count));
        lines.push(format!("Following: {}", user.following_count));
        lines.push(format!(
            "Joined: {}",
            relative_time(user.created_at.as_ref())
        ));
        lines.join("\n")
    }
}

/// Submolt listing view
#[derive(Debug, Clone)]
pub struct SubmoltListView {
    pub submolts: Vec<Submolt>,
}

impl From<SubmoltsResponse> for SubmoltListView {
    fn from(response: SubmoltsResponse) -> Self {
        Self {
            submolts: response.submolts,
        }
    }
}

impl TextDisplay for SubmoltListView {
    fn to_text(&self) -> String {
        if self.submolts.is_empty() {
            return "No submolts found".to_string();
        }

        let mut lines = Vec::new();
        for submolt in &self.submolts {
            lines.push(String::new());
            lines.push(format!(
                "{} ({}) - {} members",
                submolt.display_name(),
                submolt.name,
                submolt.member_count
            ));
            if let Some(description) = submolt
                .description
                .as_deref()
                .filter(|description| !description.is_empty())
            {
                lines.push(format!("  {description}"));
            }
        }
        lines.join("\n")
    }
}

/// Structured form of a failure for JSON-mode consumers
///
/// Service-signalled failures reconstruct the envelope the service uses;
/// local failures (credentials, transport) carry a bare error message.
pub fn error_payload(err: &AppError) -> Value {
    match err {
        AppError::Api(api) => api_error_payload(api),
        other => serde_json::json!({"error": other.to_string()}),
    }
}

fn api_error_payload(err: &ApiError) -> Value {
    match err {
        ApiError::RateLimited {
            message,
            hint,
            retry_after_minutes,
        } => {
            let mut payload = serde_json::json!({"success": false, "error": message});
            if let Some(hint) = hint {
                payload["hint"] = Value::String(hint.clone());
            }
            payload["retry_after_minutes"] = Value::from(*retry_after_minutes);
            payload
        }
        ApiError::Validation { message, hint } => {
            let mut payload = serde_json::json!({"success": false, "error": message});
            if let Some(hint) = hint {
                payload["hint"] = Value::String(hint.clone());
            }
            payload
        }
        ApiError::Unknown { status, body } => serde_json::from_str(body).unwrap_or_else(|_| {
            serde_json::json!({"status": status, "error": err.to_string()})
        }),
        ApiError::NotFound { hint } => {
            let mut payload = serde_json::json!({"success": false, "error": err.to_string()});
            if let Some(hint) = hint {
                payload["hint"] = Value::String(hint.clone());
            }
            payload
        }
        ApiError::Auth { .. } => {
            serde_json::json!({"success": false, "error": err.to_string()})
        }
        ApiError::Network(_) => serde_json::json!({"error": err.to_string()}),
    }
}
