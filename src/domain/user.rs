//! User domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full user profile as returned by the user endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub username: String,
    /// Display name; profiles fall back to the username
    pub name: Option<String>,
    pub bio: Option<String>,
    /// Reputation score, may be negative
    pub karma: i64,
    pub follower_count: u32,
    pub following_count: u32,
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Display name with username fallback
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => {
                if self.username.is_empty() {
                    "Unknown"
                } else {
                    &self.username
                }
            }
        }
    }
}

/// Compact user summary embedded in posts and comments
///
/// Post payloads address the author by `username`, comment payloads by
/// `name`; both are optional here so either shape decodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub id: String,
    pub username: Option<String>,
    pub name: Option<String>,
    pub karma: i64,
}

/// User profile envelope: `{"user": {...}}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserResponse {
    pub user: Option<User>,
}
