//! Submolt domain types
//!
//! A submolt is a named community posts are grouped under.

use serde::{Deserialize, Serialize};

/// A community as returned by the submolt listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Submolt {
    /// Community identifier, used in URLs and the feed filter
    pub name: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub member_count: u32,
}

impl Submolt {
    /// Human-facing name with identifier fallback
    pub fn display_name(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.name,
        }
    }
}

/// Submolt listing envelope: `{"submolts": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmoltsResponse {
    pub submolts: Vec<Submolt>,
}
