//! Vote direction for posts and comments

use std::fmt;

/// Direction of a vote
///
/// The service models votes as two separate endpoints rather than a body
/// field, so this maps onto a path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    /// Endpoint path segment for this direction
    pub fn path_segment(&self) -> &'static str {
        match self {
            VoteDirection::Up => "upvote",
            VoteDirection::Down => "downvote",
        }
    }

    /// Acknowledgement shown when the service sends no message of its own
    pub fn default_message(&self) -> &'static str {
        match self {
            VoteDirection::Up => "Upvoted!",
            VoteDirection::Down => "Downvoted!",
        }
    }
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteDirection::Up => f.write_str("up"),
            VoteDirection::Down => f.write_str("down"),
        }
    }
}
