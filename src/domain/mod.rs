//! Domain models for moltbook
//!
//! Request and response shapes for the Moltbook API. Everything here is a
//! transient DTO: decoded from one response or encoded into one request,
//! never persisted. Nullable wire fields are `Option`s so the
//! author-may-be-null and parent-may-be-null cases are handled at compile
//! time instead of at render time.

pub mod comment;
pub mod post;
pub mod submolt;
pub mod user;
pub mod vote;

pub use comment::{Comment, CommentCreatedResponse, CommentDraft, CreatedComment};
pub use post::{
    CreatePostResponse, CreatedPost, FeedQuery, FeedResponse, MessageResponse, Post,
    PostDetailResponse, PostDraft, SortOrder, SubmoltRef,
};
pub use submolt::{Submolt, SubmoltsResponse};
pub use user::{Author, User, UserResponse};
pub use vote::VoteDirection;
