//! Moltbook API client
//!
//! One method per operation. Each builds a single request, runs it through
//! the transport, and classifies the result; nothing here retries or loops.

use reqwest::Method;
use serde_json::Value;

use crate::api::response::classify;
use crate::api::transport::{ApiRequest, HttpTransport, Transport};
use crate::credentials::Credentials;
use crate::domain::{CommentDraft, FeedQuery, PostDraft, VoteDirection};
use crate::error::ApiError;

/// Base URL of the hosted Moltbook service
pub const BASE_URL: &str = "https://www.moltbook.com/api/v1";

/// Classified success payload, paired with the status it arrived under
///
/// The status stays attached so shape failures found after classification
/// can still report which response they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiPayload {
    pub status: u16,
    pub value: Value,
}

/// Authenticated client for the Moltbook API
///
/// Credentials and base URL are explicit values rather than ambient state,
/// so tests can pair fake tokens with a scripted transport.
pub struct ApiClient<T: Transport> {
    transport: T,
    base_url: String,
    credentials: Credentials,
}

impl ApiClient<HttpTransport> {
    /// Client against the hosted service
    pub fn new(credentials: Credentials) -> std::result::Result<Self, ApiError> {
        Ok(Self::with_transport(
            HttpTransport::new()?,
            BASE_URL,
            credentials,
        ))
    }
}

impl<T: Transport> ApiClient<T> {
    /// Client over an arbitrary transport and base URL
    pub fn with_transport(
        transport: T,
        base_url: impl Into<String>,
        credentials: Credentials,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            credentials,
        }
    }

    /// Fetch the post feed
    pub fn feed(&self, query: &FeedQuery) -> std::result::Result<ApiPayload, ApiError> {
        let mut params = vec![
            ("sort".to_string(), query.sort.as_str().to_string()),
            ("limit".to_string(), query.limit.to_string()),
        ];
        if let Some(submolt) = &query.submolt {
            params.push(("submolt".to_string(), submolt.clone()));
        }
        self.execute(Method::GET, "/posts".to_string(), params, None)
    }

    /// Fetch one post with its comment tree
    pub fn post_detail(&self, post_id: &str) -> std::result::Result<ApiPayload, ApiError> {
        self.execute(Method::GET, format!("/posts/{post_id}"), Vec::new(), None)
    }

    /// Create a post
    pub fn create_post(&self, draft: &PostDraft) -> std::result::Result<ApiPayload, ApiError> {
        self.execute(
            Method::POST,
            "/posts".to_string(),
            Vec::new(),
            Some(draft.to_body()),
        )
    }

    /// Delete a post
    pub fn delete_post(&self, post_id: &str) -> std::result::Result<ApiPayload, ApiError> {
        self.execute(Method::DELETE, format!("/posts/{post_id}"), Vec::new(), None)
    }

    /// Comment on a post, or reply to an existing comment on it
    pub fn create_comment(
        &self,
        post_id: &str,
        draft: &CommentDraft,
    ) -> std::result::Result<ApiPayload, ApiError> {
        self.execute(
            Method::POST,
            format!("/posts/{post_id}/comments"),
            Vec::new(),
            Some(draft.to_body()),
        )
    }

    /// Fetch a user profile
    pub fn user(&self, username: &str) -> std::result::Result<ApiPayload, ApiError> {
        self.execute(Method::GET, format!("/users/{username}"), Vec::new(), None)
    }

    /// List communities
    pub fn submolts(&self) -> std::result::Result<ApiPayload, ApiError> {
        self.execute(Method::GET, "/submolts".to_string(), Vec::new(), None)
    }

    /// Vote on a post
    pub fn vote_post(
        &self,
        post_id: &str,
        direction: VoteDirection,
    ) -> std::result::Result<ApiPayload, ApiError> {
        self.execute(
            Method::POST,
            format!("/posts/{post_id}/{}", direction.path_segment()),
            Vec::new(),
            None,
        )
    }

    /// Vote on a comment
    pub fn vote_comment(
        &self,
        comment_id: &str,
        direction: VoteDirection,
    ) -> std::result::Result<ApiPayload, ApiError> {
        self.execute(
            Method::POST,
            format!("/comments/{comment_id}/{}", direction.path_segment()),
            Vec::new(),
            None,
        )
    }

    fn execute(
        &self,
        method: Method,
        path: String,
        query: Vec<(String, String)>,
        body: Option<Value>,
    ) -> std::result::Result<ApiPayload, ApiError> {
        let request = ApiRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            query,
            body,
            bearer_token: self.credentials.token().to_string(),
        };
        log::debug!("{} {}", request.method, request.url);
        let response = self.transport.execute(request)?;
        let value = classify(response.status, &response.body)?;
        Ok(ApiPayload {
            status: response.status,
            value,
        })
    }
}
