//! Delete command implementation

use std::path::Path;

use crate::api::{ApiClient, Transport};
use crate::cli::output::{ActionView, OutputFormat};
use crate::domain::MessageResponse;
use crate::error::Result;

use super::{build_client, render};

/// Execute the delete command
pub fn run_delete(post_id: &str, credentials: Option<&Path>, format: OutputFormat) -> Result<()> {
    let client = build_client(credentials)?;
    delete_post(&client, post_id, format)
}

fn delete_post<T: Transport>(
    client: &ApiClient<T>,
    post_id: &str,
    format: OutputFormat,
) -> Result<()> {
    let payload = client.delete_post(post_id)?;
    render(payload, format, |response: MessageResponse| {
        ActionView::new(response, "Post deleted")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::Credentials;
    use crate::error::{ApiError, AppError};
    use crate::mock::MockTransport;
    use serde_json::json;

    fn client(mock: &MockTransport) -> ApiClient<&MockTransport> {
        ApiClient::with_transport(
            mock,
            "https://example.test/api/v1",
            Credentials::new("test_api_key"),
        )
    }

    #[test]
    fn test_delete_success() {
        let mock =
            MockTransport::new().with_json(json!({"success": true, "message": "Post deleted"}));

        delete_post(&client(&mock), "abc123", OutputFormat::Text).unwrap();
        assert_eq!(mock.requests()[0].method, reqwest::Method::DELETE);
    }

    #[test]
    fn test_delete_foreign_post_rejected() {
        let mock = MockTransport::new().with_json(json!({
            "success": false,
            "error": "You can only delete your own posts"
        }));

        let err = delete_post(&client(&mock), "abc123", OutputFormat::Text).unwrap_err();
        match err {
            AppError::Api(ApiError::Validation { message, .. }) => {
                assert_eq!(message, "You can only delete your own posts");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
