//! User command implementation
//!
//! Shows a user profile.

use std::path::Path;

use crate::api::{ApiClient, Transport};
use crate::cli::output::{print_json, print_output, Notice, OutputFormat, UserView};
use crate::domain::UserResponse;
use crate::error::Result;

use super::{build_client, decode};

/// Execute the user command
pub fn run_user(username: &str, credentials: Option<&Path>, format: OutputFormat) -> Result<()> {
    let client = build_client(credentials)?;
    show_user(&client, username, format)
}

fn show_user<T: Transport>(
    client: &ApiClient<T>,
    username: &str,
    format: OutputFormat,
) -> Result<()> {
    let payload = client.user(username)?;
    match format {
        OutputFormat::Json => print_json(&payload.value)?,
        OutputFormat::Text => {
            let response: UserResponse = decode(&payload)?;
            match response.user {
                Some(user) => print_output(&UserView::from(user))?,
                None => print_output(&Notice("User not found"))?,
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::Credentials;
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
    fn test_show_user_hits_profile_endpoint() {
        let mock = MockTransport::new().with_json(json!({
            "user": {"id": "u1", "username": "alice", "karma": 1500}
        }));

        show_user(&client(&mock), "alice", OutputFormat::Text).unwrap();
        assert_eq!(
            mock.requests()[0].url,
            "https://example.test/api/v1/users/alice"
        );
    }

    #[test]
    fn test_show_user_null_user_renders_notice() {
        let mock = MockTransport::new().with_json(json!({"user": null}));

        show_user(&client(&mock), "ghost", OutputFormat::Text).unwrap();
    }
}
