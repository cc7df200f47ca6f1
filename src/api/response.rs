//! Response classification
//!
//! The service reports failures in two styles: honest HTTP status codes for
//! auth and missing resources, and `success: false` envelopes inside 200
//! responses for rate limits and ownership rejections. Every response is
//! interpreted here, in one place, so call sites never inspect a status
//! code themselves.

use serde_json::Value;

use crate::error::ApiError;

/// Interpret a raw response into a payload or a classified error
pub fn classify(status: u16, body: &str) -> std::result::Result<Value, ApiError> {
    let payload: Option<Value> = serde_json::from_str(body).ok();

    // Rate limiting is flagged by a body field rather than a 429: the
    // service usually wraps it in an ordinary 200 envelope.
    if let Some(value) = payload.as_ref() {
        if let Some(minutes) = rate_limit_minutes(value) {
            return Err(ApiError::RateLimited {
                message: error_message(value),
                hint: hint(value),
                retry_after_minutes: minutes,
            });
        }
    }

    match status {
        401 => {
            return Err(ApiError::Auth {
                detail: "Authentication failed - check your API key".to_string(),
            });
        }
        403 => {
            return Err(ApiError::Auth {
                detail: "Permission denied".to_string(),
            });
        }
        404 => return Err(ApiError::NotFound { hint: None }),
        _ => {}
    }

    let Some(value) = payload else {
        return Err(ApiError::Unknown {
            status,
            body: body.to_string(),
        });
    };

    if value.get("success").and_then(Value::as_bool) == Some(false) {
        let message = error_message(&value);
        if message.to_lowercase().contains("not found") {
            return Err(ApiError::NotFound {
                hint: hint(&value),
            });
        }
        return Err(ApiError::Validation {
            message,
            hint: hint(&value),
        });
    }

    if (200..300).contains(&status) {
        return Ok(value);
    }

    if (400..500).contains(&status) {
        if let Some(message) = value.get("error").and_then(Value::as_str) {
            return Err(ApiError::Validation {
                message: message.to_string(),
                hint: hint(&value),
            });
        }
    }

    Err(ApiError::Unknown {
        status,
        body: body.to_string(),
    })
}

/// Minutes to wait, when the body carries the rate-limit marker
fn rate_limit_minutes(value: &Value) -> Option<u64> {
    if value.get("success").and_then(Value::as_bool) == Some(true) {
        return None;
    }
    value.get("retry_after_minutes").and_then(Value::as_u64)
}

/// Server-supplied error message, with the fallback the service implies
fn error_message(value: &Value) -> String {
    value
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or("Unknown error")
        .to_string()
}

/// Server-supplied hint; empty strings count as absent
fn hint(value: &Value) -> Option<String> {
    value
        .get("hint")
        .and_then(Value::as_str)
        .filter(|h| !h.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn classify_json(status: u16, body: Value) -> std::result::Result<Value, ApiError> {
        classify(status, &body.to_string())
    }

    #[test]
    fn test_plain_2xx_payload_passes_through() {
        let payload = classify_json(200, json!({"posts": [{"id": "post1"}]})).unwrap();
        assert_eq!(payload["posts"][0]["id"], "post1");
    }

    #[test]
    fn test_success_envelope_passes_through() {
        let payload =
            classify_json(200, json!({"success": true, "message": "Post deleted"})).unwrap();
        assert_eq!(payload["message"], "Post deleted");
    }

    #[test]
    fn test_rate_limit_field_wins_over_200() {
        let err = classify_json(
            200,
            json!({
                "success": false,
                "error": "You're posting too fast",
                "hint": "Please wait before creating another post",
                "retry_after_minutes": 27
            }),
        )
        .unwrap_err();

        match err {
            ApiError::RateLimited {
                message,
                hint,
                retry_after_minutes,
            } => {
                assert_eq!(message, "You're posting too fast");
                assert_eq!(hint.as_deref(), Some("Please wait before creating another post"));
                assert_eq!(retry_after_minutes, 27);
            }
            other => panic!("expected rate limit, got {other:?}"),
        }
    }

    #[test]
    fn test_rate_limit_field_wins_over_429() {
        let err = classify_json(
            429,
            json!({"error": "Rate limited", "retry_after_minutes": 5}),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ApiError::RateLimited {
                retry_after_minutes: 5,
                ..
            }
        ));
    }

    #[test]
    fn test_retry_field_ignored_when_success_true() {
        let payload =
            classify_json(200, json!({"success": true, "retry_after_minutes": 5})).unwrap();
        assert_eq!(payload["success"], true);
    }

    #[test]
    fn test_401_maps_to_auth() {
        let err = classify(401, "Unauthorized").unwrap_err();
        match err {
            ApiError::Auth { detail } => assert!(detail.contains("API key")),
            other => panic!("expected auth error, got {other:?}"),
        }
    }

    #[test]
    fn test_403_maps_to_permission_denied() {
        let err = classify_json(403, json!({"error": "no"})).unwrap_err();
        match err {
            ApiError::Auth { detail } => assert_eq!(detail, "Permission denied"),
            other => panic!("expected auth error, got {other:?}"),
        }
    }

    #[test]
    fn test_404_maps_to_not_found() {
        let err = classify(404, "").unwrap_err();
        assert!(matches!(err, ApiError::NotFound { hint: None }));
    }

    #[test]
    fn test_not_found_message_in_200_envelope() {
        let err = classify_json(200, json!({"success": false, "error": "Post not found"}))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound { hint: None }));
    }

    #[test]
    fn test_not_found_envelope_keeps_hint() {
        let err = classify_json(
            200,
            json!({
                "success": false,
                "error": "Post not found",
                "hint": "Check the post id"
            }),
        )
        .unwrap_err();

        match err {
            ApiError::NotFound { hint } => {
                assert_eq!(hint.as_deref(), Some("Check the post id"));
            }
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[test]
    fn test_success_false_maps_to_validation() {
        let err = classify_json(
            200,
            json!({"success": false, "error": "You can only delete your own posts"}),
        )
        .unwrap_err();

        match err {
            ApiError::Validation { message, hint } => {
                assert_eq!(message, "You can only delete your own posts");
                assert!(hint.is_none());
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_success_false_without_message_uses_fallback() {
        let err = classify_json(200, json!({"success": false})).unwrap_err();
        match err {
            ApiError::Validation { message, .. } => assert_eq!(message, "Unknown error"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_hint_counts_as_absent() {
        let err = classify_json(
            200,
            json!({"success": false, "error": "Already voted", "hint": ""}),
        )
        .unwrap_err();
        match err {
            ApiError::Validation { hint, .. } => assert!(hint.is_none()),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_request_with_error_key() {
        let err = classify_json(400, json!({"error": "Missing required fields"})).unwrap_err();
        match err {
            ApiError::Validation { message, .. } => {
                assert_eq!(message, "Missing required fields");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_json_body_preserved_verbatim() {
        let err = classify(200, "<html>oops</html>").unwrap_err();
        match err {
            ApiError::Unknown { status, body } => {
                assert_eq!(status, 200);
                assert_eq!(body, "<html>oops</html>");
            }
            other => panic!("expected unknown error, got {other:?}"),
        }
    }

    #[test]
    fn test_unhandled_5xx_is_unknown() {
        let err = classify_json(500, json!({"error": "boom"})).unwrap_err();
        assert!(matches!(err, ApiError::Unknown { status: 500, .. }));
    }
}
