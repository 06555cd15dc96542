use serde_json::json;

use super::*;

// =============================================================
// extract_error_message
// =============================================================

#[test]
fn message_field_wins() {
    let body = json!({ "message": "Bad credentials", "error": "Unauthorized" });
    assert_eq!(extract_error_message(Some(&body)), "Bad credentials");
}

#[test]
fn error_field_used_when_message_missing() {
    let body = json!({ "error": "Unauthorized", "status": 401 });
    assert_eq!(extract_error_message(Some(&body)), "Unauthorized");
}

#[test]
fn empty_message_falls_through_to_error() {
    let body = json!({ "message": "", "error": "Account locked" });
    assert_eq!(extract_error_message(Some(&body)), "Account locked");
}

#[test]
fn numeric_message_is_shown_as_text() {
    let body = json!({ "message": 42, "error": "Forbidden" });
    assert_eq!(extract_error_message(Some(&body)), "42");
}

#[test]
fn structured_message_is_skipped() {
    let body = json!({ "message": { "code": 1 }, "error": "Forbidden" });
    assert_eq!(extract_error_message(Some(&body)), "Forbidden");
}

#[test]
fn plain_text_body_is_used_verbatim() {
    let body = Value::String("401::Invalid Credentials".to_owned());
    assert_eq!(extract_error_message(Some(&body)), "401::Invalid Credentials");
}

#[test]
fn missing_body_falls_back() {
    assert_eq!(extract_error_message(None), REJECTED_FALLBACK_MESSAGE);
}

#[test]
fn object_without_known_fields_falls_back() {
    let body = json!({ "timestamp": "2024-01-01", "path": "/api/auth/login" });
    assert_eq!(extract_error_message(Some(&body)), "Invalid email or password");
}

#[test]
fn empty_string_body_falls_back() {
    let body = Value::String(String::new());
    assert_eq!(extract_error_message(Some(&body)), REJECTED_FALLBACK_MESSAGE);
}

// =============================================================
// user_message
// =============================================================

#[test]
fn user_message_per_variant() {
    assert_eq!(
        LoginError::MalformedResponse { body: Some(json!({})) }.user_message(),
        "Invalid response from server"
    );
    assert_eq!(
        LoginError::Rejected { status: 401, body: Some(json!({ "message": "Bad credentials" })) }.user_message(),
        "Bad credentials"
    );
    assert_eq!(
        LoginError::NoResponse("connection refused".to_owned()).user_message(),
        "No response from server. Please check if the server is running."
    );
    assert_eq!(
        LoginError::Setup("bad header".to_owned()).user_message(),
        "An error occurred. Please try again."
    );
}

#[test]
fn user_message_hides_diagnostic_detail() {
    let err = LoginError::NoResponse("tcp connect error: 127.0.0.1:8080".to_owned());
    assert!(err.to_string().contains("127.0.0.1:8080"));
    assert!(!err.user_message().contains("127.0.0.1"));
}

#[test]
fn transport_errors_map_to_matching_buckets() {
    assert_eq!(
        LoginError::from(TransportError::Setup("x".to_owned())),
        LoginError::Setup("x".to_owned())
    );
    assert_eq!(
        LoginError::from(TransportError::NoResponse("y".to_owned())),
        LoginError::NoResponse("y".to_owned())
    );
}
