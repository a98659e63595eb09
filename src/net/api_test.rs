use super::*;

// =============================================================
// Login response interpretation
// =============================================================

#[test]
fn extract_access_token_from_login_body() {
    let body = r#"{"access_token":"tok1"}"#;
    assert_eq!(extract_access_token(body).as_deref(), Some("tok1"));
}

#[test]
fn extract_access_token_missing_or_malformed() {
    assert_eq!(extract_access_token(r#"{"msg":"nope"}"#), None);
    assert_eq!(extract_access_token("not json"), None);
    assert_eq!(extract_access_token(r#"{"access_token":42}"#), None);
}

// =============================================================
// Auth failure messages
// =============================================================

#[test]
fn auth_failure_prefers_server_msg() {
    let body = r#"{"msg":"Invalid credentials"}"#;
    assert_eq!(auth_failure_message(body), "Invalid credentials");
}

#[test]
fn auth_failure_falls_back_without_msg() {
    assert_eq!(auth_failure_message("{}"), AUTH_FAILED_MESSAGE);
    assert_eq!(auth_failure_message(""), AUTH_FAILED_MESSAGE);
    assert_eq!(auth_failure_message(r#"{"msg":123}"#), AUTH_FAILED_MESSAGE);
}

// =============================================================
// Status taxonomy
// =============================================================

#[test]
fn status_401_and_422_mean_session_expired() {
    assert_eq!(status_error(401), ApiError::SessionExpired);
    assert_eq!(status_error(422), ApiError::SessionExpired);
}

#[test]
fn other_statuses_map_to_http_error() {
    assert_eq!(status_error(500), ApiError::Http(500));
    assert_eq!(status_error(404), ApiError::Http(404));
}

#[test]
fn api_error_display_is_user_presentable() {
    assert_eq!(ApiError::SessionExpired.to_string(), "session expired");
    assert_eq!(
        ApiError::Http(500).to_string(),
        "request failed with status 500"
    );
    assert_eq!(
        ApiError::Network("timed out".to_owned()).to_string(),
        "network error: timed out"
    );
}
