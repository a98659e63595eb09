use super::*;

// =============================================================
// SessionState
// =============================================================

#[test]
fn session_default_has_no_token() {
    let s = SessionState::default();
    assert!(s.token.is_none());
    assert!(!s.is_authenticated());
}

#[test]
fn restore_keeps_persisted_token() {
    let s = SessionState::restore(Some("tok1".to_owned()));
    assert!(s.is_authenticated());
    assert_eq!(s.token.as_deref(), Some("tok1"));
}

#[test]
fn restore_without_persisted_token_is_unauthenticated() {
    let s = SessionState::restore(None);
    assert!(!s.is_authenticated());
}

#[test]
fn login_commits_token() {
    let mut s = SessionState::default();
    s.login("tok1".to_owned());
    assert_eq!(s.token.as_deref(), Some("tok1"));
    assert!(s.is_authenticated());
}

#[test]
fn logout_clears_token() {
    let mut s = SessionState::restore(Some("tok1".to_owned()));
    s.logout();
    assert!(s.token.is_none());
    assert!(!s.is_authenticated());
}

// =============================================================
// AuthMode
// =============================================================

#[test]
fn auth_mode_defaults_to_login() {
    assert_eq!(AuthMode::default(), AuthMode::Login);
}

#[test]
fn auth_mode_toggles_both_ways() {
    assert_eq!(AuthMode::Login.toggled(), AuthMode::Register);
    assert_eq!(AuthMode::Register.toggled(), AuthMode::Login);
}
