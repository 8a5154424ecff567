use super::*;
use crate::test_support::{StubAuthApi, credentials, session_fixture, token_for};
use futures::executor::block_on;

const T: i64 = 1_800_000_000;

fn claims(exp: i64) -> Claims {
    Claims { role: Some("user".to_owned()), exp }
}

// =============================================================
// Policy
// =============================================================

#[test]
fn is_expired_boundary_is_strict() {
    assert!(!is_expired(&claims(T), T));
    assert!(is_expired(&claims(T), T + 1));
    assert!(!is_expired(&claims(T), T - 1));
}

#[test]
fn is_logged_in_requires_present_decodable_unexpired_token() {
    let token = token_for("user", T);
    assert!(is_logged_in(Some(&token), T - 1));
    assert!(is_logged_in(Some(&token), T));
    assert!(!is_logged_in(Some(&token), T + 1));
    assert!(!is_logged_in(None, T));
    assert!(!is_logged_in(Some("garbage"), T));
}

#[test]
fn role_of_reads_claim_or_none() {
    assert_eq!(role_of(Some(&token_for("admin", T))).as_deref(), Some("admin"));
    assert_eq!(role_of(Some("garbage")), None);
    assert_eq!(role_of(None), None);
}

// =============================================================
// Guard
// =============================================================

#[test]
fn resolved_guard_waits_while_session_loads() {
    let (session, _, _) = session_fixture(None, StubAuthApi::issuing("unused"), T);
    assert_eq!(resolved_guard(&SessionState::pending(), &session.reader()), None);
}

#[test]
fn resolved_guard_redirects_once_loaded_without_token() {
    let (session, _, _) = session_fixture(None, StubAuthApi::issuing("unused"), T);
    let state = session.initialize_session_state();
    assert_eq!(resolved_guard(&state, &session.reader()), Some(GuardDecision::Redirect(LOGIN_PATH)));
}

#[test]
fn resolved_guard_allows_loaded_live_session() {
    let token = token_for("user", T + 60);
    let (session, _, _) = session_fixture(Some(&token), StubAuthApi::issuing(&token), T);
    let state = session.initialize_session_state();
    assert_eq!(resolved_guard(&state, &session.reader()), Some(GuardDecision::Allow));
}

#[test]
fn guard_denies_empty_store_then_allows_right_after_login() {
    let token = token_for("admin", T + 3600);
    let (session, _, _) = session_fixture(None, StubAuthApi::issuing(&token), T);
    let reader = session.reader();

    assert!(!can_enter(&reader));
    assert_eq!(guard(&reader), GuardDecision::Redirect(LOGIN_PATH));

    block_on(session.login(&credentials())).expect("login");

    assert!(can_enter(&reader));
    assert_eq!(guard(&reader), GuardDecision::Allow);
}

#[test]
fn guard_redirects_once_token_expires() {
    let token = token_for("user", T);
    let (session, _, clock) = session_fixture(Some(&token), StubAuthApi::issuing(&token), T - 1);
    let reader = session.reader();
    assert_eq!(guard(&reader), GuardDecision::Allow);
    clock.set(T + 1);
    assert_eq!(guard(&reader), GuardDecision::Redirect("/login"));
}

#[test]
fn guard_denies_after_logout() {
    let token = token_for("user", T + 60);
    let (session, _, _) = session_fixture(Some(&token), StubAuthApi::issuing(&token), T);
    let reader = session.reader();
    assert!(can_enter(&reader));
    session.logout();
    assert!(!can_enter(&reader));
}
