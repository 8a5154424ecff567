use super::*;
use crate::net::api::Method;
use crate::test_support::{StubAuthApi, session_fixture, token_for};
use crate::util::auth::{is_logged_in, role_of};
use std::sync::Mutex;

const T: i64 = 1_800_000_000;

fn authorizer_for(reader: SessionReader) -> (RequestAuthorizer, Arc<Mutex<Vec<String>>>) {
    let redirects = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&redirects);
    let authorizer = RequestAuthorizer::new(reader, move |path| sink.lock().expect("sink").push(path.to_owned()));
    (authorizer, redirects)
}

fn products_request() -> ApiRequest {
    ApiRequest::new(Method::Get, "http://localhost:3000/products?page=1")
}

// =============================================================
// Bypass
// =============================================================

#[test]
fn bypass_matches_login_and_signup_substrings() {
    assert!(is_bypassed("http://localhost:3000/auth/login"));
    assert!(is_bypassed("http://localhost:3000/auth/signup"));
    assert!(!is_bypassed("http://localhost:3000/products"));
}

#[test]
fn bypass_paths_never_get_authorization_even_with_valid_token() {
    let token = token_for("admin", T + 60);
    let (session, _, _) = session_fixture(Some(&token), StubAuthApi::issuing(&token), T);
    let (authorizer, redirects) = authorizer_for(session.reader());

    for url in ["http://localhost:3000/auth/login", "http://localhost:3000/auth/signup"] {
        let request = ApiRequest::new(Method::Post, url);
        let authorized = authorizer.authorize(request.clone()).expect("bypassed");
        assert_eq!(authorized, request);
        assert!(authorized.header("Authorization").is_none());
    }
    assert!(redirects.lock().expect("redirects").is_empty());
}

// =============================================================
// Authorization
// =============================================================

#[test]
fn valid_token_is_attached_as_bearer() {
    let token = token_for("user", T + 60);
    let (session, _, _) = session_fixture(Some(&token), StubAuthApi::issuing(&token), T);
    let (authorizer, redirects) = authorizer_for(session.reader());

    let authorized = authorizer.authorize(products_request()).expect("authorized");

    assert_eq!(authorized.headers, vec![("Authorization".to_owned(), format!("Bearer {token}"))]);
    assert!(redirects.lock().expect("redirects").is_empty());
}

#[test]
fn missing_token_is_rejected_and_redirects() {
    let (session, _, _) = session_fixture(None, StubAuthApi::issuing("unused"), T);
    let (authorizer, redirects) = authorizer_for(session.reader());

    assert_eq!(authorizer.authorize(products_request()), Err(ApiError::AuthExpired));
    assert_eq!(*redirects.lock().expect("redirects"), vec!["/login".to_owned()]);
}

#[test]
fn malformed_token_is_rejected() {
    let (session, _, _) = session_fixture(Some("garbage"), StubAuthApi::issuing("unused"), T);
    let (authorizer, _) = authorizer_for(session.reader());
    assert_eq!(authorizer.authorize(products_request()), Err(ApiError::AuthExpired));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn rejected_request_is_never_dispatched() {
    use crate::config::ClientConfig;
    use crate::net::api::ApiClient;

    let (session, _, _) = session_fixture(None, StubAuthApi::issuing("unused"), T);
    let (authorizer, _) = authorizer_for(session.reader());
    let client = ApiClient::new(ClientConfig::default(), authorizer);

    // Outside the browser a dispatched request would fail with `Unavailable`.
    let result = futures::executor::block_on(client.send::<serde_json::Value>(products_request()));
    assert_eq!(result, Err(ApiError::AuthExpired));
}

// =============================================================
// End to end: one token across its expiry
// =============================================================

#[test]
fn token_lifecycle_across_expiry() {
    let token = token_for("user", T);
    let (session, _, clock) = session_fixture(Some(&token), StubAuthApi::issuing(&token), T - 1);
    let (authorizer, redirects) = authorizer_for(session.reader());

    assert!(is_logged_in(Some(&token), clock.now()));
    assert_eq!(role_of(Some(&token)).as_deref(), Some("user"));
    let authorized = authorizer.authorize(products_request()).expect("authorized before expiry");
    assert_eq!(authorized.header("Authorization"), Some(format!("Bearer {token}").as_str()));

    clock.set(T + 1);

    assert!(!is_logged_in(Some(&token), clock.now()));
    assert_eq!(authorizer.authorize(products_request()), Err(ApiError::AuthExpired));
    assert_eq!(*redirects.lock().expect("redirects"), vec!["/login".to_owned()]);
}
