//! Bearer-token attachment for outgoing API calls.
//!
//! Every request except login/signup must carry a live token. A request
//! with a missing or expired token is rejected before it leaves the client,
//! and the redirect hook is told to send the user to `/login`. There is no
//! refresh flow; expiry always means re-login.

#[cfg(test)]
#[path = "authorizer_test.rs"]
mod authorizer_test;

use std::sync::Arc;

use super::api::ApiRequest;
use super::error::ApiError;
use crate::services::session::SessionReader;
use crate::util::auth::{self, LOGIN_PATH};

/// URL fragments exempt from authorization.
pub const BYPASS_PATHS: [&str; 2] = ["/login", "/signup"];

type RedirectHook = Arc<dyn Fn(&str) + Send + Sync>;

pub fn is_bypassed(url: &str) -> bool {
    BYPASS_PATHS.iter().any(|path| url.contains(path))
}

#[derive(Clone)]
pub struct RequestAuthorizer {
    session: SessionReader,
    on_unauthorized: RedirectHook,
}

impl RequestAuthorizer {
    pub fn new<F>(session: SessionReader, on_unauthorized: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self { session, on_unauthorized: Arc::new(on_unauthorized) }
    }

    /// Return `request` ready to send, or refuse it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::AuthExpired`] when the token is absent, undecodable,
    /// or expired. The redirect hook has already fired by then.
    pub fn authorize(&self, request: ApiRequest) -> Result<ApiRequest, ApiError> {
        if is_bypassed(&request.url) {
            return Ok(request);
        }
        match self.session.current_token() {
            Some(token) if auth::is_logged_in(Some(&token), self.session.now()) => Ok(request.with_bearer(&token)),
            _ => {
                leptos::logging::warn!("request blocked without live session: {}", request.url);
                (self.on_unauthorized)(LOGIN_PATH);
                Err(ApiError::AuthExpired)
            }
        }
    }
}
