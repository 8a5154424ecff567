//! Auth policy and route guarding.
//!
//! SYSTEM CONTEXT
//! ==============
//! One logged-in rule is applied everywhere: a token is present, decodes,
//! and has not expired. Session state, the route guard, and the request
//! authorizer all go through [`is_logged_in`].
//!
//! These checks gate UI only. The backend verifies the token and role on
//! every request it receives.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::services::session::SessionReader;
use crate::state::session::SessionState;
use crate::util::token::{self, Claims};

/// Route unauthenticated users are sent to.
pub const LOGIN_PATH: &str = "/login";

/// `true` once `now` is strictly past `claims.exp`; a token expiring at
/// exactly `now` is still valid.
pub fn is_expired(claims: &Claims, now: i64) -> bool {
    now > claims.exp
}

/// Present, decodable, and unexpired.
pub fn is_logged_in(token: Option<&str>, now: i64) -> bool {
    token
        .and_then(|raw| token::decode(raw).ok())
        .is_some_and(|claims| !is_expired(&claims, now))
}

/// Role carried by `token`, or `None` when absent or undecodable.
pub fn role_of(token: Option<&str>) -> Option<String> {
    token.and_then(|raw| token::decode(raw).ok()).and_then(|claims| claims.role)
}

/// Outcome of evaluating the guard before entering a protected view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

/// Whether a protected view may be entered right now.
pub fn can_enter(session: &SessionReader) -> bool {
    session.is_logged_in()
}

pub fn guard(session: &SessionReader) -> GuardDecision {
    if can_enter(session) { GuardDecision::Allow } else { GuardDecision::Redirect(LOGIN_PATH) }
}

/// Guard outcome for a component observing `state`, or `None` while the
/// session is still loading and no decision can be made yet.
pub fn resolved_guard(state: &SessionState, session: &SessionReader) -> Option<GuardDecision> {
    if state.loading { None } else { Some(guard(session)) }
}

/// Redirect to `/login` whenever auth has loaded and the guard rejects the
/// current session.
///
/// Re-evaluated each time `state` changes, so a logout elsewhere also leaves
/// the protected route.
pub fn install_unauth_redirect<F>(session: SessionReader, state: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(GuardDecision::Redirect(path)) = resolved_guard(&state.get(), &session) {
            navigate(path, NavigateOptions::default());
        }
    });
}
