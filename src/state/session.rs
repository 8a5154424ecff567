//! Derived session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written only by the session service; read by the route guard, the header,
//! and pages that gate admin-only controls on role.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::auth;

/// Whether a user is logged in and with which role.
///
/// Invariant: `role` is `None` whenever `logged_in` is false.
///
/// `loading` is set until the stored token has been read in the browser.
/// Server render and the first client render both start there, so the two
/// trees match and redirects wait until the session is known.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub logged_in: bool,
    pub role: Option<String>,
    pub loading: bool,
}

impl SessionState {
    /// Not yet read from the token store.
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    pub fn logged_out() -> Self {
        Self::default()
    }

    pub fn active(role: Option<String>) -> Self {
        Self { logged_in: true, role, loading: false }
    }

    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }
}

/// Derive the state for `token` at `now` under the unified logged-in rule.
pub fn derive_state(token: Option<&str>, now: i64) -> SessionState {
    if auth::is_logged_in(token, now) {
        SessionState::active(auth::role_of(token))
    } else {
        SessionState::logged_out()
    }
}
