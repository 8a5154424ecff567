//! Session lifecycle: login, signup, logout, and state publication.
//!
//! ARCHITECTURE
//! ============
//! `SessionService` is the only writer of the token store and the session
//! state. Everything else gets a [`SessionReader`], which can read the token,
//! evaluate the logged-in rule, and subscribe to state changes but cannot
//! mutate either.
//!
//! Listeners run synchronously inside `publish`, after the new state and the
//! token store are both updated, so no listener can observe a half-applied
//! login or logout. Locks are released before listeners are called.
//!
//! TRADE-OFFS
//! ==========
//! A logout while a login request is in flight is not coordinated; whichever
//! finishes last wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock, Weak};

use crate::net::auth::AuthApi;
use crate::net::error::ApiError;
use crate::net::types::{Credentials, SignupPayload};
use crate::state::session::{SessionState, derive_state};
use crate::util::auth::{self, LOGIN_PATH};
use crate::util::clock;
use crate::util::token::{self, TokenError};
use crate::util::token_store::{TokenSource, TokenStore};

type Listener = Arc<dyn Fn(&SessionState) + Send + Sync>;
type Clock = Arc<dyn Fn() -> i64 + Send + Sync>;

/// Login/signup failure surfaced to the caller. Never retried.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("login returned an unusable token")]
    InvalidToken(#[from] TokenError),
    #[error("login returned an expired token")]
    TokenExpired,
}

/// Result of a successful login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionStarted {
    pub role: Option<String>,
    pub expires_at: i64,
}

// =============================================================================
// STATE CELL
// =============================================================================

#[derive(Default)]
struct SessionCell {
    state: RwLock<SessionState>,
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_id: AtomicU64,
}

impl SessionCell {
    fn snapshot(&self) -> SessionState {
        self.state.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn publish(&self, next: SessionState) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = next.clone();
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&next);
        }
    }

    fn unsubscribe(&self, id: u64) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|(listener_id, _)| *listener_id != id);
    }
}

/// Keeps a listener registered; dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cell: Weak<SessionCell>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cell) = self.cell.upgrade() {
            cell.unsubscribe(self.id);
        }
    }
}

// =============================================================================
// READER
// =============================================================================

/// Read-only view of the session, shared with the guard and the authorizer.
#[derive(Clone)]
pub struct SessionReader {
    tokens: Arc<dyn TokenSource>,
    cell: Arc<SessionCell>,
    clock: Clock,
}

impl SessionReader {
    pub fn current_token(&self) -> Option<String> {
        self.tokens.get()
    }

    /// Role of the current token, or `None` when not logged in.
    pub fn current_role(&self) -> Option<String> {
        let token = self.current_token();
        if auth::is_logged_in(token.as_deref(), self.now()) { auth::role_of(token.as_deref()) } else { None }
    }

    /// The unified logged-in rule, evaluated against the clock right now.
    pub fn is_logged_in(&self) -> bool {
        auth::is_logged_in(self.current_token().as_deref(), self.now())
    }

    /// Last published state.
    pub fn state(&self) -> SessionState {
        self.cell.snapshot()
    }

    pub fn now(&self) -> i64 {
        (self.clock)()
    }

    /// Call `listener` on every state change until the returned guard drops.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&SessionState) + Send + Sync + 'static,
    {
        let id = self.cell.next_id.fetch_add(1, Ordering::Relaxed);
        self.cell
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        Subscription { cell: Arc::downgrade(&self.cell), id }
    }
}

// =============================================================================
// SERVICE
// =============================================================================

pub struct SessionService<A> {
    api: Arc<A>,
    store: Arc<dyn TokenStore>,
    cell: Arc<SessionCell>,
    clock: Clock,
    ttl_days: u32,
}

impl<A> Clone for SessionService<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            store: Arc::clone(&self.store),
            cell: Arc::clone(&self.cell),
            clock: Arc::clone(&self.clock),
            ttl_days: self.ttl_days,
        }
    }
}

impl<A: AuthApi> SessionService<A> {
    /// Create a logged-out service. Call [`Self::initialize_session_state`]
    /// once at startup to pick up a token left by a previous visit.
    pub fn new(store: Arc<dyn TokenStore>, api: A, ttl_days: u32) -> Self {
        Self {
            api: Arc::new(api),
            store,
            cell: Arc::new(SessionCell::default()),
            clock: Arc::new(clock::now_seconds),
            ttl_days,
        }
    }

    /// Replace the wall clock (epoch seconds).
    #[must_use]
    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> i64 + Send + Sync + 'static,
    {
        self.clock = Arc::new(clock);
        self
    }

    pub fn reader(&self) -> SessionReader {
        let tokens: Arc<dyn TokenSource> = self.store.clone();
        SessionReader { tokens, cell: Arc::clone(&self.cell), clock: Arc::clone(&self.clock) }
    }

    /// Log in and start a session.
    ///
    /// The returned token is checked before anything is persisted, so a
    /// rejected login or an unusable token leaves the store and state as
    /// they were.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Api`] when the backend rejects the call, and
    /// [`AuthError::InvalidToken`] / [`AuthError::TokenExpired`] when the
    /// issued token cannot start a session.
    pub async fn login(&self, credentials: &Credentials) -> Result<SessionStarted, AuthError> {
        let response = self.api.login(credentials).await.inspect_err(|e| {
            leptos::logging::warn!("login rejected: {e}");
        })?;
        let token = response.access_token;
        let claims = token::decode(&token)?;
        if auth::is_expired(&claims, (self.clock)()) {
            return Err(AuthError::TokenExpired);
        }

        self.store.set(&token, self.ttl_days);
        self.cell.publish(SessionState::active(claims.role.clone()));
        leptos::logging::log!("session started role={:?} exp={}", claims.role, claims.exp);
        Ok(SessionStarted { role: claims.role, expires_at: claims.exp })
    }

    /// Register a new account. The user still has to log in afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Api`] when the backend rejects the signup.
    pub async fn signup(&self, payload: &SignupPayload) -> Result<(), AuthError> {
        self.api.signup(payload).await.map_err(AuthError::from)
    }

    /// End the session. Returns the path to navigate to, or `None` when there
    /// is no storage context to clear (e.g. during SSR).
    pub fn logout(&self) -> Option<&'static str> {
        if !self.store.is_available() {
            return None;
        }
        self.store.clear();
        self.cell.publish(SessionState::logged_out());
        leptos::logging::log!("session ended");
        Some(LOGIN_PATH)
    }

    /// Re-derive and publish state from whatever token is stored now.
    pub fn initialize_session_state(&self) -> SessionState {
        let state = derive_state(self.store.get().as_deref(), (self.clock)());
        self.cell.publish(state.clone());
        state
    }

    pub fn current_token(&self) -> Option<String> {
        self.store.get()
    }

    pub fn current_role(&self) -> Option<String> {
        self.reader().current_role()
    }
}
