//! Shared fixtures for session-dependent unit tests.

use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use serde_json::json;

use crate::net::auth::AuthApi;
use crate::net::error::ApiError;
use crate::net::types::{Credentials, LoginResponse, SignupPayload};
use crate::services::session::SessionService;
use crate::util::token::encode_unsigned;
use crate::util::token_store::{MemoryTokenStore, TokenStore};

/// Unsigned token with the given role and expiry.
pub fn token_for(role: &str, exp: i64) -> String {
    encode_unsigned(&json!({ "role": role, "exp": exp, "sub": "user-1" }))
}

/// Settable clock shared between a test and the service under test.
#[derive(Clone, Default)]
pub struct ManualClock(Arc<AtomicI64>);

impl ManualClock {
    pub fn at(now: i64) -> Self {
        Self(Arc::new(AtomicI64::new(now)))
    }

    pub fn set(&self, now: i64) {
        self.0.store(now, Ordering::SeqCst);
    }

    pub fn now(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

/// Canned backend answers plus call counters.
pub struct StubAuthApi {
    pub login_result: Mutex<Result<LoginResponse, ApiError>>,
    pub signup_result: Mutex<Result<(), ApiError>>,
    pub login_calls: AtomicUsize,
    pub signup_calls: AtomicUsize,
}

impl StubAuthApi {
    pub fn issuing(token: &str) -> Self {
        Self::answering(Ok(LoginResponse { access_token: token.to_owned() }))
    }

    pub fn answering(login_result: Result<LoginResponse, ApiError>) -> Self {
        Self {
            login_result: Mutex::new(login_result),
            signup_result: Mutex::new(Ok(())),
            login_calls: AtomicUsize::new(0),
            signup_calls: AtomicUsize::new(0),
        }
    }
}

impl AuthApi for StubAuthApi {
    async fn login(&self, _credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        self.login_result.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    async fn signup(&self, _payload: &SignupPayload) -> Result<(), ApiError> {
        self.signup_calls.fetch_add(1, Ordering::SeqCst);
        self.signup_result.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

/// A service over a memory store, optionally seeded with `token`, at `now`.
pub fn session_fixture(
    token: Option<&str>,
    api: StubAuthApi,
    now: i64,
) -> (SessionService<StubAuthApi>, Arc<MemoryTokenStore>, ManualClock) {
    let store = Arc::new(token.map_or_else(MemoryTokenStore::default, MemoryTokenStore::with_token));
    let clock = ManualClock::at(now);
    let tick = clock.clone();
    let shared: Arc<dyn TokenStore> = store.clone();
    let session = SessionService::new(shared, api, 1).with_clock(move || tick.now());
    (session, store, clock)
}

pub fn credentials() -> Credentials {
    Credentials { email: "admin@example.com".to_owned(), password: "Secr3t!pass".to_owned() }
}
