//! Session token persistence.
//!
//! The browser store keeps the token in a `document.cookie` entry. Outside a
//! browser (SSR, native tests) every cookie operation is a no-op and reads
//! come back empty.
//!
//! OWNERSHIP
//! =========
//! [`TokenSource`] is the read half and [`TokenStore`] adds writes. Only the
//! session service holds a writable handle; everything else reads through a
//! `SessionReader`.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::sync::{Mutex, PoisonError};

#[cfg(any(test, feature = "hydrate"))]
const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Read access to the persisted token.
pub trait TokenSource: Send + Sync {
    /// Current token, or `None` when absent or storage is unreachable.
    fn get(&self) -> Option<String>;
}

/// Read/write access to the persisted token.
pub trait TokenStore: TokenSource {
    /// Persist `token` for `ttl_days`.
    fn set(&self, token: &str, ttl_days: u32);
    /// Remove the persisted token.
    fn clear(&self);
    /// Whether this store is backed by a live storage context.
    fn is_available(&self) -> bool;
}

/// Cookie-backed store used in the browser.
#[derive(Clone, Debug)]
pub struct CookieTokenStore {
    name: String,
}

impl CookieTokenStore {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Cookie key the token lives under.
    pub fn name(&self) -> &str {
        &self.name
    }

    #[cfg(feature = "hydrate")]
    fn html_document() -> Option<web_sys::HtmlDocument> {
        use wasm_bindgen::JsCast as _;
        web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
    }

    #[cfg(feature = "hydrate")]
    fn write(assignment: &str) {
        if let Some(document) = Self::html_document() {
            if document.set_cookie(assignment).is_err() {
                leptos::logging::warn!("token cookie write rejected");
            }
        }
    }
}

impl TokenSource for CookieTokenStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let raw = Self::html_document()?.cookie().ok()?;
            find_cookie(&raw, self.name())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

impl TokenStore for CookieTokenStore {
    fn set(&self, token: &str, ttl_days: u32) {
        #[cfg(feature = "hydrate")]
        {
            Self::write(&cookie_assignment(self.name(), token, ttl_days));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, ttl_days);
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            Self::write(&clear_assignment(self.name()));
        }
    }

    fn is_available(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            Self::html_document().is_some()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

/// In-process store for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<(String, u32)>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { slot: Mutex::new(Some((token.into(), 1))) }
    }

    /// TTL passed to the most recent `set`, if a token is stored.
    pub fn ttl_days(&self) -> Option<u32> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).as_ref().map(|(_, ttl)| *ttl)
    }
}

impl TokenSource for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).as_ref().map(|(token, _)| token.clone())
    }
}

impl TokenStore for MemoryTokenStore {
    fn set(&self, token: &str, ttl_days: u32) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some((token.to_owned(), ttl_days));
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Find `name` in a raw `document.cookie` string. Empty values count as absent.
#[cfg(any(test, feature = "hydrate"))]
fn find_cookie(raw: &str, name: &str) -> Option<String> {
    raw.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key != name || value.is_empty() {
            return None;
        }
        let decoded = urlencoding::decode(value).map_or_else(|_| value.to_owned(), |v| v.into_owned());
        Some(decoded)
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn cookie_assignment(name: &str, token: &str, ttl_days: u32) -> String {
    let max_age = u64::from(ttl_days) * SECONDS_PER_DAY;
    format!("{name}={}; max-age={max_age}; path=/", urlencoding::encode(token))
}

#[cfg(any(test, feature = "hydrate"))]
fn clear_assignment(name: &str) -> String {
    format!("{name}=; max-age=-1; path=/")
}
