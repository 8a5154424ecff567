//! Client configuration baked in at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! A WASM bundle has no process environment, so values are read with
//! `option_env!` when the crate is compiled and fall back to local-dev
//! defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_API_BASE: &str = "http://localhost:3000/";
const DEFAULT_COOKIE_NAME: &str = "token";
const DEFAULT_TOKEN_TTL_DAYS: u32 = 1;

/// Backend and session settings shared by the network and session layers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST API root, always ending in `/`.
    pub api_base: String,
    /// Cookie the session token is persisted under.
    pub cookie_name: String,
    /// Lifetime of the persisted token cookie.
    pub token_ttl_days: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            cookie_name: DEFAULT_COOKIE_NAME.to_owned(),
            token_ttl_days: DEFAULT_TOKEN_TTL_DAYS,
        }
    }
}

impl ClientConfig {
    /// Build from `CATALOG_API_URL` / `CATALOG_TOKEN_TTL_DAYS` captured at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("CATALOG_API_URL"), option_env!("CATALOG_TOKEN_TTL_DAYS"))
    }

    fn from_values(api_base: Option<&str>, ttl_days: Option<&str>) -> Self {
        let defaults = Self::default();
        let api_base = api_base
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map_or(defaults.api_base, normalize_api_base);
        let token_ttl_days = ttl_days
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|days| *days > 0)
            .unwrap_or(defaults.token_ttl_days);
        Self { api_base, cookie_name: defaults.cookie_name, token_ttl_days }
    }

    /// Join a relative endpoint path onto `api_base`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path.trim_start_matches('/'))
    }
}

fn normalize_api_base(raw: &str) -> String {
    if raw.ends_with('/') { raw.to_owned() } else { format!("{raw}/") }
}
