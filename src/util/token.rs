//! Bearer token payload decoding.
//!
//! Tokens are JWTs issued by the backend. Only the payload segment is read;
//! the signature is never checked here. Anything derived from these claims
//! (role, expiry) is UI gating, and the backend re-verifies every request.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Claims read from a token payload. Other claims are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Claims {
    /// Role assigned by the backend (e.g. `"admin"`, `"user"`).
    #[serde(default)]
    pub role: Option<String>,
    /// Expiry in seconds since the Unix epoch.
    #[serde(deserialize_with = "deserialize_epoch_seconds")]
    pub exp: i64,
}

/// Token decode failure. Callers treat it the same as "no token".
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("malformed token: {0}")]
    Malformed(&'static str),
}

/// Decode the claims carried by `token`.
///
/// # Errors
///
/// Returns [`TokenError::Malformed`] when the token has no payload segment,
/// the payload is not base64url JSON, or it lacks a numeric `exp`.
pub fn decode(token: &str) -> Result<Claims, TokenError> {
    let payload = token
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or(TokenError::Malformed("missing payload segment"))?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| TokenError::Malformed("payload is not base64url"))?;
    serde_json::from_slice(&bytes).map_err(|_| TokenError::Malformed("payload is not a claims object"))
}

/// Build an unsigned token around `claims` for tests.
#[cfg(test)]
pub(crate) fn encode_unsigned(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.signature")
}

fn deserialize_epoch_seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float.floor() as i64);
            }
            Err(D::Error::custom("expected epoch seconds"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
