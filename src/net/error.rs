//! REST error taxonomy and message normalization.
//!
//! ERROR HANDLING
//! ==============
//! Every failure reaching the UI is a single human-readable string. Backend
//! validation errors arrive as `{"message": [..]}` or `{"message": ".."}`;
//! anything else falls back to the status line.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Shown when the backend gave nothing more specific.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Failure of an outgoing API call. `Display` is the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No usable token; the request was never sent.
    #[error("Session token is missing or expired, redirecting to login.")]
    AuthExpired,
    /// Backend answered with a non-success status.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// The request never got a response.
    #[error("Client-side error: {0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),
    /// HTTP is only wired up in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build an [`ApiError::Http`] from a raw response.
    pub fn from_response(status: u16, status_text: &str, body: &str) -> Self {
        Self::Http { status, message: normalize_http_error(status, status_text, body) }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Collapse a backend error response into one message.
pub fn normalize_http_error(status: u16, status_text: &str, body: &str) -> String {
    if status == 0 {
        return GENERIC_ERROR_MESSAGE.to_owned();
    }
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("message").cloned());
    match message {
        Some(serde_json::Value::Array(items)) if !items.is_empty() => items
            .iter()
            .map(|item| item.as_str().map_or_else(|| item.to_string(), str::to_owned))
            .collect::<Vec<_>>()
            .join(", "),
        Some(serde_json::Value::String(text)) if !text.is_empty() => text,
        _ => format!("Error {status}: {status_text}"),
    }
}
