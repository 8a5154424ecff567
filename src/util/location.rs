//! Full-page browser navigation.
//!
//! Used where no router handle is available (request authorizer hook,
//! `Send + Sync` view closures). A no-op outside the browser.

/// Point `window.location` at `path`.
pub fn redirect_to(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(path).is_err() {
                leptos::logging::warn!("redirect to {path} failed");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
