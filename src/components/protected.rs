//! Route guard wrapper for authenticated views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Blocking alone would leave a blank page, so a rejected guard also
//! navigates to `/login`. Nothing is decided while the session is loading.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::AppSession;
use crate::state::session::SessionState;
use crate::util::auth::{can_enter, install_unauth_redirect};

/// Render `children` only while the session passes the route guard.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<AppSession>();
    let state = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session.reader(), state, use_navigate());

    let reader = session.reader();
    let allowed = move || {
        let observed = state.get();
        !observed.loading && observed.logged_in && can_enter(&reader)
    };
    let waiting = move || {
        if state.get().loading { "Checking session..." } else { "Redirecting to login..." }
    };

    view! {
        <Show when=allowed fallback=move || view! { <p class="guard-message">{waiting}</p> }>
            {children()}
        </Show>
    }
}
