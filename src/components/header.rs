//! Top navigation bar reflecting the current session.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::AppSession;
use crate::components::toast::notify;
use crate::state::session::SessionState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::location::redirect_to;

/// Shows login/signup links when logged out; products, admin-only users, and
/// logout when logged in. The nav is left out until the session has loaded.
#[component]
pub fn Header() -> impl IntoView {
    let session = StoredValue::new(expect_context::<AppSession>());
    let state = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_logout = move |_| {
        if let Some(path) = session.with_value(AppSession::logout) {
            notify(toasts, ToastKind::Success, "Logged out");
            redirect_to(path);
        }
    };

    view! {
        <header class="app-header">
            <span class="app-header__title">"Catalog Admin"</span>
            <Show when=move || !state.get().loading>
                <nav class="app-header__nav">
                    <Show
                        when=move || state.get().logged_in
                        fallback=|| {
                            view! {
                                <A href="/login">"Login"</A>
                                <A href="/signup">"Signup"</A>
                            }
                        }
                    >
                        <A href="/products">"Products"</A>
                        <Show when=move || state.get().is_admin()>
                            <A href="/users">"Users"</A>
                        </Show>
                        <button class="app-header__logout" on:click=on_logout>
                            "Logout"
                        </button>
                    </Show>
                </nav>
            </Show>
        </header>
    }
}
