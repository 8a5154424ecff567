//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! `App` owns the single session service for the page and hands out shared
//! handles through Leptos context: the service itself (for login, signup,
//! and logout), a `RwSignal<SessionState>` mirror of the published session
//! state, the toast queue, and the authorized `ApiClient`.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::header::Header;
use crate::components::protected::Protected;
use crate::components::toast::ToastHost;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::auth::HttpAuthApi;
use crate::net::authorizer::RequestAuthorizer;
use crate::pages::{
    login::LoginPage,
    products::{ProductDetailPage, ProductsPage},
    signup::SignupPage,
    users::UsersPage,
};
use crate::services::session::SessionService;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::location::redirect_to;
use crate::util::token_store::{CookieTokenStore, TokenStore};

/// Session service type shared through context.
pub type AppSession = SessionService<HttpAuthApi>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let store: Arc<dyn TokenStore> = Arc::new(CookieTokenStore::new(config.cookie_name.clone()));
    let session = SessionService::new(store, HttpAuthApi::new(config.clone()), config.token_ttl_days);

    // Server and first client render both start pending; the cookie is only
    // read once the client is running, and every publish is mirrored here.
    let state = RwSignal::new(SessionState::pending());
    let subscription = session.reader().subscribe(move |next| {
        let _ = state.try_set(next.clone());
    });
    on_cleanup(move || drop(subscription));

    let init_session = session.clone();
    Effect::new(move || {
        init_session.initialize_session_state();
    });

    let hook_session = session.clone();
    let authorizer = RequestAuthorizer::new(session.reader(), move |path| {
        hook_session.initialize_session_state();
        redirect_to(path);
    });
    let client = ApiClient::new(config, authorizer);

    provide_context(session);
    provide_context(state);
    provide_context(RwSignal::new(ToastState::default()));
    provide_context(client);

    view! {
        <Stylesheet id="leptos" href="/pkg/catalog-admin.css"/>
        <Title text="Catalog Admin"/>

        <Router>
            <Header/>
            <main class="app-main">
                <Routes fallback=|| view! { <Redirect path="/login"/> }>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/login"/> }/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route
                        path=StaticSegment("products")
                        view=|| view! { <Protected><ProductsPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("products"), ParamSegment("id"))
                        view=|| view! { <Protected><ProductDetailPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("users")
                        view=|| view! { <Protected><UsersPage/></Protected> }
                    />
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
