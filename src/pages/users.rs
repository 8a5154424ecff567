//! Admin user management page.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::components::toast::notify;
use crate::net::api::ApiClient;
#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;
use crate::net::types::{UserFilters, UserRecord, UserResponse};
#[cfg(feature = "hydrate")]
use crate::net::users as user_api;
use crate::pages::products::page_count;
use crate::state::session::SessionState;
#[cfg(feature = "hydrate")]
use crate::state::toast::ToastKind;
use crate::state::toast::ToastState;

pub fn status_label(is_active: bool) -> &'static str {
    if is_active { "Active" } else { "Inactive" }
}

pub fn toggle_label(is_active: bool) -> &'static str {
    if is_active { "Deactivate" } else { "Activate" }
}

/// Record a confirmed status change locally. Returns `false` when `id` is not
/// on the current page.
pub fn apply_status(users: &mut [UserRecord], id: &str, is_active: bool) -> bool {
    match users.iter_mut().find(|user| user.id == id) {
        Some(user) => {
            user.is_active = is_active;
            true
        }
        None => false,
    }
}

fn load_users(
    client: StoredValue<ApiClient>,
    filters: UserFilters,
    listing: RwSignal<UserResponse>,
    loading: RwSignal<bool>,
    toasts: RwSignal<ToastState>,
) {
    loading.set(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match user_api::list(&client.get_value(), &filters).await {
            Ok(response) => listing.set(response),
            Err(ApiError::AuthExpired) => {}
            Err(e) => {
                leptos::logging::warn!("user list failed: {e}");
                notify(toasts, ToastKind::Error, e.to_string());
            }
        }
        loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (client, filters, listing, toasts);
        loading.set(false);
    }
}

fn toggle_status(client: StoredValue<ApiClient>, user: &UserRecord, listing: RwSignal<UserResponse>, toasts: RwSignal<ToastState>) {
    let id = user.id.clone();
    let next = !user.is_active;

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match user_api::update_status(&client.get_value(), &id, next).await {
            Ok(()) => listing.update(|r| {
                apply_status(&mut r.users, &id, next);
            }),
            Err(ApiError::AuthExpired) => {}
            Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (client, id, next, listing, toasts);
    }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let state = expect_context::<RwSignal<SessionState>>();

    view! {
        <Show
            when=move || state.get().is_admin()
            fallback=|| view! { <p class="guard-message">"Admins only."</p> }
        >
            <UserTable />
        </Show>
    }
}

#[component]
fn UserTable() -> impl IntoView {
    let client = StoredValue::new(expect_context::<ApiClient>());
    let toasts = expect_context::<RwSignal<ToastState>>();

    let filters = RwSignal::new(UserFilters::default());
    let keyword = RwSignal::new(String::new());
    let listing = RwSignal::new(UserResponse::default());
    let loading = RwSignal::new(true);

    Effect::new(move || load_users(client, filters.get(), listing, loading, toasts));

    let total_pages = move || filters.with(|f| page_count(listing.with(|l| l.total_users), f.limit));

    let on_filter = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        filters.update(|f| {
            f.keyword = keyword.get_untracked();
            f.page = 1;
        });
    };

    view! {
        <div class="users-page">
            <h1>"Users"</h1>
            <form class="filter-form" on:submit=on_filter>
                <input
                    type="text"
                    placeholder="Search"
                    prop:value=move || keyword.get()
                    on:input=move |ev| keyword.set(event_target_value(&ev))
                />
                <button type="submit">"Filter"</button>
            </form>
            <Show when=move || !loading.get() fallback=|| view! { <p class="loading">"Loading..."</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Phone"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || listing.get().users
                            key=|user: &UserRecord| (user.id.clone(), user.is_active)
                            children=move |user: UserRecord| {
                                let label = toggle_label(user.is_active);
                                let status = status_label(user.is_active);
                                let phone = user.phone_number.clone().unwrap_or_default();
                                let on_toggle = {
                                    let user = user.clone();
                                    move |_| toggle_status(client, &user, listing, toasts)
                                };
                                view! {
                                    <tr>
                                        <td>{user.full_name}</td>
                                        <td>{user.email}</td>
                                        <td>{phone}</td>
                                        <td>{status}</td>
                                        <td>
                                            <button on:click=on_toggle>{label}</button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || listing.with(|l| l.users.is_empty())>
                    <p class="empty">"No users found."</p>
                </Show>
            </Show>
            <div class="pager">
                <button
                    disabled=move || filters.with(|f| f.page <= 1)
                    on:click=move |_| filters.update(|f| f.page = f.page.saturating_sub(1).max(1))
                >
                    "Previous"
                </button>
                <span>{move || format!("Page {} of {}", filters.with(|f| f.page), total_pages())}</span>
                <button
                    disabled=move || filters.with(|f| f.page) >= total_pages()
                    on:click=move |_| filters.update(|f| f.page += 1)
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
