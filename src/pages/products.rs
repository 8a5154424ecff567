//! Product list and product create/edit pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admins see every product with its owner and no row actions. Everyone else
//! sees their own products and may edit or delete them. The backend enforces
//! both; the split here only shapes the table.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

#[cfg(feature = "hydrate")]
use crate::components::toast::notify;
use crate::net::api::ApiClient;
#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::products as product_api;
use crate::net::types::{Product, ProductFilters, ProductInput, ProductResponse};
use crate::state::session::SessionState;
#[cfg(feature = "hydrate")]
use crate::state::toast::ToastKind;
use crate::state::toast::ToastState;

/// Route id that opens the form in create mode.
pub const NEW_PRODUCT_ID: &str = "new";

const DESCRIPTION_LEN: std::ops::RangeInclusive<usize> = 10..=200;

/// Number of pages needed for `total` rows, never less than one.
pub fn page_count(total: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 1;
    }
    let pages = total.div_ceil(u64::from(limit)).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Display text for a product owner: a plain string, or the `fullName` /
/// `email` of a populated user object.
pub fn created_by_label(created_by: Option<&serde_json::Value>) -> String {
    match created_by {
        Some(serde_json::Value::String(name)) => name.clone(),
        Some(serde_json::Value::Object(user)) => user
            .get("fullName")
            .or_else(|| user.get("email"))
            .and_then(serde_json::Value::as_str)
            .unwrap_or("-")
            .to_owned(),
        _ => "-".to_owned(),
    }
}

/// Date part of an ISO-8601 timestamp.
pub fn format_created_at(created_at: Option<&str>) -> String {
    match created_at {
        Some(ts) => ts.get(..10).unwrap_or(ts).to_owned(),
        None => "-".to_owned(),
    }
}

/// Check the product form and build its text fields.
///
/// An image file is required when creating, and when editing a product that
/// has no stored image yet.
pub fn validate_product_input(
    name: &str,
    description: &str,
    has_new_image: bool,
    existing_image_url: &str,
    is_new: bool,
) -> Result<ProductInput, &'static str> {
    let name = name.trim();
    let description = description.trim();
    if name.is_empty() {
        return Err("Name is required.");
    }
    if !DESCRIPTION_LEN.contains(&description.chars().count()) {
        return Err("Description must be between 10 and 200 characters.");
    }
    let needs_image = is_new || existing_image_url.trim().is_empty();
    if needs_image && !has_new_image {
        return Err("Image is required.");
    }
    Ok(ProductInput { name: name.to_owned(), description: description.to_owned() })
}

fn load_products(
    client: StoredValue<ApiClient>,
    filters: ProductFilters,
    listing: RwSignal<ProductResponse>,
    loading: RwSignal<bool>,
    toasts: RwSignal<ToastState>,
) {
    loading.set(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match product_api::list(&client.get_value(), &filters).await {
            Ok(response) => listing.set(response),
            Err(ApiError::AuthExpired) => {}
            Err(e) => notify(toasts, ToastKind::Error, format!("Failed to fetch products: {e}")),
        }
        loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (client, filters, listing, toasts);
        loading.set(false);
    }
}

fn delete_product(client: StoredValue<ApiClient>, id: String, reload: RwSignal<u32>, toasts: RwSignal<ToastState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match product_api::delete(&client.get_value(), &id).await {
            Ok(()) => {
                notify(toasts, ToastKind::Success, "Product deleted successfully");
                reload.update(|n| *n += 1);
            }
            Err(ApiError::AuthExpired) => {}
            Err(e) => notify(toasts, ToastKind::Error, format!("Failed to delete product: {e}")),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (client, id, reload, toasts);
    }
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let client = StoredValue::new(expect_context::<ApiClient>());
    let state = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let filters = RwSignal::new(ProductFilters::default());
    let keyword = RwSignal::new(String::new());
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let listing = RwSignal::new(ProductResponse::default());
    let loading = RwSignal::new(true);
    let reload = RwSignal::new(0_u32);
    let pending_delete = RwSignal::new(None::<String>);

    Effect::new(move || {
        reload.track();
        load_products(client, filters.get(), listing, loading, toasts);
    });

    let is_admin = move || state.get().is_admin();
    let total_pages = move || filters.with(|f| page_count(listing.with(|l| l.total_products), f.limit));

    let on_filter = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        filters.update(|f| {
            f.keyword = keyword.get_untracked();
            f.start_date = start_date.get_untracked();
            f.end_date = end_date.get_untracked();
            f.page = 1;
        });
    };

    view! {
        <div class="products-page">
            <div class="page-toolbar">
                <h1>"Products"</h1>
                <Show when=move || !is_admin()>
                    <A href="/products/new">"New product"</A>
                </Show>
            </div>
            <form class="filter-form" on:submit=on_filter>
                <input
                    type="text"
                    placeholder="Search"
                    prop:value=move || keyword.get()
                    on:input=move |ev| keyword.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    prop:value=move || start_date.get()
                    on:input=move |ev| start_date.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    prop:value=move || end_date.get()
                    on:input=move |ev| end_date.set(event_target_value(&ev))
                />
                <button type="submit">"Filter"</button>
            </form>
            <Show when=move || !loading.get() fallback=|| view! { <p class="loading">"Loading..."</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Description"</th>
                            <th>"Image"</th>
                            <Show when=is_admin>
                                <th>"Created by"</th>
                            </Show>
                            <th>"Created"</th>
                            <Show when=move || !is_admin()>
                                <th>"Actions"</th>
                            </Show>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || listing.get().products
                            key=|product: &Product| product.id.clone()
                            children=move |product: Product| {
                                let owner = created_by_label(product.created_by.as_ref());
                                let created = format_created_at(product.created_at.as_deref());
                                let edit_href = format!("/products/{}", product.id);
                                let id = product.id.clone();
                                view! {
                                    <tr>
                                        <td>{product.name}</td>
                                        <td>{product.description}</td>
                                        <td>
                                            <img class="product-thumb" src=product.image_url alt="" />
                                        </td>
                                        <Show when=is_admin>
                                            <td>{owner.clone()}</td>
                                        </Show>
                                        <td>{created}</td>
                                        <Show when=move || !is_admin()>
                                            <td class="row-actions">
                                                <A href=edit_href.clone()>"Edit"</A>
                                                <button on:click={
                                                    let id = id.clone();
                                                    move |_| pending_delete.set(Some(id.clone()))
                                                }>"Delete"</button>
                                            </td>
                                        </Show>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || listing.with(|l| l.products.is_empty())>
                    <p class="empty">"No products found."</p>
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
            <Show when=move || pending_delete.get().is_some()>
                <div class="dialog-backdrop">
                    <div class="dialog">
                        <p>"Delete this product?"</p>
                        <button on:click=move |_| pending_delete.set(None)>"Cancel"</button>
                        <button
                            class="danger"
                            on:click=move |_| {
                                if let Some(id) = pending_delete.get() {
                                    pending_delete.set(None);
                                    delete_product(client, id, reload, toasts);
                                }
                            }
                        >
                            "Delete"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Create (`/products/new`) or edit (`/products/:id`) a product.
#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let client = StoredValue::new(expect_context::<ApiClient>());
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let product_id = move || params.with(|p| p.get("id").unwrap_or_default());
    let is_new = move || product_id() == NEW_PRODUCT_ID;

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let image_url = RwSignal::new(String::new());
    let file_name = RwSignal::new(String::new());
    let file_input = NodeRef::<leptos::html::Input>::new();
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    Effect::new(move || {
        let id = product_id();
        if id.is_empty() || id == NEW_PRODUCT_ID {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match product_api::get(&client.get_value(), &id).await {
                Ok(product) => {
                    name.set(product.name);
                    description.set(product.description);
                    image_url.set(product.image_url);
                }
                Err(ApiError::AuthExpired) => {}
                Err(e) => {
                    leptos::logging::warn!("product load failed: {e}");
                    notify(toasts, ToastKind::Error, "Failed to load product data.");
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, client, name, description, image_url);
    });

    let on_file_change = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let picked = file_input.get_untracked().and_then(|el| el.files()).and_then(|files| files.get(0));
            file_name.set(picked.map(|file| file.name()).unwrap_or_default());
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let creating = is_new();
        let validated = validate_product_input(
            &name.get(),
            &description.get(),
            !file_name.get().is_empty(),
            &image_url.get(),
            creating,
        );
        let input = match validated {
            Ok(input) => input,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        let id = product_id();

        #[cfg(feature = "hydrate")]
        {
            let image = file_input.get_untracked().and_then(|el| el.files()).and_then(|files| files.get(0));
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let client = client.get_value();
                let (result, success) = if creating {
                    let form = product_api::product_form(&input, None, image);
                    (product_api::create(&client, form).await, "Product created successfully")
                } else {
                    let form = product_api::product_form(&input, Some(&id), image);
                    (product_api::update(&client, &id, form).await, "Product updated successfully")
                };
                match result {
                    Ok(_) => {
                        notify(toasts, ToastKind::Success, success);
                        navigate("/products", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        let message = e.to_string();
                        notify(toasts, ToastKind::Error, message.clone());
                        error.set(Some(message));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (input, id, &navigate, toasts, file_input);
            busy.set(false);
        }
    };

    view! {
        <div class="product-form-page">
            <h1>{move || if is_new() { "New product" } else { "Edit product" }}</h1>
            <form class="product-form" on:submit=on_submit>
                <label>
                    "Name"
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Description"
                    <textarea
                        maxlength="200"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || !image_url.get().is_empty()>
                    <img class="product-preview" src=move || image_url.get() alt="Current image" />
                </Show>
                <label>
                    "Image"
                    <input type="file" accept="image/*" node_ref=file_input on:change=on_file_change />
                </label>
                <div class="form-actions">
                    <A href="/products">"Cancel"</A>
                    <button type="submit" disabled=move || busy.get()>
                        "Save"
                    </button>
                </div>
            </form>
            <Show when=move || error.get().is_some()>
                <p class="form-message form-message--error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
