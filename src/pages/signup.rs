//! Account registration page.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::AppSession;
#[cfg(feature = "hydrate")]
use crate::components::toast::notify;
use crate::net::types::SignupPayload;
#[cfg(feature = "hydrate")]
use crate::state::toast::ToastKind;
use crate::state::toast::ToastState;

const PASSWORD_SPECIALS: &[char] = &['@', '$', '!', '%', '*', '?', '&'];
const MIN_PASSWORD_LEN: usize = 8;
const PHONE_DIGITS: usize = 10;

/// Raw signup form values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
}

/// Exactly ten ASCII digits.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit())
}

/// At least eight characters drawn from ASCII letters, digits, and
/// `@$!%*?&`, with at least one of each class.
pub fn is_strong_password(password: &str) -> bool {
    let allowed = |c: char| c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(&c);
    password.chars().count() >= MIN_PASSWORD_LEN
        && password.chars().all(allowed)
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(&c))
}

/// Check the form and build the request body; the confirmation is dropped.
pub fn validate_signup(form: &SignupForm) -> Result<SignupPayload, &'static str> {
    let full_name = form.full_name.trim();
    let email = form.email.trim();
    let phone = form.phone_number.trim();
    if full_name.is_empty() || email.is_empty() || phone.is_empty() || form.password.is_empty() {
        return Err("All fields are required.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if !is_valid_phone(phone) {
        return Err("Phone number must be exactly 10 digits.");
    }
    if !is_strong_password(&form.password) {
        return Err("Password must be at least 8 characters with upper, lower, digit, and one of @$!%*?&.");
    }
    if form.password != form.confirm_password {
        return Err("Passwords do not match.");
    }
    Ok(SignupPayload {
        full_name: full_name.to_owned(),
        email: email.to_owned(),
        phone_number: phone.to_owned(),
        password: form.password.clone(),
    })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(SignupForm::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match validate_signup(&form.get()) {
            Ok(payload) => payload,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session.signup(&payload).await {
                    Ok(()) => {
                        navigate("/login", leptos_router::NavigateOptions::default());
                        notify(toasts, ToastKind::Success, "Signup successful! Please login.");
                    }
                    Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, &session, &navigate, toasts);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign up"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || form.with(|f| f.full_name.clone())
                        on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="tel"
                        maxlength="10"
                        placeholder="Phone number"
                        prop:value=move || form.with(|f| f.phone_number.clone())
                        on:input=move |ev| form.update(|f| f.phone_number = event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || form.with(|f| f.confirm_password.clone())
                        on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Create account"
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already registered? " <a href="/login">"Login"</a>
                </p>
            </div>
        </div>
    }
}
