//! Sign-in page. Real sign-in belongs to the identity provider; the form here
//! drives the development session endpoint, which the server only honours
//! when its bypass flag is on.

use leptos::prelude::*;

const DEV_SESSION_ACTION: &str = "/api/auth/dev-session";

/// Check the sign-in form before letting the browser submit it.
pub(crate) fn validate_sign_in(email: &str) -> Result<(), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter an email first.");
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err("Enter a valid email address."),
    }
}

/// Serves both `/signin` and `/signup`; the provider handles either flow.
#[component]
pub fn SignInPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| match validate_sign_in(&email.get()) {
        Ok(()) => info.set("Signing in...".to_owned()),
        Err(msg) => {
            ev.prevent_default();
            info.set(msg.to_owned());
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Tavio"</h1>
                <p class="login-card__subtitle">"Sign in through your identity provider."</p>
                <form class="login-form" method="post" action=DEV_SESSION_ACTION on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        name="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        name="name"
                        placeholder="Display name (optional)"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Continue"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__hint">"Development sign-in is only available when enabled on the server."</p>
                <a class="login-card__back" href="/">"Back to home"</a>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;
