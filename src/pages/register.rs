//! Registration page.
//!
//! The password hint lists every rule the current input still violates; the
//! gateway enforces the same policy on submit, so the hint is advisory only.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::recaptcha::RecaptchaWidget;
use crate::config::AppConfig;
use crate::identity::error::AuthError;
use crate::identity::gateway::IdentityGateway;
use crate::identity::password;
use crate::identity::types::Registration;
use crate::state::toast::{self, ToastState};
use crate::util::recaptcha::{self, WidgetId};

const REGISTER_FALLBACK: &str = "Registration failed. Please try again.";

fn register_failure_message(err: &AuthError) -> String {
    err.user_message(REGISTER_FALLBACK)
}

/// Build the gateway input from raw form values; a blank photo URL is absent.
fn registration_from(name: &str, email: &str, photo_url: &str, password: &str) -> Registration {
    let photo_url = photo_url.trim();
    Registration {
        email: email.trim().to_owned(),
        password: password.to_owned(),
        display_name: name.trim().to_owned(),
        photo_url: (!photo_url.is_empty()).then(|| photo_url.to_owned()),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let gateway = expect_context::<IdentityGateway>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let photo_url = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let widget = RwSignal::new(None::<WidgetId>);

    let hints = move || {
        let current = password.get();
        if current.is_empty() { Vec::new() } else { password::violations(&current) }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let registration = registration_from(
            &name.get_untracked(),
            &email.get_untracked(),
            &photo_url.get_untracked(),
            &password.get_untracked(),
        );
        let challenge = recaptcha::challenge_token(&config, widget.get_untracked());
        let gateway = gateway.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match gateway.register(registration, &challenge).await {
                Ok(_) => {
                    toast::success(toasts, "Account created successfully!");
                    navigate("/", leptos_router::NavigateOptions::default());
                }
                Err(e) => toast::error(toasts, register_failure_message(&e)),
            }
            recaptcha::reset(widget.get_untracked());
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__header">
                    <h1 class="auth-card__title">"Create Account"</h1>
                    <p class="auth-card__subtitle">"Join our gardening community today!"</p>
                </div>

                <form class="auth-form" on:submit=on_submit>
                    <div class="form-field">
                        <label for="name">"Full Name"</label>
                        <input
                            id="name"
                            class="input-field"
                            type="text"
                            required
                            placeholder="Enter your full name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-field">
                        <label for="email">"Email"</label>
                        <input
                            id="email"
                            class="input-field"
                            type="email"
                            required
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-field">
                        <label for="photo-url">"Photo URL"</label>
                        <input
                            id="photo-url"
                            class="input-field"
                            type="url"
                            placeholder="Enter your photo URL"
                            prop:value=move || photo_url.get()
                            on:input=move |ev| photo_url.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-field">
                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            class="input-field"
                            type="password"
                            required
                            placeholder="Create a password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <ul class="password-hints">
                            {move || {
                                hints()
                                    .into_iter()
                                    .map(|rule| view! { <li class="password-hints__item">{rule.message()}</li> })
                                    .collect_view()
                            }}
                        </ul>
                        <p class="form-field__help">
                            "At least 8 characters with uppercase, lowercase, and a special character"
                        </p>
                    </div>

                    <RecaptchaWidget widget/>

                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating Account..." } else { "Register" }}
                    </button>
                </form>

                <p class="auth-card__switch">
                    "Already have an account? " <a href="/login">"Login here"</a>
                </p>
            </div>
        </div>
    }
}
