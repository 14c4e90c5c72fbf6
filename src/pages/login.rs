//! Login page: email/password, Google popup, and bot-verification.
//!
//! SYSTEM CONTEXT
//! ==============
//! `PrivateRoute` sends signed-out users here and records where they were
//! going. After a successful sign-in the page waits until the session signal
//! reports the new identity, then consumes that intent and navigates with
//! `replace`. Navigating earlier would let the guard see the stale signed-out
//! state and bounce straight back to `/login`.
//!
//! ERROR HANDLING
//! ==============
//! Every failed attempt ends in exactly one error toast and a widget reset.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::recaptcha::RecaptchaWidget;
use crate::config::AppConfig;
use crate::identity::error::AuthError;
use crate::identity::gateway::IdentityGateway;
use crate::identity::types::Credentials;
use crate::state::auth::SessionState;
use crate::state::toast::{self, ToastState};
use crate::util::auth::{DEFAULT_LANDING_PATH, LOGIN_PATH, NavigationIntents};
use crate::util::recaptcha::{self, WidgetId};

const LOGIN_FALLBACK: &str = "Login failed. Please try again.";
const GOOGLE_FALLBACK: &str = "Google login failed. Please try again.";

/// Toast text for a failed credential login.
fn login_failure_message(err: &AuthError) -> String {
    err.user_message(LOGIN_FALLBACK)
}

/// Toast text for a failed Google login. Only the missing challenge gets a
/// specific message; popup and provider failures share one.
fn google_failure_message(err: &AuthError) -> String {
    match err {
        AuthError::ChallengeNotCompleted => err.to_string(),
        _ => GOOGLE_FALLBACK.to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let gateway = expect_context::<IdentityGateway>();
    let session = expect_context::<RwSignal<SessionState>>();
    let intents = expect_context::<RwSignal<NavigationIntents>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let signed_in = RwSignal::new(false);
    let widget = RwSignal::new(None::<WidgetId>);

    Effect::new(move || {
        if !signed_in.get() || !session.get().is_authenticated() {
            return;
        }
        signed_in.set(false);
        let destination = intents
            .try_update(|pending| pending.take_destination(LOGIN_PATH))
            .unwrap_or_else(|| DEFAULT_LANDING_PATH.to_owned());
        log::debug!("login: continuing to {destination}");
        navigate(&destination, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });

    on_cleanup(move || {
        let _ = intents.try_update(NavigationIntents::discard);
    });

    let finish = move |result: Result<(), String>| {
        match result {
            Ok(()) => {
                toast::success(toasts, "Login successful!");
                let _ = signed_in.try_set(true);
            }
            Err(message) => toast::error(toasts, message),
        }
        recaptcha::reset(widget.get_untracked());
        let _ = busy.try_set(false);
    };

    let login_gateway = gateway.clone();
    let login_config = config.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let credentials = Credentials { email: email.get_untracked(), password: password.get_untracked() };
        let challenge = recaptcha::challenge_token(&login_config, widget.get_untracked());
        let gateway = login_gateway.clone();
        leptos::task::spawn_local(async move {
            let result = gateway.login(credentials, &challenge).await;
            finish(result.map(|_| ()).map_err(|e| login_failure_message(&e)));
        });
    };

    let on_google = move |_: leptos::ev::MouseEvent| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let challenge = recaptcha::challenge_token(&config, widget.get_untracked());
        let gateway = gateway.clone();
        leptos::task::spawn_local(async move {
            let result = gateway.login_with_federated_provider(&challenge).await;
            finish(result.map(|_| ()).map_err(|e| google_failure_message(&e)));
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__header">
                    <h1 class="auth-card__title">"Welcome Back!"</h1>
                    <p class="auth-card__subtitle">"Login to your account"</p>
                </div>

                <form class="auth-form" on:submit=on_submit>
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
                        <label for="password">"Password"</label>
                        <div class="password-field">
                            <input
                                id="password"
                                class="input-field"
                                type=move || if show_password.get() { "text" } else { "password" }
                                required
                                placeholder="Enter your password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="password-field__toggle"
                                on:click=move |_| show_password.update(|shown| *shown = !*shown)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </div>

                    <RecaptchaWidget widget/>

                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>

                <div class="auth-card__divider"><span>"OR"</span></div>

                <button class="btn btn--outline btn--block" on:click=on_google disabled=move || busy.get()>
                    "Continue with Google"
                </button>

                <p class="auth-card__switch">
                    "Don't have an account? " <a href="/register">"Register here"</a>
                </p>
            </div>
        </div>
    }
}
