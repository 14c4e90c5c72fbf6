//! Top navigation bar: links, theme toggle, and the user menu.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::identity::error::AuthError;
use crate::identity::gateway::IdentityGateway;
use crate::state::auth::SessionState;
use crate::state::toast::{self, ToastState};
use crate::state::ui::UiState;
use crate::util::dark_mode;

const PUBLIC_LINKS: [(&str, &str); 3] =
    [("/", "Home"), ("/explore-gardeners", "Explore Gardeners"), ("/browse-tips", "Browse Tips")];
const PRIVATE_LINKS: [(&str, &str); 2] = [("/share-tip", "Share a Garden Tip"), ("/my-tips", "My Tips")];

const AVATAR_PLACEHOLDER: &str = "https://via.placeholder.com/40";

/// Toast text for a finished logout.
fn logout_message(result: &Result<(), AuthError>) -> &'static str {
    match result {
        Ok(()) => "Logged out successfully!",
        Err(_) => "Failed to logout",
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let gateway = expect_context::<IdentityGateway>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    let signed_in = move || session.get().is_authenticated();
    let display_name = move || session.get().identity.map(|identity| identity.label()).unwrap_or_default();
    let email = move || session.get().email().map(str::to_owned).unwrap_or_default();
    let avatar = move || {
        session
            .get()
            .identity
            .and_then(|identity| identity.photo_url)
            .unwrap_or_else(|| AVATAR_PLACEHOLDER.to_owned())
    };

    let on_logout = Callback::new(move |()| {
        ui.update(UiState::close_menus);
        let gateway = gateway.clone();
        leptos::task::spawn_local(async move {
            let result = gateway.logout().await;
            match &result {
                Ok(()) => toast::success(toasts, logout_message(&result)),
                Err(e) => {
                    log::warn!("navbar: logout failed: {e}");
                    toast::error(toasts, logout_message(&result));
                }
            }
        });
    });

    let on_toggle_theme = move |_: leptos::ev::MouseEvent| {
        let next = dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|state| state.dark_mode = next);
    };

    let link = move |(href, label): (&'static str, &'static str)| {
        view! {
            <a
                href=href
                class="nav-link"
                class:nav-link--active=move || pathname.get() == href
                on:click=move |_| ui.update(UiState::close_menus)
            >
                {label}
            </a>
        }
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a href="/" class="navbar__logo">
                    <span class="navbar__leaf" aria-hidden="true">"\u{1f343}"</span>
                    <span class="navbar__brand">"GardenHub"</span>
                </a>

                <div class="navbar__links" class:navbar__links--open=move || ui.get().mobile_menu_open>
                    {PUBLIC_LINKS.into_iter().map(link).collect_view()}
                    <Show when=signed_in>
                        {PRIVATE_LINKS.into_iter().map(link).collect_view()}
                    </Show>
                </div>

                <div class="navbar__actions">
                    <button class="navbar__theme" aria-label="Toggle theme" on:click=on_toggle_theme>
                        {move || if ui.get().dark_mode { "\u{2600}" } else { "\u{263e}" }}
                    </button>

                    <Show
                        when=signed_in
                        fallback=|| view! {
                            <a href="/login" class="btn btn--primary navbar__login">"Login"</a>
                            <a href="/register" class="btn btn--outline navbar__register">"Register"</a>
                        }
                    >
                        <div class="navbar__user">
                            <button
                                class="navbar__avatar-button"
                                on:click=move |_| ui.update(UiState::toggle_user_menu)
                            >
                                <img class="navbar__avatar" src=avatar alt=display_name/>
                            </button>
                            <Show when=move || ui.get().user_menu_open>
                                <div class="navbar__menu">
                                    <div class="navbar__menu-header">
                                        <p class="navbar__menu-name">{display_name}</p>
                                        <p class="navbar__menu-email">{email}</p>
                                    </div>
                                    <button class="navbar__logout" on:click=move |_| on_logout.run(())>
                                        "Logout"
                                    </button>
                                </div>
                            </Show>
                        </div>
                    </Show>

                    <button
                        class="navbar__burger"
                        aria-label="Toggle menu"
                        on:click=move |_| ui.update(UiState::toggle_mobile_menu)
                    >
                        {move || if ui.get().mobile_menu_open { "\u{2715}" } else { "\u{2630}" }}
                    </button>
                </div>
            </div>
        </nav>
    }
}
