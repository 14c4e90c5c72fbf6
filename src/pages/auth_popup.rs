//! Landing page for the federated sign-in popup.
//!
//! Google redirects the popup here with the result in the URL fragment. The
//! opener reads the fragment and closes the window, so this page only needs
//! to exist on our origin and say something while that happens.

use leptos::prelude::*;

#[component]
pub fn AuthPopupPage() -> impl IntoView {
    view! {
        <div class="auth-popup">
            <p>"Completing sign-in..."</p>
        </div>
    }
}
