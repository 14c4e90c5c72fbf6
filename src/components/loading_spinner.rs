//! Neutral loading indicator.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading-spinner" role="status" aria-live="polite">
            <span class="loading-spinner__ring"></span>
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}
