//! Fallback for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="not-found__code">"404"</div>
            <h1 class="not-found__title">"Oops! Page Not Found"</h1>
            <p class="not-found__text">
                "Looks like this garden path has wandered off. The page you're looking for doesn't exist or has been moved."
            </p>
            <a class="btn btn--primary" href="/">"Back to Home"</a>
        </div>
    }
}
