//! Site footer with quick links and copyright.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    // Filled in after hydration so server and client markup agree.
    let year = RwSignal::new(None::<u32>);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let current = js_sys::Date::new_0().get_full_year() as u32;
        year.set(Some(current));
    });

    let copyright = move || match year.get() {
        Some(year) => format!("\u{a9} {year} GardenHub. All rights reserved."),
        None => "\u{a9} GardenHub. All rights reserved.".to_owned(),
    };

    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__brand">
                    <span class="footer__logo">"GardenHub"</span>
                    <p>
                        "A thriving community for gardening enthusiasts to share tips, connect with local gardeners, and grow together."
                    </p>
                </div>
                <nav class="footer__links">
                    <h3>"Quick Links"</h3>
                    <a href="/">"Home"</a>
                    <a href="/explore-gardeners">"Explore Gardeners"</a>
                    <a href="/browse-tips">"Browse Tips"</a>
                    <a href="/share-tip">"Share Tips"</a>
                </nav>
                <div class="footer__contact">
                    <h3>"Contact"</h3>
                    <p>"support@gardenhub.com"</p>
                </div>
            </div>
            <p class="footer__copyright">{copyright}</p>
        </footer>
    }
}
