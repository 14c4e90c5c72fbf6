//! Directory of every community gardener.

use leptos::prelude::*;

use crate::components::gardener_card::GardenerCard;
use crate::components::loading_spinner::LoadingSpinner;
use crate::config::AppConfig;

#[component]
pub fn ExploreGardenersPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();

    let gardeners = LocalResource::new(move || {
        let base = config.api_url.clone();
        async move {
            crate::net::api::fetch_gardeners(&base).await.unwrap_or_else(|e| {
                log::warn!("explore gardeners: {e}");
                Vec::new()
            })
        }
    });

    view! {
        <div class="page">
            <header class="page__header">
                <h1 class="page__title">"Explore Gardeners"</h1>
                <p class="page__subtitle">"Connect with gardening enthusiasts from our community"</p>
            </header>

            <Suspense fallback=|| view! { <LoadingSpinner/> }>
                {move || {
                    gardeners.get().map(|list| {
                        if list.is_empty() {
                            view! { <p class="empty-state">"No gardeners found."</p> }.into_any()
                        } else {
                            view! {
                                <div class="card-grid">
                                    {list.into_iter().map(|gardener| view! { <GardenerCard gardener/> }).collect_view()}
                                </div>
                            }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
