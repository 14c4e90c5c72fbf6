//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` wires the identity provider, gateway, and session store together and
//! exposes them to every page through Leptos context. The session store is
//! bridged into a `RwSignal<SessionState>` by one observer; components never
//! talk to the store directly.
//!
//! DESIGN
//! ======
//! Provider subscription, session restore, and theme detection only happen in
//! the browser. Server rendering always sees a loading session and the light
//! theme, so protected routes render a spinner until hydration.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::private_route::PrivateRoute;
use crate::components::toaster::Toaster;
use crate::config::AppConfig;
use crate::identity::{self, gateway::IdentityGateway};
use crate::pages::{
    auth_popup::AuthPopupPage, browse_tips::BrowseTipsPage, explore_gardeners::ExploreGardenersPage,
    home::HomePage, login::LoginPage, my_tips::MyTipsPage, not_found::NotFoundPage, register::RegisterPage,
    share_tip::ShareTipPage, tip_details::TipDetailsPage, update_tip::UpdateTipPage,
};
use crate::state::auth::{SessionState, SessionStore};
use crate::state::toast::ToastState;
use crate::state::ui::UiState;
use crate::util::auth::NavigationIntents;
use crate::util::recaptcha;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let challenge = AppConfig::from_build_env().challenge_widget_enabled();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
                {challenge.then(|| view! { <script src=recaptcha::SCRIPT_URL defer></script> })}
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    let provider = identity::provider_for(&config);
    let gateway = IdentityGateway::new(provider.clone());
    let store = SessionStore::new();

    let session = RwSignal::new(SessionState::default());
    let observer = store.subscribe(move |state| {
        let _ = session.try_set(state.clone());
    });

    let ui = RwSignal::new(UiState::default());

    #[cfg(feature = "hydrate")]
    {
        store.initialize(provider.as_ref());
        leptos::task::spawn_local(store.listen());
        leptos::task::spawn_local(async move {
            provider.restore_session().await;
        });

        Effect::new(move || {
            let dark = crate::util::dark_mode::read_preference();
            crate::util::dark_mode::apply(dark);
            ui.update(|state| state.dark_mode = dark);
        });
    }

    let cleanup_store = store.clone();
    on_cleanup(move || {
        cleanup_store.unsubscribe(observer);
        cleanup_store.teardown();
    });

    provide_context(config);
    provide_context(gateway);
    provide_context(store);
    provide_context(session);
    provide_context(ui);
    provide_context(RwSignal::new(ToastState::default()));
    provide_context(RwSignal::new(NavigationIntents::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/gardenhub.css"/>
        <Title text="GardenHub"/>

        <Router>
            <div class="app">
                <Navbar/>
                <Toaster/>
                <main class="app__main">
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route path=StaticSegment("browse-tips") view=BrowseTipsPage/>
                        <Route path=StaticSegment("explore-gardeners") view=ExploreGardenersPage/>
                        <Route path=(StaticSegment("auth"), StaticSegment("popup")) view=AuthPopupPage/>
                        <Route
                            path=StaticSegment("share-tip")
                            view=|| view! { <PrivateRoute><ShareTipPage/></PrivateRoute> }
                        />
                        <Route
                            path=StaticSegment("my-tips")
                            view=|| view! { <PrivateRoute><MyTipsPage/></PrivateRoute> }
                        />
                        <Route
                            path=(StaticSegment("update-tip"), ParamSegment("id"))
                            view=|| view! { <PrivateRoute><UpdateTipPage/></PrivateRoute> }
                        />
                        <Route
                            path=(StaticSegment("tip"), ParamSegment("id"))
                            view=|| view! { <PrivateRoute><TipDetailsPage/></PrivateRoute> }
                        />
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
