//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::verify::SubmitConfig;
use crate::pages::landing::LandingPage;
use crate::state::modal::ModalState;
use crate::state::nav::NavState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared modal, navigation, and submit contexts.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(ModalState::default()));
    provide_context(RwSignal::new(NavState::default()));
    // No verification backend is wired yet; submits use the simulated round-trip.
    provide_context(SubmitConfig::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/trustsetu.css"/>
        <Title text="TrustSetu X TrustNet"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
            </Routes>
        </Router>
    }
}
