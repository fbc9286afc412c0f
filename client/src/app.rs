//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::lookup::LookupPage;
use crate::state::lookup::LookupState;

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
/// Provides the lookup state context and the single lookup route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let lookup = RwSignal::new(LookupState::default());
    provide_context(lookup);

    view! {
        <Stylesheet id="leptos" href="/pkg/wordbook.css"/>
        <Title text="Wordbook"/>
        <Meta name="description" content="Look up an English word"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LookupPage/>
            </Routes>
        </Router>
    }
}
