//! Single-screen word lookup: search box plus the current outcome.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::definition_card::DefinitionCard;
use crate::components::error_banner::ErrorBanner;
use crate::components::loading_skeleton::LoadingSkeleton;
use crate::components::search_box::SearchBox;
use crate::state::lookup::{LookupRequest, LookupState, LookupView};

#[component]
pub fn LookupPage() -> impl IntoView {
    let lookup = expect_context::<RwSignal<LookupState>>();

    let on_commit = Callback::new(move |()| {
        if let Some(request) = lookup.try_update(LookupState::commit).flatten() {
            spawn_lookup(lookup, request);
        }
    });

    // Keystrokes and deduplicated commits touch the state without changing
    // what is rendered.
    let outcome = Memo::new(move |_| lookup.with(LookupState::view));

    view! {
        <main class="lookup-page">
            <SearchBox on_commit=on_commit/>
            {move || match outcome.get() {
                LookupView::Idle => ().into_any(),
                LookupView::Loading => view! { <LoadingSkeleton/> }.into_any(),
                LookupView::Failed(message) => view! { <ErrorBanner message=message/> }.into_any(),
                LookupView::Found(summary) => view! { <DefinitionCard summary=summary/> }.into_any(),
            }}
        </main>
    }
}

/// Run `request` in the background and fold its outcome into `lookup`.
fn spawn_lookup(lookup: RwSignal<LookupState>, request: LookupRequest) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        log::info!("lookup #{} started: {}", request.generation, request.word);
        let result = crate::net::api::fetch_entries(&request.word).await;
        if let Err(e) = &result {
            log::warn!("lookup #{} failed: {e}", request.generation);
        }
        let applied = lookup.try_update(|s| s.finish(request.generation, result)).unwrap_or(false);
        if !applied {
            log::debug!("lookup #{} superseded, result dropped", request.generation);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (lookup, request);
    }
}
