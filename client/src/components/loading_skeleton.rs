//! Placeholder bars shown while a lookup is in flight.

use leptos::prelude::*;

#[component]
pub fn LoadingSkeleton() -> impl IntoView {
    view! {
        <div class="loading" aria-busy="true">
            <div class="skeleton-word"></div>
            <div class="skeleton-phonetic"></div>
            <div class="description">
                <div class="skeleton-description"></div>
                <div class="skeleton-description"></div>
            </div>
        </div>
    }
}
