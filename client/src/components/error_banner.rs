use leptos::prelude::*;

/// Lookup failure message.
#[component]
pub fn ErrorBanner(message: String) -> impl IntoView {
    view! {
        <div class="error" role="alert">
            {message}
        </div>
    }
}
