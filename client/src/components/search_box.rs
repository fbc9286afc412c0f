//! Search input bound to the live query text.

#[cfg(test)]
#[path = "search_box_test.rs"]
mod search_box_test;

use leptos::prelude::*;

use crate::state::lookup::LookupState;

/// Returns `true` for the keydown that commits the typed word. An Enter that
/// confirms IME composition does not.
fn is_commit_key(key: &str, composing: bool) -> bool {
    key == "Enter" && !composing
}

/// Search box. Typing updates the input only; Enter calls `on_commit`.
#[component]
pub fn SearchBox(on_commit: Callback<()>) -> impl IntoView {
    let lookup = expect_context::<RwSignal<LookupState>>();

    view! {
        <input
            class="search-box"
            type="search"
            placeholder="Enter a word"
            autofocus=true
            prop:value=move || lookup.with(|s| s.input.clone())
            on:input=move |ev| {
                let text = event_target_value(&ev);
                lookup.update(|s| s.set_input(text));
            }
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if is_commit_key(&ev.key(), ev.is_composing()) {
                    ev.prevent_default();
                    on_commit.run(());
                }
            }
        />
    }
}
