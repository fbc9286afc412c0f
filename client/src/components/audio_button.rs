//! Pronunciation playback.
//!
//! The `<audio>` element is never shown; the speaker icon drives it. Playback
//! is fire-and-forget: a rejected play (autoplay policy, unreachable clip) is
//! logged and otherwise ignored.

use leptos::prelude::*;

/// Hidden audio element plus a clickable speaker icon.
#[component]
pub fn AudioButton(src: String) -> impl IntoView {
    let audio_ref = NodeRef::<leptos::html::Audio>::new();

    view! {
        <div class="audio">
            <audio node_ref=audio_ref src=src></audio>
            <button
                type="button"
                class="icon"
                aria-label="Play pronunciation"
                on:click=move |_| play(audio_ref)
            >
                <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" fill="currentColor" viewBox="0 0 256 256">
                    <path d="M157.27,21.22a12,12,0,0,0-12.64,1.31L75.88,76H32A20,20,0,0,0,12,96v64a20,20,0,0,0,20,20H75.88l68.75,53.47A12,12,0,0,0,164,224V32A12,12,0,0,0,157.27,21.22ZM36,100H68v56H36Zm104,99.46L92,162.13V93.87l48-37.33ZM212,128a44,44,0,0,1-11,29.11,12,12,0,1,1-18-15.88,20,20,0,0,0,0-26.43,12,12,0,0,1,18-15.86A43.94,43.94,0,0,1,212,128Zm40,0a83.87,83.87,0,0,1-21.39,56,12,12,0,0,1-17.89-16,60,60,0,0,0,0-80,12,12,0,1,1,17.88-16A83.87,83.87,0,0,1,252,128Z"></path>
                </svg>
            </button>
        </div>
    }
}

/// Play the clip if the element is mounted.
fn play(audio_ref: NodeRef<leptos::html::Audio>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(audio) = audio_ref.get_untracked() else {
            return;
        };
        match audio.play() {
            Ok(promise) => {
                leptos::task::spawn_local(async move {
                    if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                        log::warn!("pronunciation playback rejected: {e:?}");
                    }
                });
            }
            Err(e) => log::warn!("pronunciation playback failed: {e:?}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = audio_ref;
    }
}
