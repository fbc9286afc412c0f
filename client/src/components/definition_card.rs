//! Result card for a successful lookup.
//!
//! Renders the headword, the pronunciation button when the first phonetic
//! carries audio, the phonetic text and the first definition. Absent fields
//! render as empty paragraphs so the layout does not jump between words.

use dictionary::Summary;
use leptos::prelude::*;

use crate::components::audio_button::AudioButton;

#[component]
pub fn DefinitionCard(summary: Summary) -> impl IntoView {
    let audio = summary.audio_url();

    view! {
        <section class="meaning">
            <div class="heading">
                <h2>{summary.word}</h2>
                {audio.map(|src| view! { <AudioButton src=src/> })}
            </div>
            <p class="phonetic">{summary.phonetic}</p>
            <p class="description">{summary.definition}</p>
        </section>
    }
}
