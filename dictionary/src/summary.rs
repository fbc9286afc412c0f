//! Reduction of a response to what the lookup card shows.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use serde::Serialize;

use crate::model::Entry;

/// First-entry view of a response: headword, first pronunciation, first sense.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub word: String,
    /// `phonetics[0].text` of the first entry.
    pub phonetic: Option<String>,
    /// `phonetics[0].audio` of the first entry, only when non-empty.
    pub audio: Option<String>,
    /// `meanings[0].definitions[0].definition` of the first entry.
    pub definition: Option<String>,
}

impl Summary {
    /// Summarize the first entry, or `None` for an empty response.
    #[must_use]
    pub fn from_entries(entries: &[Entry]) -> Option<Self> {
        let entry = entries.first()?;
        let phonetic = entry.phonetics.first();

        Some(Self {
            word: entry.word.clone(),
            phonetic: phonetic.and_then(|p| non_empty(p.text.as_deref())),
            audio: phonetic.and_then(|p| non_empty(p.audio.as_deref())),
            definition: entry
                .meanings
                .first()
                .and_then(|m| m.definitions.first())
                .and_then(|d| non_empty(Some(d.definition.as_str()))),
        })
    }

    /// Playable audio URL with protocol-relative links resolved to `https:`.
    #[must_use]
    pub fn audio_url(&self) -> Option<String> {
        self.audio.as_deref().map(|src| {
            if src.starts_with("//") { format!("https:{src}") } else { src.to_owned() }
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).map(str::to_owned)
}
