//! Plain-text rendering of a lookup summary.

use dictionary::Summary;

/// Headword on the first line, then indented phonetic, audio and definition
/// lines for whichever of them are present.
pub(crate) fn render_summary(summary: &Summary) -> String {
    let mut out = format!("{}\n", summary.word);
    if let Some(phonetic) = &summary.phonetic {
        out.push_str(&format!("  {phonetic}\n"));
    }
    if let Some(audio) = summary.audio_url() {
        out.push_str(&format!("  audio: {audio}\n"));
    }
    if let Some(definition) = &summary.definition {
        out.push_str(&format!("\n  {definition}\n"));
    }
    out
}

/// Pretty JSON of the summary with the audio link resolved as in the text
/// output.
pub(crate) fn render_json(summary: &Summary) -> Result<String, serde_json::Error> {
    let resolved = Summary { audio: summary.audio_url(), ..summary.clone() };
    serde_json::to_string_pretty(&resolved)
}

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;
