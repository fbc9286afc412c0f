//! Response schema of the dictionary service.
//!
//! DESIGN
//! ======
//! The service is external and unversioned, so every field the UI can live
//! without is optional or defaulted, and an explicit `null` decodes the same
//! as an absent field. Unknown fields (licenses, per-sense metadata) are
//! ignored by serde.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::LookupError;

/// One headword returned by the service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// The headword as spelled by the service.
    #[serde(default, deserialize_with = "null_as_default")]
    pub word: String,
    /// Entry-level phonetic summary; the UI prefers `phonetics[0].text`.
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phonetics: Vec<Phonetic>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meanings: Vec<Meaning>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source_urls: Vec<String>,
}

/// A pronunciation: IPA text and an optional recording.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phonetic {
    #[serde(default)]
    pub text: Option<String>,
    /// Recording URL. The service sends `""` when there is none.
    #[serde(default)]
    pub audio: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

/// Senses grouped under one part of speech.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    #[serde(default)]
    pub part_of_speech: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub definitions: Vec<Definition>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub synonyms: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub antonyms: Vec<String>,
}

/// A single sense.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(default, deserialize_with = "null_as_default")]
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub synonyms: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub antonyms: Vec<String>,
}

/// Body the service sends with a 404.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceFault {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resolution: String,
}

impl ServiceFault {
    /// Best-effort decode; `None` if the body is not a fault object.
    #[must_use]
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

/// Decode a successful response body.
///
/// # Errors
///
/// Returns [`LookupError::Decode`] if the body is not a JSON array of entries.
pub fn parse_entries(body: &str) -> Result<Vec<Entry>, LookupError> {
    serde_json::from_str(body).map_err(|e| LookupError::Decode(e.to_string()))
}

/// Decode `null` or a missing field as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
