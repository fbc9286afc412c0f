//! Endpoint construction and query normalization.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

/// English entries endpoint of the public dictionary service.
pub const DEFAULT_API_BASE: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Build the GET URL for one word under `base`.
#[must_use]
pub fn entry_url(base: &str, word: &str) -> String {
    let base = base.trim_end_matches('/');
    format!("{base}/{}", urlencoding::encode(word))
}

/// Trim raw input into a committable query, or `None` if nothing is left.
#[must_use]
pub fn normalize_query(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
