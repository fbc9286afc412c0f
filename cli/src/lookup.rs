//! One GET against the dictionary service, classified through `dictionary`.

use dictionary::{Entry, LookupError, ServiceFault, Summary, entry_url, parse_entries};

/// Fetch all entries for `word` under `api_base`.
///
/// Transport failures become [`LookupError::Transport`] so the terminal
/// shows the same messages as the browser.
pub(crate) async fn fetch_entries(
    client: &reqwest::Client,
    api_base: &str,
    word: &str,
) -> Result<Vec<Entry>, LookupError> {
    let url = entry_url(api_base, word);
    tracing::debug!(%url, "dictionary lookup");

    let response = client.get(&url).send().await.map_err(transport)?;
    let status = response.status();
    let body = response.text().await.map_err(transport)?;

    if let Err(e) = LookupError::from_status(status.as_u16(), status.canonical_reason().unwrap_or_default()) {
        if let Some(fault) = ServiceFault::parse(&body) {
            tracing::debug!(title = %fault.title, message = %fault.message, "dictionary service fault");
        }
        return Err(e);
    }

    parse_entries(&body)
}

/// Summary of the first entry; an empty list counts as a miss.
pub(crate) fn first_summary(entries: &[Entry]) -> Result<Summary, LookupError> {
    Summary::from_entries(entries).ok_or(LookupError::NotFound)
}

fn transport(e: reqwest::Error) -> LookupError {
    LookupError::Transport(e.to_string())
}

#[cfg(test)]
#[path = "lookup_test.rs"]
mod lookup_test;
