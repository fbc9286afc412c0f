//! HTTP access to the public dictionary service.
//!
//! Client-side (hydrate): one GET per committed query via `gloo-net`.
//! Server-side (SSR): a stub returning an error since lookups only run in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is folded into a [`LookupError`] so the lookup state can
//! render it without inspecting transport details.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use dictionary::{Entry, LookupError};

/// Dictionary endpoint, overridable at build time via `WORDBOOK_DICTIONARY_API`.
pub const API_BASE: &str = match option_env!("WORDBOOK_DICTIONARY_API") {
    Some(base) => base,
    None => dictionary::DEFAULT_API_BASE,
};

#[cfg(any(test, feature = "hydrate"))]
fn lookup_endpoint(word: &str) -> String {
    dictionary::entry_url(API_BASE, word)
}

/// Fetch all entries for `word`.
///
/// # Errors
///
/// Returns [`LookupError::NotFound`] on 404, [`LookupError::Status`] on any
/// other non-OK status, [`LookupError::Transport`] if no response arrives and
/// [`LookupError::Decode`] if the body is not an entry list.
pub async fn fetch_entries(word: &str) -> Result<Vec<Entry>, LookupError> {
    #[cfg(feature = "hydrate")]
    {
        let url = lookup_endpoint(word);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;
        LookupError::from_status(resp.status(), &resp.status_text())?;
        let body = resp.text().await.map_err(|e| LookupError::Transport(e.to_string()))?;
        dictionary::parse_entries(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = word;
        Err(LookupError::Transport("not available on server".to_owned()))
    }
}
