#[cfg(test)]
#[path = "lookup_test.rs"]
mod lookup_test;

use dictionary::{Entry, LookupError, Summary, normalize_query};

/// Lookup screen state: live input, committed word, one in-flight request.
///
/// Provided as `RwSignal<LookupState>` context by the root `App`.
#[derive(Clone, Debug, Default)]
pub struct LookupState {
    /// Text currently in the search box.
    pub input: String,
    /// Last committed query. Changes only on Enter.
    pub word: String,
    pub loading: bool,
    pub error: Option<LookupError>,
    /// Last successful response, cleared on error.
    pub response: Option<Vec<Entry>>,
    generation: u64,
}

/// A lookup to run, tagged with the commit that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupRequest {
    pub generation: u64,
    pub word: String,
}

/// What the lookup screen should render, in precedence order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupView {
    Idle,
    Loading,
    Failed(String),
    Found(Summary),
}

impl LookupState {
    pub fn set_input(&mut self, text: String) {
        self.input = text;
    }

    /// Commit the live input as the query (the Enter key).
    ///
    /// Returns the request to issue, or `None` when the input is blank or
    /// names the word already committed. A word whose last lookup failed can
    /// be committed again as a retry.
    pub fn commit(&mut self) -> Option<LookupRequest> {
        let word = normalize_query(&self.input)?;
        if word == self.word && self.error.is_none() {
            return None;
        }

        self.word.clone_from(&word);
        self.loading = true;
        self.error = None;
        self.generation += 1;
        Some(LookupRequest { generation: self.generation, word })
    }

    /// Apply the outcome of a request.
    ///
    /// Returns `false` and leaves state untouched when a newer commit has
    /// superseded `generation`.
    pub fn finish(&mut self, generation: u64, result: Result<Vec<Entry>, LookupError>) -> bool {
        if generation != self.generation {
            return false;
        }

        self.loading = false;
        match result {
            Ok(entries) => {
                self.error = None;
                self.response = Some(entries);
            }
            Err(e) => {
                self.error = Some(e);
                self.response = None;
            }
        }
        true
    }

    #[must_use]
    pub fn view(&self) -> LookupView {
        if self.loading {
            return LookupView::Loading;
        }
        if let Some(error) = &self.error {
            return LookupView::Failed(error.user_message());
        }
        self.response
            .as_deref()
            .and_then(Summary::from_entries)
            .map_or(LookupView::Idle, LookupView::Found)
    }
}
