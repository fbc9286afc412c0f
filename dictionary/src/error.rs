//! Lookup failures and their user-facing messages.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Shown when a failure carries no message of its own.
pub const GENERIC_MESSAGE: &str = "An unexpected error occurred.";

/// Error returned for a failed dictionary lookup.
///
/// The `Display` text is what the UI shows to the user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The service answered 404: it has no entry for the word.
    #[error("Word not found. Please check your spelling and try again.")]
    NotFound,
    /// Any other non-success HTTP status.
    #[error("Error: {code} - {reason}")]
    Status { code: u16, reason: String },
    /// The request never produced a response (network, CORS, abort).
    #[error("{0}")]
    Transport(String),
    /// The response body was not the expected JSON shape.
    #[error("Unexpected response from the dictionary service: {0}")]
    Decode(String),
}

impl LookupError {
    /// Classify an HTTP status.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] for 404 and [`LookupError::Status`]
    /// for every other status outside `200..=299`.
    pub fn from_status(code: u16, reason: &str) -> Result<(), Self> {
        match code {
            200..=299 => Ok(()),
            404 => Err(Self::NotFound),
            _ => Err(Self::Status { code, reason: reason.to_owned() }),
        }
    }

    /// Message to render, falling back to [`GENERIC_MESSAGE`] when empty.
    #[must_use]
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() { GENERIC_MESSAGE.to_owned() } else { message }
    }
}
