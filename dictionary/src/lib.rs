//! Shared dictionary model for the browser client and the terminal client.
//!
//! This crate owns the representation of the public dictionary service
//! response (`api.dictionaryapi.dev`), the reduction of a response to the
//! first-entry summary the UI renders, and the mapping from HTTP status to
//! user-facing lookup errors. It performs no I/O so both the WASM client and
//! native callers can share it.

pub mod endpoint;
pub mod error;
pub mod model;
pub mod summary;

pub use endpoint::{DEFAULT_API_BASE, entry_url, normalize_query};
pub use error::LookupError;
pub use model::{Definition, Entry, Meaning, Phonetic, ServiceFault, parse_entries};
pub use summary::Summary;
