//! Networking: the single outbound call to the dictionary service.

pub mod api;
