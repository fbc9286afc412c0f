//! Client-side state.
//!
//! DESIGN
//! ======
//! State transitions are plain methods on plain structs so they can be unit
//! tested without a browser; components wrap them in `RwSignal` context.

pub mod lookup;
