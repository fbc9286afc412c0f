//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the search box and the three lookup outcomes (loading,
//! error, definition) while reading shared state from Leptos context.

pub mod audio_button;
pub mod definition_card;
pub mod error_banner;
pub mod loading_skeleton;
pub mod search_box;
