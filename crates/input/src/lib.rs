//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The
//! placement flow is turn based, so there is no DAS/ARR handling: every key
//! press is one action.

pub mod map;

pub use tui_blocks_types as types;

pub use map::{handle_key_event, should_quit};
