//! TUI Blocks (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_blocks::{core,input,term,types}` and
//! hosts the runtime configuration used by the binary.

pub mod config;

pub use tui_blocks_core as core;
pub use tui_blocks_input as input;
pub use tui_blocks_term as term;
pub use tui_blocks_types as types;

pub use config::AppConfig;
