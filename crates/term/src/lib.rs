//! Terminal "game renderer" module.
//!
//! Renders into a simple framebuffer (itself a `Grid2D` of styled cells)
//! that is then flushed to the terminal, instead of going through a widget
//! toolkit.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Allow precise control over aspect ratio (2 chars wide per board cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blocks_core as core;
pub use tui_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
