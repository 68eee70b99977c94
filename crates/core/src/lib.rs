//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the grid container, the piece catalog and the
//! placement rules built on them. It has **zero dependencies** on UI or I/O,
//! making it:
//!
//! - **Deterministic**: Same seed deals identical hands
//! - **Testable**: Every operation is a synchronous, in-memory transformation
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: generic row-major `Grid2D<T>` with coordinate-aware iteration
//! - [`pieces`]: the fixed piece catalog (color + occupancy grid)
//! - [`board`]: the playfield and piece placement checks
//! - [`rng`]: deterministic piece draws
//! - [`game_state`]: hand, selection and cursor handling
//!
//! # Example
//!
//! ```
//! use tui_blocks_core::{Board, Grid2D, PieceCatalog};
//!
//! let square = &PieceCatalog::get_all()[0];
//! assert_eq!(square.format, Grid2D::filled(2, 2, true));
//!
//! let mut board = Board::default();
//! assert!(board.place(square, 8, 8));
//! assert!(!board.place(square, 9, 9));
//! assert_eq!(board.occupied_count(), 4);
//! ```
//!
//! # Threading
//!
//! Everything here is single-threaded. The catalog is built once behind a
//! `OnceLock` and is read-only afterwards, so it can be shared freely.

pub mod board;
pub mod game_state;
pub mod grid;
pub mod pieces;
pub mod rng;

pub use tui_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, Hand};
pub use grid::{Coord, Entries, Grid2D, ShapeError};
pub use pieces::{PieceCatalog, PieceData};
pub use rng::{PieceDealer, SimpleRng};
