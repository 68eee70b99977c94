//! Core types module - shared constants and actions
//!
//! This module defines the small set of types shared by the core, the input
//! mapping and the terminal view. Everything here is plain data with no
//! external dependencies.
//!
//! # Board Dimensions
//!
//! The default playfield is a 10 x 10 square (Blockudoku style):
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 10 rows (indexed 0-9)
//!
//! Both can be overridden at startup, see `BOARD_SIZE_MAX`.
//!
//! # Examples
//!
//! ```
//! use tui_blocks_types::{GameAction, BOARD_HEIGHT, BOARD_WIDTH, HAND_SIZE};
//!
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//!
//! assert_eq!(GameAction::from_str("select2"), Some(GameAction::Select(1)));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 10);
//! assert_eq!(HAND_SIZE, 3);
//! ```

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Default board height in cells (10 rows)
pub const BOARD_HEIGHT: usize = 10;

/// Upper bound for a configured board side
pub const BOARD_SIZE_MAX: usize = 32;

/// Number of pieces offered to the player at once
pub const HAND_SIZE: usize = 3;

/// Input poll interval in milliseconds for the terminal loop
pub const POLL_MS: u64 = 50;

/// Actions that modify the placement state
///
/// Cursor movement is expressed in board cells. `Select` carries a
/// zero-based hand slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move the cursor one cell left
    MoveLeft,
    /// Move the cursor one cell right
    MoveRight,
    /// Move the cursor one cell up
    MoveUp,
    /// Move the cursor one cell down
    MoveDown,
    /// Select a hand slot (zero-based)
    Select(u8),
    /// Cycle to the next non-empty hand slot
    NextSlot,
    /// Place the selected piece at the cursor
    Place,
    /// Clear the board and draw a new hand
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// Slot selection is written `select1` .. `select3` (one-based).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blocks_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("place"), Some(GameAction::Place));
    /// assert_eq!(GameAction::from_str("SELECT1"), Some(GameAction::Select(0)));
    /// assert_eq!(GameAction::from_str("select0"), None);
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        if let Some(slot) = lower.strip_prefix("select") {
            let n: usize = slot.parse().ok()?;
            if n == 0 || n > HAND_SIZE {
                return None;
            }
            return Some(GameAction::Select((n - 1) as u8));
        }
        match lower.as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "moveup" => Some(GameAction::MoveUp),
            "movedown" => Some(GameAction::MoveDown),
            "nextslot" => Some(GameAction::NextSlot),
            "place" => Some(GameAction::Place),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to a camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::Select(0) => "select1",
            GameAction::Select(1) => "select2",
            GameAction::Select(_) => "select3",
            GameAction::NextSlot => "nextSlot",
            GameAction::Place => "place",
            GameAction::Restart => "restart",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_is_square() {
        assert_eq!(BOARD_WIDTH, BOARD_HEIGHT);
        assert!(BOARD_WIDTH <= BOARD_SIZE_MAX);
    }

    #[test]
    fn action_names_round_trip() {
        let all = [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::MoveUp,
            GameAction::MoveDown,
            GameAction::Select(0),
            GameAction::Select(1),
            GameAction::Select(2),
            GameAction::NextSlot,
            GameAction::Place,
            GameAction::Restart,
        ];
        for action in all {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn select_out_of_hand_is_rejected() {
        assert_eq!(GameAction::from_str("select4"), None);
        assert_eq!(GameAction::from_str("selectx"), None);
    }
}
