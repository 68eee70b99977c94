//! Game state module - placement flow
//!
//! Ties the board, the piece catalog and the dealer together: the player has
//! a hand of `HAND_SIZE` pieces, picks one, moves a cursor over the board and
//! places it. Once every slot of the hand is used a new hand is dealt.
//!
//! Scoring, line clears and game-over detection are not part of this state.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::grid::Coord;
use crate::pieces::{PieceCatalog, PieceData};
use crate::rng::PieceDealer;
use crate::types::{GameAction, HAND_SIZE};

/// Catalog indices offered to the player; `None` once a slot is used
pub type Hand = [Option<usize>; HAND_SIZE];

/// Complete placement state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    hand: Hand,
    /// Selected hand slot
    selected: usize,
    /// Board cell under the selected piece's top-left corner
    cursor: Coord,
    dealer: PieceDealer,
    placed_count: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
}

impl GameState {
    /// Create a new game on a default-sized board
    pub fn new(seed: u32) -> Self {
        Self::with_board(Board::default(), seed)
    }

    /// Create a new game on the given board
    pub fn with_board(board: Board, seed: u32) -> Self {
        let mut dealer = PieceDealer::new(seed, PieceCatalog::len());
        let hand = dealer.deal_hand();

        let mut state = Self {
            board,
            hand,
            selected: 0,
            cursor: (0, 0),
            dealer,
            placed_count: 0,
            episode_id: 0,
        };
        state.select_first_filled();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Selected slot, if it still holds a piece
    pub fn selected(&self) -> Option<usize> {
        self.hand[self.selected].map(|_| self.selected)
    }

    pub fn selected_piece(&self) -> Option<&'static PieceData> {
        self.hand[self.selected].and_then(PieceCatalog::get)
    }

    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    pub fn placed_count(&self) -> u32 {
        self.placed_count
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Slots that still hold a piece, in slot order
    pub fn filled_slots(&self) -> ArrayVec<usize, HAND_SIZE> {
        self.hand
            .iter()
            .enumerate()
            .filter_map(|(slot, piece)| piece.map(|_| slot))
            .collect()
    }

    /// Whether the selected piece can be placed at the cursor
    pub fn preview_fits(&self) -> bool {
        let (x, y) = self.cursor;
        self.selected_piece()
            .map(|piece| self.board.fits(&piece.format, x, y))
            .unwrap_or(false)
    }

    /// Apply a player action. Returns false if it changed nothing.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_cursor(-1, 0),
            GameAction::MoveRight => self.move_cursor(1, 0),
            GameAction::MoveUp => self.move_cursor(0, -1),
            GameAction::MoveDown => self.move_cursor(0, 1),
            GameAction::Select(slot) => self.select(slot as usize),
            GameAction::NextSlot => self.next_slot(),
            GameAction::Place => self.place(),
            GameAction::Restart => {
                let seed = self.dealer.seed();
                let next_episode = self.episode_id.wrapping_add(1);
                let board = Board::new(self.board.width(), self.board.height());
                *self = Self::with_board(board, seed);
                self.episode_id = next_episode;
                true
            }
        }
    }

    /// Move the cursor, keeping the selected piece on the board
    pub fn move_cursor(&mut self, dx: isize, dy: isize) -> bool {
        let (max_x, max_y) = self.cursor_limits();
        let x = self.cursor.0.saturating_add_signed(dx).min(max_x);
        let y = self.cursor.1.saturating_add_signed(dy).min(max_y);
        let moved = (x, y) != self.cursor;
        self.cursor = (x, y);
        moved
    }

    /// Select a hand slot. Fails for empty or out-of-range slots.
    pub fn select(&mut self, slot: usize) -> bool {
        if slot >= HAND_SIZE || self.hand[slot].is_none() {
            return false;
        }
        self.selected = slot;
        self.clamp_cursor();
        true
    }

    /// Cycle to the next slot that still holds a piece
    pub fn next_slot(&mut self) -> bool {
        let filled = self.filled_slots();
        let next = filled
            .iter()
            .copied()
            .find(|&slot| slot > self.selected)
            .or_else(|| filled.first().copied());
        match next {
            Some(slot) if slot != self.selected => self.select(slot),
            _ => false,
        }
    }

    /// Place the selected piece at the cursor
    pub fn place(&mut self) -> bool {
        let Some(piece) = self.selected_piece() else {
            return false;
        };
        let (x, y) = self.cursor;
        if !self.board.place(piece, x, y) {
            return false;
        }

        self.hand[self.selected] = None;
        self.placed_count += 1;
        if self.hand.iter().all(Option::is_none) {
            self.hand = self.dealer.deal_hand();
        }
        self.select_first_filled();
        true
    }

    fn select_first_filled(&mut self) {
        if let Some(&slot) = self.filled_slots().first() {
            self.selected = slot;
        }
        self.clamp_cursor();
    }

    /// Largest cursor position that keeps the selected piece in bounds
    fn cursor_limits(&self) -> Coord {
        let (piece_w, piece_h) = self
            .selected_piece()
            .map(|piece| (piece.width(), piece.height()))
            .unwrap_or((1, 1));
        (
            self.board.width().saturating_sub(piece_w),
            self.board.height().saturating_sub(piece_h),
        )
    }

    fn clamp_cursor(&mut self) {
        let (max_x, max_y) = self.cursor_limits();
        self.cursor = (self.cursor.0.min(max_x), self.cursor.1.min(max_y));
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
