//! Runtime configuration read from environment variables.
//!
//! - `BLOCKS_BOARD_WIDTH`: board columns (default: 10, clamped to 1..=32)
//! - `BLOCKS_BOARD_HEIGHT`: board rows (default: 10, clamped to 1..=32)
//! - `BLOCKS_SEED`: seed for piece draws (default: 1)
//! - `BLOCKS_DEBUG`: any value other than "0" or "false" shows the debug
//!   status line

use crate::types::{BOARD_HEIGHT, BOARD_SIZE_MAX, BOARD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub board_width: usize,
    pub board_height: usize,
    pub seed: u32,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            seed: 1,
            debug: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unparsable values fall back
    /// to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let side = |key: &str, default: usize| {
            lookup(key)
                .and_then(|s| s.trim().parse::<usize>().ok())
                .map(|n| n.clamp(1, BOARD_SIZE_MAX))
                .unwrap_or(default)
        };

        let seed = lookup("BLOCKS_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        // Presence turns debug on; only an explicit "0"/"false" turns it off.
        let debug = lookup("BLOCKS_DEBUG")
            .map(|v| {
                let v = v.trim();
                v != "0" && !v.eq_ignore_ascii_case("false")
            })
            .unwrap_or(defaults.debug);

        Self {
            board_width: side("BLOCKS_BOARD_WIDTH", defaults.board_width),
            board_height: side("BLOCKS_BOARD_HEIGHT", defaults.board_height),
            seed,
            debug,
        }
    }
}
