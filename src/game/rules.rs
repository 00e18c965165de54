//! State transition and terminal rules.
//!
//! Multiplying the running number scores one point for an even result and
//! loses one for an odd result. Results ending in 0 or 5 also add one to the
//! bank.

use super::state::{GameState, Move};

/// The number at which the game ends.
pub const THRESHOLD: u32 = 3000;

/// Smallest valid starting number.
pub const MIN_SEED: u32 = 20;

/// Largest valid starting number.
pub const MAX_SEED: u32 = 30;

/// Terminal condition for a game.
///
/// Real play always uses [`Rules::STANDARD`]. A lower threshold truncates
/// the game tree for tests and benchmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub threshold: u32,
}

impl Rules {
    pub const STANDARD: Rules = Rules {
        threshold: THRESHOLD,
    };

    /// Creates rules with a custom terminal threshold.
    pub const fn with_threshold(threshold: u32) -> Self {
        Rules { threshold }
    }

    /// Returns true once the running number has reached the threshold.
    pub const fn is_terminal(&self, state: &GameState) -> bool {
        state.number >= self.threshold
    }
}

impl Default for Rules {
    fn default() -> Self {
        Rules::STANDARD
    }
}

/// Returns true if `n` is a valid starting number.
pub const fn is_valid_seed(n: u32) -> bool {
    n >= MIN_SEED && n <= MAX_SEED
}

/// Applies a move, returning the successor state with the turn passed on.
pub fn apply(state: &GameState, mv: Move) -> GameState {
    let number = state.number * mv.factor();

    // Parity is taken after multiplying.
    let total_points = if number % 2 == 0 {
        state.total_points + 1
    } else {
        state.total_points - 1
    };

    let bank = match number % 10 {
        0 | 5 => state.bank + 1,
        _ => state.bank,
    };

    GameState {
        number,
        total_points,
        bank,
        side_to_move: state.side_to_move.opponent(),
    }
}
