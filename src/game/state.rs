//! Game state representation.
//!
//! Holds the snapshot of a multiplier game at one node of play: the running
//! number, the accumulated points and bank, and whose turn comes next.

use serde::Serialize;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Computer,
    Human,
}

impl Side {
    /// Returns the other side.
    pub const fn opponent(self) -> Side {
        match self {
            Side::Computer => Side::Human,
            Side::Human => Side::Computer,
        }
    }

    /// Returns the display name used in game transcripts.
    pub const fn name(self) -> &'static str {
        match self {
            Side::Computer => "computer",
            Side::Human => "human",
        }
    }
}

/// A multiplier move. No other legal moves exist at any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "u32")]
pub enum Move {
    Three,
    Four,
    Five,
}

/// All moves in the fixed order the search tries them.
pub const ALL_MOVES: [Move; 3] = [Move::Three, Move::Four, Move::Five];

impl Move {
    /// Returns the multiplication factor.
    pub const fn factor(self) -> u32 {
        match self {
            Move::Three => 3,
            Move::Four => 4,
            Move::Five => 5,
        }
    }

    /// Parses a move from its factor.
    pub fn from_factor(factor: u32) -> Option<Move> {
        match factor {
            3 => Some(Move::Three),
            4 => Some(Move::Four),
            5 => Some(Move::Five),
            _ => None,
        }
    }
}

impl From<Move> for u32 {
    fn from(m: Move) -> u32 {
        m.factor()
    }
}

/// Complete game state at one point in time.
///
/// A plain `Copy` value: transitions build a fresh state rather than
/// mutating the old one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    pub number: u32,
    pub total_points: i32,
    pub bank: u32,
    pub side_to_move: Side,
}

impl GameState {
    /// Creates a fresh state with no points and an empty bank.
    pub const fn new(number: u32, side_to_move: Side) -> Self {
        GameState {
            number,
            total_points: 0,
            bank: 0,
            side_to_move,
        }
    }

    /// Rebuilds a state from a live game's running totals.
    pub const fn with_scores(number: u32, total_points: i32, bank: u32, side_to_move: Side) -> Self {
        GameState {
            number,
            total_points,
            bank,
            side_to_move,
        }
    }
}
