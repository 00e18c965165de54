//! Game representation and rules.
//!
//! Contains the state snapshot, the move set, and the transition that
//! applies a multiplier to a state.

pub mod rules;
pub mod state;

pub use rules::{apply, is_valid_seed, Rules, MAX_SEED, MIN_SEED, THRESHOLD};
pub use state::{GameState, Move, Side, ALL_MOVES};
