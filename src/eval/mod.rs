//! Outcome evaluation.
//!
//! Turns the accumulated points and bank of a finished game into the
//! adjusted final score, the winner, and the signed value the search
//! maximizes.

pub mod score;

pub use score::{evaluate, outcome_for_search, terminal_score, winner};
