//! Final score adjustment and outcome scoring.
//!
//! At the end of the game the bank is subtracted from an even point total
//! and added to an odd one. An odd adjusted score is a computer win.

use crate::game::{GameState, Side};

/// Combines accumulated points and bank into the adjusted final score.
pub fn evaluate(total_points: i32, bank: u32) -> i32 {
    let bank = bank as i32;
    if total_points % 2 == 0 {
        total_points - bank
    } else {
        total_points + bank
    }
}

/// Maps a final score onto the search objective, where larger is better for
/// the computer.
///
/// Odd scores (computer wins) keep their value. Even scores (human wins) are
/// negated.
pub fn outcome_for_search(final_score: i32) -> i32 {
    if final_score % 2 != 0 {
        final_score
    } else {
        -final_score
    }
}

/// Returns the side that wins with this adjusted final score.
pub fn winner(final_score: i32) -> Side {
    if final_score % 2 != 0 {
        Side::Computer
    } else {
        Side::Human
    }
}

/// Search score of a terminal state. Independent of the side to move.
pub fn terminal_score(state: &GameState) -> i32 {
    outcome_for_search(evaluate(state.total_points, state.bank))
}
