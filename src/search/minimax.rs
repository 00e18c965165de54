//! Reference minimax without pruning.
//!
//! Enumerates the full game tree and applies the same move order and tie
//! breaking as the alpha-beta search. Used as an oracle in tests and as the
//! baseline in benchmarks.

use crate::eval::terminal_score;
use crate::game::{apply, GameState, Move, Rules, Side, ALL_MOVES};

/// Returns the best move (None at a terminal state) and the exact minimax
/// score of `state`.
pub fn full_minimax(state: &GameState, rules: &Rules) -> (Option<Move>, i32) {
    if rules.is_terminal(state) {
        return (None, terminal_score(state));
    }

    let mut best: Option<(Move, i32)> = None;
    for mv in ALL_MOVES {
        let (_, score) = full_minimax(&apply(state, mv), rules);
        let better = match best {
            None => true,
            Some((_, b)) => match state.side_to_move {
                Side::Computer => score > b,
                Side::Human => score < b,
            },
        };
        if better {
            best = Some((mv, score));
        }
    }

    match best {
        Some((mv, score)) => (Some(mv), score),
        None => (None, terminal_score(state)),
    }
}

/// Counts every state in the full game tree below and including `state`.
pub fn tree_size(state: &GameState, rules: &Rules) -> u64 {
    if rules.is_terminal(state) {
        return 1;
    }
    1 + ALL_MOVES
        .iter()
        .map(|&mv| tree_size(&apply(state, mv), rules))
        .sum::<u64>()
}
