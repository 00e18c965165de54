//! Root-split parallel search.
//!
//! Searches the three root children on the rayon pool. Each child gets the
//! root's own full window, so siblings never prune each other, and results
//! are merged in move order with the sequential tie-break.

use rayon::prelude::*;

use crate::game::{apply, GameState, Move, Rules, Side, ALL_MOVES};
use crate::search::alphabeta::{assert_searchable, value, Bound, SearchResult, SearchStats};

/// Parallel counterpart of [`search_root`](crate::search::search_root).
///
/// Returns the same move and score. Node counts differ because each child is
/// searched without the bound tightened by its earlier siblings.
pub fn parallel_search_root(state: &GameState, rules: &Rules) -> SearchResult {
    assert_searchable(state);
    assert!(
        !rules.is_terminal(state),
        "parallel_search_root called on terminal number {}",
        state.number
    );
    assert_eq!(
        state.side_to_move,
        Side::Computer,
        "parallel_search_root requires the computer to move"
    );

    let children: Vec<(Move, i32, SearchStats)> = ALL_MOVES[..]
        .par_iter()
        .map(|&mv| {
            let mut stats = SearchStats::default();
            let child = apply(state, mv);
            let score = value(&child, rules, Bound::NegInf, Bound::PosInf, 1, &mut stats);
            (mv, score, stats)
        })
        .collect();

    let mut stats = SearchStats {
        nodes: 1,
        ..SearchStats::default()
    };
    // One entry per move in ALL_MOVES, in move order.
    let (mut best, mut score, _) = children[0];
    for (mv, child_score, child_stats) in &children {
        stats.merge(child_stats);
        if *child_score > score {
            best = *mv;
            score = *child_score;
        }
    }

    SearchResult { best, score, stats }
}
