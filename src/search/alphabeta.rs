//! Minimax search with alpha-beta pruning.
//!
//! The computer maximizes the signed outcome score and the human minimizes
//! it. Moves are always tried in the order 3, 4, 5, and the first move to
//! reach the best score keeps it. The tree is shallow (the running number at
//! least triples every ply), so the search runs to terminal states with no
//! depth limit or transposition table.

use crate::eval::terminal_score;
use crate::game::{apply, GameState, Move, Rules, Side, ALL_MOVES, THRESHOLD};

/// An alpha or beta bound. `NegInf` and `PosInf` stand for "no bound yet".
///
/// The derived ordering puts `NegInf` below every finite score and `PosInf`
/// above every finite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bound {
    NegInf,
    Finite(i32),
    PosInf,
}

/// Result of [`search`]: a move at the root, a score anywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Move(Move),
    Score(i32),
}

impl Verdict {
    pub fn best_move(self) -> Option<Move> {
        match self {
            Verdict::Move(m) => Some(m),
            Verdict::Score(_) => None,
        }
    }

    pub fn score(self) -> Option<i32> {
        match self {
            Verdict::Move(_) => None,
            Verdict::Score(s) => Some(s),
        }
    }
}

/// Counters collected while searching. They never affect the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States visited, the root included.
    pub nodes: u64,
    /// Sibling moves skipped by pruning.
    pub cutoffs: u64,
    /// Deepest ply reached below the root.
    pub max_depth: u32,
}

impl SearchStats {
    pub(crate) fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.cutoffs += other.cutoffs;
        self.max_depth = self.max_depth.max(other.max_depth);
    }
}

/// Result of a root search: the chosen move and associated info.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best: Move,
    pub score: i32,
    pub stats: SearchStats,
}

impl SearchResult {
    /// Formats the search statistics as a single `info` line.
    pub fn info_line(&self) -> String {
        format!(
            "info depth {} nodes {} cutoffs {} score {} bestmove {}",
            self.stats.max_depth,
            self.stats.nodes,
            self.stats.cutoffs,
            self.score,
            self.best.factor()
        )
    }
}

/// Panics unless every move strictly grows the running number. A zero
/// number never reaches the threshold, so its tree would be unbounded.
pub(crate) fn assert_searchable(state: &GameState) {
    assert!(
        state.number > 0,
        "cannot search from number 0: the game would never end"
    );
}

/// Searches `state` within the window (`alpha`, `beta`).
///
/// At a non-terminal root with the computer to move this returns the best
/// move. Otherwise it returns the minimax score of the state. The result
/// depends only on the arguments; `stats` is written to but never read.
pub fn search(
    state: &GameState,
    rules: &Rules,
    is_root: bool,
    alpha: Bound,
    beta: Bound,
    stats: &mut SearchStats,
) -> Verdict {
    assert_searchable(state);
    if is_root && state.side_to_move == Side::Computer && !rules.is_terminal(state) {
        stats.nodes += 1;
        let (best, _) = maximize(state, rules, alpha, beta, 0, stats);
        return Verdict::Move(best);
    }
    Verdict::Score(value(state, rules, alpha, beta, 0, stats))
}

/// Runs a full-window search from a computer-to-move root.
///
/// Panics if the state is terminal, its number is zero, or it is not the
/// computer's turn.
pub fn search_root(state: &GameState, rules: &Rules) -> SearchResult {
    assert_searchable(state);
    assert!(
        !rules.is_terminal(state),
        "search_root called on terminal number {}",
        state.number
    );
    assert_eq!(
        state.side_to_move,
        Side::Computer,
        "search_root requires the computer to move"
    );

    let mut stats = SearchStats {
        nodes: 1,
        ..SearchStats::default()
    };
    let (best, score) = maximize(state, rules, Bound::NegInf, Bound::PosInf, 0, &mut stats);
    SearchResult { best, score, stats }
}

/// Picks the computer's move for a live game under the standard rules.
///
/// Panics if `current_number` is zero or has already reached the threshold.
pub fn choose_move(current_number: u32, total_points: i32, bank: u32) -> Move {
    assert!(
        current_number > 0,
        "choose_move called with number 0"
    );
    assert!(
        current_number < THRESHOLD,
        "choose_move called on finished game (number {})",
        current_number
    );
    let root = GameState::with_scores(current_number, total_points, bank, Side::Computer);
    search_root(&root, &Rules::STANDARD).best
}

/// Exact minimax value of `state` for either side to move.
pub fn state_value(state: &GameState, rules: &Rules) -> i32 {
    assert_searchable(state);
    let mut stats = SearchStats::default();
    value(state, rules, Bound::NegInf, Bound::PosInf, 0, &mut stats)
}

/// Scores a state at `ply` below the root.
pub(crate) fn value(
    state: &GameState,
    rules: &Rules,
    alpha: Bound,
    beta: Bound,
    ply: u32,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;
    stats.max_depth = stats.max_depth.max(ply);

    if rules.is_terminal(state) {
        return terminal_score(state);
    }

    match state.side_to_move {
        Side::Computer => maximize(state, rules, alpha, beta, ply, stats).1,
        Side::Human => minimize(state, rules, alpha, beta, ply, stats),
    }
}

/// Maximizing node. Returns the best move and its score.
fn maximize(
    state: &GameState,
    rules: &Rules,
    mut alpha: Bound,
    beta: Bound,
    ply: u32,
    stats: &mut SearchStats,
) -> (Move, i32) {
    let mut best_move = ALL_MOVES[0];
    let mut best_score = value(&apply(state, best_move), rules, alpha, beta, ply + 1, stats);
    alpha = alpha.max(Bound::Finite(best_score));

    for (i, &mv) in ALL_MOVES.iter().enumerate().skip(1) {
        if beta <= alpha {
            stats.cutoffs += (ALL_MOVES.len() - i) as u64;
            break;
        }
        let score = value(&apply(state, mv), rules, alpha, beta, ply + 1, stats);
        if score > best_score {
            best_score = score;
            best_move = mv;
        }
        alpha = alpha.max(Bound::Finite(best_score));
    }

    (best_move, best_score)
}

/// Minimizing node. Returns the lowest score found.
fn minimize(
    state: &GameState,
    rules: &Rules,
    alpha: Bound,
    mut beta: Bound,
    ply: u32,
    stats: &mut SearchStats,
) -> i32 {
    let mut best_score = value(&apply(state, ALL_MOVES[0]), rules, alpha, beta, ply + 1, stats);
    beta = beta.min(Bound::Finite(best_score));

    for (i, &mv) in ALL_MOVES.iter().enumerate().skip(1) {
        if beta <= alpha {
            stats.cutoffs += (ALL_MOVES.len() - i) as u64;
            break;
        }
        let score = value(&apply(state, mv), rules, alpha, beta, ply + 1, stats);
        best_score = best_score.min(score);
        beta = beta.min(Bound::Finite(best_score));
    }

    best_score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{MAX_SEED, MIN_SEED};
    use crate::search::minimax::full_minimax;

    #[test]
    fn bound_ordering() {
        assert!(Bound::NegInf < Bound::Finite(i32::MIN));
        assert!(Bound::Finite(i32::MAX) < Bound::PosInf);
        assert!(Bound::Finite(-3) < Bound::Finite(2));
        assert_eq!(Bound::NegInf.max(Bound::Finite(0)), Bound::Finite(0));
        assert_eq!(Bound::PosInf.min(Bound::Finite(0)), Bound::Finite(0));
    }

    #[test]
    fn terminal_root_returns_score() {
        let state = GameState::with_scores(3000, 4, 2, Side::Computer);
        let mut stats = SearchStats::default();
        let verdict = search(
            &state,
            &Rules::STANDARD,
            true,
            Bound::NegInf,
            Bound::PosInf,
            &mut stats,
        );
        assert_eq!(verdict, Verdict::Score(-2));
    }

    #[test]
    fn human_root_returns_score() {
        let state = GameState::new(20, Side::Human);
        let mut stats = SearchStats::default();
        let verdict = search(
            &state,
            &Rules::STANDARD,
            true,
            Bound::NegInf,
            Bound::PosInf,
            &mut stats,
        );
        assert!(verdict.score().is_some());
        assert_eq!(verdict.best_move(), None);
    }

    #[test]
    fn computer_root_returns_move() {
        let state = GameState::new(20, Side::Computer);
        let mut stats = SearchStats::default();
        let verdict = search(
            &state,
            &Rules::STANDARD,
            true,
            Bound::NegInf,
            Bound::PosInf,
            &mut stats,
        );
        assert_eq!(verdict.best_move(), Some(search_root(&state, &Rules::STANDARD).best));
    }

    #[test]
    fn one_ply_from_terminal_picks_best_outcome() {
        // 1000 * 3 = 3000 (+1 point, +1 bank) -> evaluate(1, 1) = 2 -> -2
        // 1000 * 4 = 4000 (+1 point, +1 bank) -> -2
        // 1000 * 5 = 5000 (+1 point, +1 bank) -> -2
        // All tie, so the smallest multiplier wins.
        let state = GameState::new(1000, Side::Computer);
        let result = search_root(&state, &Rules::STANDARD);
        assert_eq!(result.best, Move::Three);
        assert_eq!(result.score, -2);
    }

    #[test]
    fn mixed_depth_children_match_oracle() {
        // From 601 only *5 (3005) is terminal; *3 and *4 continue another ply.
        let rules = Rules::STANDARD;
        let state = GameState::new(601, Side::Computer);
        let result = search_root(&state, &rules);
        let (oracle_move, oracle_score) = full_minimax(&state, &rules);
        assert_eq!(Some(result.best), oracle_move);
        assert_eq!(result.score, oracle_score);
    }

    #[test]
    fn picks_highest_outcome_one_ply() {
        // With threshold 2 every child is terminal immediately. Moves from 1:
        //   *3 = 3 (odd: -1 point) -> evaluate(-1, 0) = -1 -> -1
        //   *4 = 4 (even: +1)      -> evaluate(1, 0) = 1  -> 1
        //   *5 = 5 (odd: -1, bank) -> evaluate(-1, 1) = 0 -> 0
        let rules = Rules::with_threshold(2);
        let state = GameState::new(1, Side::Computer);
        assert_eq!(search_root(&state, &rules).best, Move::Four);

        // Points 1: *3 -> evaluate(0,0)=0 -> 0; *4 -> evaluate(2,0)=2 -> -2;
        // *5 -> evaluate(0,1) = -1 -> -1. Best is *3.
        let state = GameState::with_scores(1, 1, 0, Side::Computer);
        assert_eq!(search_root(&state, &rules).best, Move::Three);

        // Points 2, so *3 -> evaluate(1,0)=1 and *5 -> evaluate(1,1)=2 -> -2.
        // *4 -> evaluate(3,0)=3 -> 3 is best.
        let state = GameState::with_scores(1, 2, 0, Side::Computer);
        assert_eq!(search_root(&state, &rules).best, Move::Four);
    }

    #[test]
    fn equal_scores_choose_three() {
        // From 2 with threshold 3 every child is terminal:
        //   6 (even, +1), 8 (even, +1), 10 (even, +1, bank +1).
        // Points 0: *3 and *4 -> evaluate(1, 0) = 1; *5 -> evaluate(1, 1) = 2 -> -2.
        let rules = Rules::with_threshold(3);
        let state = GameState::new(2, Side::Computer);
        let result = search_root(&state, &rules);
        assert_eq!(result.best, Move::Three);
        assert_eq!(result.score, 1);
    }

    #[test]
    fn pruning_matches_full_tree_on_truncated_game() {
        let rules = Rules::with_threshold(100);
        for seed in MIN_SEED..=MAX_SEED {
            for side in [Side::Computer, Side::Human] {
                let state = GameState::new(seed, side);
                let (_, oracle) = full_minimax(&state, &rules);
                assert_eq!(state_value(&state, &rules), oracle, "seed {} {:?}", seed, side);
            }
        }
    }

    #[test]
    fn search_is_deterministic() {
        let state = GameState::new(23, Side::Computer);
        let a = search_root(&state, &Rules::STANDARD);
        let b = search_root(&state, &Rules::STANDARD);
        assert_eq!(a, b);
    }

    #[test]
    fn seed_bounds_terminate_within_five_plies() {
        for seed in [MIN_SEED, MAX_SEED] {
            let state = GameState::new(seed, Side::Computer);
            let result = search_root(&state, &Rules::STANDARD);
            assert!(result.stats.max_depth <= 5, "depth {}", result.stats.max_depth);
            assert!(result.stats.nodes > 1);
        }
    }

    #[test]
    fn full_game_from_twenty() {
        let result = choose_move(20, 0, 0);
        assert!(ALL_MOVES.contains(&result));
        let before = GameState::new(20, Side::Computer);
        let after = apply(&before, result);
        assert!(after.number > before.number);
    }

    #[test]
    fn choose_move_matches_search_root() {
        let state = GameState::with_scores(150, -1, 1, Side::Computer);
        assert_eq!(
            choose_move(150, -1, 1),
            search_root(&state, &Rules::STANDARD).best
        );
    }

    #[test]
    #[should_panic]
    fn choose_move_rejects_finished_game() {
        choose_move(3000, 0, 0);
    }

    #[test]
    #[should_panic(expected = "choose_move called with number 0")]
    fn choose_move_rejects_zero_number() {
        choose_move(0, 0, 0);
    }

    #[test]
    #[should_panic(expected = "cannot search from number 0")]
    fn search_root_rejects_zero_number() {
        search_root(&GameState::new(0, Side::Computer), &Rules::STANDARD);
    }

    #[test]
    #[should_panic(expected = "cannot search from number 0")]
    fn state_value_rejects_zero_number() {
        state_value(&GameState::new(0, Side::Human), &Rules::STANDARD);
    }

    #[test]
    fn pruning_skips_work() {
        let rules = Rules::STANDARD;
        let state = GameState::new(20, Side::Computer);
        let result = search_root(&state, &rules);
        assert!(result.stats.cutoffs > 0);
    }

    #[test]
    fn info_line_format() {
        let state = GameState::new(1000, Side::Computer);
        let line = search_root(&state, &Rules::STANDARD).info_line();
        assert!(line.starts_with("info depth 1 nodes 4 "), "{}", line);
        assert!(line.ends_with("bestmove 3"), "{}", line);
    }
}
