//! Search and planning.
//!
//! Explores the game tree to find the computer's best multiplier, using
//! minimax with alpha-beta pruning over the exact outcome score.

pub mod alphabeta;
pub mod minimax;
pub mod parallel;

pub use alphabeta::{
    choose_move, search, search_root, state_value, Bound, SearchResult, SearchStats, Verdict,
};
pub use minimax::{full_minimax, tree_size};
pub use parallel::parallel_search_root;
