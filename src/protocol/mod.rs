//! Text input handling.
//!
//! Parses what the human player types at the prompts of the interactive
//! game.

pub mod parser;

pub use parser::{parse_multiplier, parse_seed, InputError};
