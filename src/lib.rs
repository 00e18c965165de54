//! Multiplier game engine library.
//!
//! Exposes the game rules, outcome evaluation, alpha-beta search, session
//! host, input parsing, and self-play modules for use by the binaries,
//! integration tests, and benchmarks.

pub mod engine;
pub mod eval;
pub mod game;
pub mod protocol;
pub mod search;
pub mod selfplay;
