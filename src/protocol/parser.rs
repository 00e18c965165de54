//! Player input parser.
//!
//! Parses lines typed by the human player into a starting number or a
//! multiplier. Errors carry the message the host shows before prompting
//! again.

use std::num::IntErrorKind;

use crate::game::{is_valid_seed, Move};

/// Errors that can occur while parsing player input. Payloads hold the
/// trimmed input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Please enter a valid integer.")]
    NotAnInteger(String),

    #[error("Invalid input. Choose a number between 20 and 30.")]
    SeedOutOfRange(String),

    #[error("Invalid choice. Choose 3, 4, or 5.")]
    InvalidMultiplier(String),
}

/// Parses a line as an integer, ignoring surrounding whitespace.
///
/// Returns `None` for integers too large to represent, which are still
/// valid integers and so are reported as out of range by the callers.
fn parse_integer(trimmed: &str) -> Result<Option<i64>, InputError> {
    match trimmed.parse::<i64>() {
        Ok(n) => Ok(Some(n)),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Ok(None)
        }
        Err(_) => Err(InputError::NotAnInteger(trimmed.to_string())),
    }
}

/// Parses a starting number in the valid seed range.
pub fn parse_seed(line: &str) -> Result<u32, InputError> {
    let trimmed = line.trim();
    match parse_integer(trimmed)?.and_then(|n| u32::try_from(n).ok()) {
        Some(seed) if is_valid_seed(seed) => Ok(seed),
        _ => Err(InputError::SeedOutOfRange(trimmed.to_string())),
    }
}

/// Parses a multiplier choice.
pub fn parse_multiplier(line: &str) -> Result<Move, InputError> {
    let trimmed = line.trim();
    parse_integer(trimmed)?
        .and_then(|n| u32::try_from(n).ok())
        .and_then(Move::from_factor)
        .ok_or_else(|| InputError::InvalidMultiplier(trimmed.to_string()))
}
