//! Game session management.
//!
//! Holds the live game between turns: the running state, whose turn it is,
//! and the moves played so far. Asks the search for the computer's move and
//! writes the transcript lines of the interactive game.

use std::io::Write;

use crate::eval::{evaluate, winner};
use crate::game::{apply, is_valid_seed, GameState, Move, Rules, Side};
use crate::search::{choose_move, search_root, SearchResult};

/// Errors returned by session operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("starting number {0} is outside 20..=30")]
    SeedOutOfRange(u32),

    #[error("the game is already over")]
    GameOver,

    #[error("the game is still in progress")]
    InProgress,

    #[error("it is the {}'s turn", .0.name())]
    NotYourTurn(Side),
}

/// Final result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub final_number: u32,
    /// Points before the bank adjustment.
    pub total_points: i32,
    pub bank: u32,
    /// Points after the bank adjustment.
    pub final_score: i32,
    pub winner: Side,
}

impl GameOutcome {
    /// Writes the end-of-game summary.
    pub fn write<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Game Over! Final Number: {}", self.final_number)?;
        writeln!(out, "Total Points before bank adjustment: {}", self.total_points)?;
        writeln!(out, "Game Bank: {}", self.bank)?;
        writeln!(out, "Final Total Points: {}", self.final_score)?;
        match self.winner {
            Side::Human => writeln!(out, "The human player wins!")?,
            Side::Computer => writeln!(out, "The computer wins!")?,
        }
        out.flush()
    }
}

/// A game in progress. Always played under [`Rules::STANDARD`], the rules
/// [`choose_move`] searches with.
pub struct Game {
    state: GameState,
    history: Vec<(Side, Move)>,
}

impl Game {
    /// Starts a game from `seed` with `first` to move.
    pub fn new(seed: u32, first: Side) -> Result<Self, GameError> {
        if !is_valid_seed(seed) {
            return Err(GameError::SeedOutOfRange(seed));
        }
        Ok(Game {
            state: GameState::new(seed, first),
            history: Vec::new(),
        })
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Side {
        self.state.side_to_move
    }

    /// Returns the moves played so far, in order.
    pub fn history(&self) -> &[(Side, Move)] {
        &self.history
    }

    pub fn is_over(&self) -> bool {
        Rules::STANDARD.is_terminal(&self.state)
    }

    /// Plays `mv` for `side`. Returns the new state.
    pub fn play(&mut self, side: Side, mv: Move) -> Result<GameState, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if side != self.state.side_to_move {
            return Err(GameError::NotYourTurn(self.state.side_to_move));
        }
        self.state = apply(&self.state, mv);
        self.history.push((side, mv));
        Ok(self.state)
    }

    /// Chooses and plays the computer's move.
    pub fn computer_move(&mut self) -> Result<Move, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.state.side_to_move != Side::Computer {
            return Err(GameError::NotYourTurn(self.state.side_to_move));
        }
        let mv = choose_move(self.state.number, self.state.total_points, self.state.bank);
        self.play(Side::Computer, mv)?;
        Ok(mv)
    }

    /// Returns the search result for the current state, if the computer is
    /// to move in a live game.
    pub fn analyze(&self) -> Option<SearchResult> {
        if self.is_over() || self.state.side_to_move != Side::Computer {
            return None;
        }
        Some(search_root(&self.state, &Rules::STANDARD))
    }

    /// Returns the final result once the threshold is reached.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.is_over() {
            return None;
        }
        let final_score = evaluate(self.state.total_points, self.state.bank);
        Some(GameOutcome {
            final_number: self.state.number,
            total_points: self.state.total_points,
            bank: self.state.bank,
            final_score,
            winner: winner(final_score),
        })
    }

    /// Writes the status block shown before each turn.
    pub fn write_status<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Current number: {}", self.state.number)?;
        writeln!(
            out,
            "Total Points: {}, Game Bank: {}",
            self.state.total_points, self.state.bank
        )?;
        out.flush()
    }
}
