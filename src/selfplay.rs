//! Self-play game generation.
//!
//! Plays complete games between the search-driven computer and a stand-in
//! for the human player, recording every ply. Used to measure how often the
//! computer wins from random seeds against different opponents.

use std::io::Write;
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::engine::{Game, GameError};
use crate::game::{apply, GameState, Move, Rules, Side, ALL_MOVES, MAX_SEED, MIN_SEED};
use crate::search::state_value;

/// How the human seat chooses its moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    /// Uniformly random multiplier.
    Random,
    /// Perfect minimizing play.
    Optimal,
}

impl Opponent {
    pub fn from_name(name: &str) -> Option<Opponent> {
        match name {
            "random" => Some(Opponent::Random),
            "optimal" => Some(Opponent::Optimal),
            _ => None,
        }
    }
}

/// Configuration for self-play game generation.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Policy for the human seat.
    pub opponent: Opponent,
    /// Side that makes the first move.
    pub first: Side,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 100,
            seed: 0,
            opponent: Opponent::Random,
            first: Side::Human,
            quiet: false,
        }
    }
}

/// A single recorded ply.
#[derive(Debug, Clone, Serialize)]
pub struct PlyRecord {
    pub side: Side,
    pub multiplier: Move,
    /// Running totals after the move.
    pub number: u32,
    pub total_points: i32,
    pub bank: u32,
}

/// A complete self-play game record.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub game_id: usize,
    pub seed: u32,
    pub first: Side,
    pub opponent: Opponent,
    pub plies: Vec<PlyRecord>,
    pub final_number: u32,
    pub total_points: i32,
    pub bank: u32,
    pub final_score: i32,
    pub winner: Side,
}

/// Picks the move that minimizes the computer's best achievable score.
/// Ties go to the smallest multiplier.
pub fn optimal_human_move(state: &GameState) -> Move {
    let rules = Rules::STANDARD;
    let mut best_move = ALL_MOVES[0];
    let mut best_score = state_value(&apply(state, best_move), &rules);
    for &mv in &ALL_MOVES[1..] {
        let score = state_value(&apply(state, mv), &rules);
        if score < best_score {
            best_score = score;
            best_move = mv;
        }
    }
    best_move
}

fn opponent_move<R: Rng>(opponent: Opponent, state: &GameState, rng: &mut R) -> Move {
    match opponent {
        Opponent::Random => ALL_MOVES[rng.gen_range(0..ALL_MOVES.len())],
        Opponent::Optimal => optimal_human_move(state),
    }
}

/// Plays one full game from a random seed.
pub fn play_game<R: Rng>(
    config: &SelfPlayConfig,
    game_id: usize,
    rng: &mut R,
) -> Result<GameRecord, GameError> {
    let seed = rng.gen_range(MIN_SEED..=MAX_SEED);
    let mut game = Game::new(seed, config.first)?;
    let mut plies = Vec::new();

    while !game.is_over() {
        let side = game.turn();
        let mv = match side {
            Side::Computer => game.computer_move()?,
            Side::Human => {
                let mv = opponent_move(config.opponent, game.state(), rng);
                game.play(Side::Human, mv)?;
                mv
            }
        };
        let state = game.state();
        plies.push(PlyRecord {
            side,
            multiplier: mv,
            number: state.number,
            total_points: state.total_points,
            bank: state.bank,
        });
    }

    let outcome = game.outcome().ok_or(GameError::InProgress)?;
    Ok(GameRecord {
        game_id,
        seed,
        first: config.first,
        opponent: config.opponent,
        plies,
        final_number: outcome.final_number,
        total_points: outcome.total_points,
        bank: outcome.bank,
        final_score: outcome.final_score,
        winner: outcome.winner,
    })
}

fn make_rng(seed: u64, game_id: usize) -> SmallRng {
    if seed != 0 {
        SmallRng::seed_from_u64(seed.wrapping_add(game_id as u64))
    } else {
        SmallRng::from_entropy()
    }
}

/// Runs self-play generation, producing multiple game records.
pub fn run_self_play(config: &SelfPlayConfig) -> Vec<GameRecord> {
    let mut games = Vec::with_capacity(config.num_games);
    run_self_play_with_callback(config, |game| {
        games.push(game);
    });
    games
}

/// Runs self-play generation, calling `on_game` with each completed game.
///
/// Games are played one at a time, in `game_id` order, so the caller can
/// process them incrementally (e.g. write to disk).
pub fn run_self_play_with_callback<F>(config: &SelfPlayConfig, mut on_game: F)
where
    F: FnMut(GameRecord),
{
    for i in 0..config.num_games {
        let mut rng = make_rng(config.seed, i);
        let start = Instant::now();
        let result = play_game(config, i, &mut rng);
        report(config, i + 1, &result, start);
        if let Ok(game) = result {
            on_game(game);
        }
    }
}

fn report(config: &SelfPlayConfig, n: usize, result: &Result<GameRecord, GameError>, start: Instant) {
    if config.quiet {
        return;
    }
    match result {
        Ok(game) => eprintln!(
            "Game {}/{}: {} wins from {} in {} plies ({:.1}ms)",
            n,
            config.num_games,
            game.winner.name(),
            game.seed,
            game.plies.len(),
            start.elapsed().as_secs_f64() * 1000.0,
        ),
        Err(e) => eprintln!("Game {}/{}: failed: {}", n, config.num_games, e),
    }
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Prints a summary of self-play results to stderr.
pub fn print_summary(games: &[GameRecord]) {
    let total = games.len();
    let computer_wins = games.iter().filter(|g| g.winner == Side::Computer).count();
    let human_wins = total - computer_wins;
    let total_plies: usize = games.iter().map(|g| g.plies.len()).sum();

    eprintln!("=== Self-Play Summary ===");
    eprintln!("Games: {}", total);
    eprintln!(
        "Avg plies/game: {:.1}",
        total_plies as f64 / total.max(1) as f64
    );
    eprintln!(
        "Computer wins: {} ({:.1}%)",
        computer_wins,
        100.0 * computer_wins as f64 / total.max(1) as f64
    );
    eprintln!(
        "Human wins: {} ({:.1}%)",
        human_wins,
        100.0 * human_wins as f64 / total.max(1) as f64
    );
    for seed in MIN_SEED..=MAX_SEED {
        let from_seed: Vec<_> = games.iter().filter(|g| g.seed == seed).collect();
        if from_seed.is_empty() {
            continue;
        }
        let wins = from_seed.iter().filter(|g| g.winner == Side::Computer).count();
        eprintln!("  seed {:>2}: {}/{} computer wins", seed, wins, from_seed.len());
    }
}
