//! Self-play game generation CLI.
//!
//! Plays the computer against a scripted opponent and outputs the game
//! records as JSONL.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]
//!
//! Options:
//!   --games N          Number of games to play (default: 100)
//!   --seed N           Random seed, 0 for entropy (default: 0)
//!   --opponent NAME    random or optimal (default: random)
//!   --computer-first   Let the computer move first
//!   --output FILE      Output file path (default: stdout)
//!   --quiet            Suppress progress and summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::time::Instant;

use multiply::game::Side;
use multiply::selfplay::{self, Opponent, SelfPlayConfig};

/// Returns the value following a flag, or exits with usage.
fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    match args.get(i) {
        Some(v) => v,
        None => {
            eprintln!("Missing value for {}", flag);
            print_usage();
            std::process::exit(1);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = SelfPlayConfig::default();
    let mut output_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                config.num_games = flag_value(&args, i, "--games")
                    .parse()
                    .expect("invalid --games value");
            }
            "--seed" => {
                i += 1;
                config.seed = flag_value(&args, i, "--seed")
                    .parse()
                    .expect("invalid --seed value");
            }
            "--opponent" => {
                i += 1;
                let name = flag_value(&args, i, "--opponent");
                config.opponent = match Opponent::from_name(name) {
                    Some(o) => o,
                    None => {
                        eprintln!("Unknown opponent: {}", name);
                        print_usage();
                        std::process::exit(1);
                    }
                };
            }
            "--computer-first" => {
                config.first = Side::Computer;
            }
            "--output" => {
                i += 1;
                output_path = Some(flag_value(&args, i, "--output").to_string());
            }
            "--quiet" => {
                config.quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if !config.quiet {
        eprintln!(
            "Self-play: {} games, opponent {:?}, {} moves first",
            config.num_games,
            config.opponent,
            config.first.name()
        );
    }

    let start = Instant::now();
    let games = selfplay::run_self_play(&config);
    let elapsed = start.elapsed();

    if !config.quiet {
        eprintln!(
            "Completed {} games in {:.2}s",
            games.len(),
            elapsed.as_secs_f64()
        );
        selfplay::print_summary(&games);
    }

    match output_path {
        Some(path) => {
            let file = File::create(&path).expect("failed to create output file");
            let mut writer = BufWriter::new(file);
            selfplay::write_jsonl(&games, &mut writer).expect("failed to write output");
            if !config.quiet {
                eprintln!("Wrote {} games to {}", games.len(), path);
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            selfplay::write_jsonl(&games, &mut writer).expect("failed to write output");
        }
    }
}

fn print_usage() {
    eprintln!("Usage: selfplay [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --games N          Number of games to play (default: 100)");
    eprintln!("  --seed N           Random seed, 0 for entropy (default: 0)");
    eprintln!("  --opponent NAME    random or optimal (default: random)");
    eprintln!("  --computer-first   Let the computer move first");
    eprintln!("  --output FILE      Output file path (default: stdout)");
    eprintln!("  --quiet            Suppress progress and summary output");
    eprintln!("  --help             Show this help");
}
