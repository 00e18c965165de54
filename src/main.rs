//! Multiply -- an interactive multiplier game against the computer.
//!
//! Reads the starting number and the human player's multipliers from stdin
//! and writes the game transcript to stdout. Search diagnostics go to
//! stderr when `--verbose` is given.

use std::env;
use std::io::{self, BufRead, Write};

use multiply::engine::Game;
use multiply::game::Side;
use multiply::protocol::{parse_multiplier, parse_seed, InputError};

/// Prompts until `parse` accepts a line. Returns `None` on end of input.
fn prompt<R, W, T>(
    input: &mut R,
    out: &mut W,
    text: &str,
    parse: fn(&str) -> Result<T, InputError>,
) -> io::Result<Option<T>>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(out, "{}", text)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match parse(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => writeln!(out, "{}", e)?,
        }
    }
}

/// Plays one game to completion or until input runs out.
fn run<R: BufRead, W: Write>(input: &mut R, out: &mut W, first: Side, verbose: bool) -> io::Result<()> {
    writeln!(out, "Welcome to the Multiplication Game!")?;

    let Some(seed) = prompt(input, out, "Enter a starting number (20-30): ", parse_seed)? else {
        eprintln!("input closed before the game started");
        return Ok(());
    };
    let mut game = Game::new(seed, first).map_err(io::Error::other)?;

    while !game.is_over() {
        game.write_status(out)?;
        match game.turn() {
            Side::Human => {
                let Some(mv) =
                    prompt(input, out, "Choose a multiplier (3, 4, or 5): ", parse_multiplier)?
                else {
                    eprintln!("input closed at number {}", game.state().number);
                    return Ok(());
                };
                game.play(Side::Human, mv).map_err(io::Error::other)?;
            }
            Side::Computer => {
                if verbose {
                    if let Some(info) = game.analyze() {
                        eprintln!("{}", info.info_line());
                    }
                }
                let mv = game.computer_move().map_err(io::Error::other)?;
                writeln!(out, "Computer chose: {}", mv.factor())?;
            }
        }
    }

    if let Some(outcome) = game.outcome() {
        outcome.write(out)?;
    }
    Ok(())
}

fn print_usage() {
    eprintln!("Usage: multiply [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --computer-first  Let the computer make the first move");
    eprintln!("  --verbose         Print search info lines to stderr");
    eprintln!("  --help            Show this help");
}

fn main() {
    let mut first = Side::Human;
    let mut verbose = false;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--computer-first" => first = Side::Computer,
            "--verbose" => verbose = true,
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
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = io::BufWriter::new(stdout.lock());

    if let Err(e) = run(&mut input, &mut out, first, verbose) {
        eprintln!("multiply: {}", e);
        std::process::exit(1);
    }
}
