//! Integration tests for the multiply binary.
//!
//! Spawns the interactive game, feeds it player input on stdin, and checks
//! the transcript written to stdout.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

/// Sends input lines to the game and collects stdout lines.
fn run_game(args: &[&str], input: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_multiply");
    let mut child = Command::new(exe)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start multiply");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    // The game may exit before consuming every line.
    for line in input {
        let _ = writeln!(stdin, "{}", line);
    }
    let _ = stdin.flush();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    lines
}

fn winner_lines(lines: &[String]) -> usize {
    lines
        .iter()
        .filter(|l| l.ends_with("The human player wins!") || l.ends_with("The computer wins!"))
        .count()
}

#[test]
fn human_first_game_finishes() {
    let lines = run_game(&[], &["25", "3", "3", "3", "3", "3"]);

    assert!(lines.iter().any(|l| l == "Welcome to the Multiplication Game!"));
    assert!(lines.iter().any(|l| l.ends_with("Current number: 25")));
    assert!(lines.iter().any(|l| l.starts_with("Computer chose: ")));
    assert!(lines.iter().any(|l| l.starts_with("Game Over! Final Number: ")));
    assert_eq!(winner_lines(&lines), 1);
}

#[test]
fn computer_first_moves_before_prompting() {
    let lines = run_game(&["--computer-first"], &["20", "3", "3", "3"]);

    let status = lines
        .iter()
        .position(|l| l.ends_with("Current number: 20"))
        .unwrap();
    let chose = lines
        .iter()
        .position(|l| l.starts_with("Computer chose: "))
        .unwrap();
    assert!(status < chose);

    let factor: u32 = lines[chose]
        .strip_prefix("Computer chose: ")
        .unwrap()
        .parse()
        .unwrap();
    assert!((3..=5).contains(&factor));

    let next = format!("Current number: {}", 20 * factor);
    assert!(lines.iter().any(|l| l.ends_with(&next)), "missing '{}'", next);
    assert_eq!(winner_lines(&lines), 1);
}

#[test]
fn invalid_input_reprompts() {
    let lines = run_game(
        &[],
        &["abc", "50", "30", "7", "x", "5", "5", "5", "5", "5"],
    );

    assert!(lines.iter().any(|l| l.ends_with("Please enter a valid integer.")));
    assert!(lines
        .iter()
        .any(|l| l.ends_with("Invalid input. Choose a number between 20 and 30.")));
    assert!(lines
        .iter()
        .any(|l| l.ends_with("Invalid choice. Choose 3, 4, or 5.")));
    assert!(lines.iter().any(|l| l.ends_with("Current number: 30")));
    assert_eq!(winner_lines(&lines), 1);
}

#[test]
fn closed_input_exits_cleanly() {
    let lines = run_game(&[], &[]);
    assert!(lines.iter().any(|l| l == "Welcome to the Multiplication Game!"));
    assert!(!lines.iter().any(|l| l.starts_with("Game Over!")));
}

#[test]
fn final_score_matches_reported_totals() {
    let lines = run_game(&[], &["21", "4", "4", "4", "4", "4"]);

    let value = |prefix: &str| -> i32 {
        lines
            .iter()
            .find_map(|l| l.strip_prefix(prefix))
            .unwrap_or_else(|| panic!("missing '{}'", prefix))
            .trim()
            .parse()
            .unwrap()
    };
    let points = value("Total Points before bank adjustment: ");
    let bank = value("Game Bank: ");
    let final_score = value("Final Total Points: ");
    assert_eq!(final_score, multiply::eval::evaluate(points, bank as u32));

    let computer_won = lines.iter().any(|l| l == "The computer wins!");
    assert_eq!(computer_won, final_score % 2 != 0);
}
