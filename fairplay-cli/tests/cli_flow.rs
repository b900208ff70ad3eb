//! End-to-end tests driving the compiled binaries over piped stdin/stdout.

use fairplay_core::{Commitment, RoundKey};
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_game(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_fairplay"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start fairplay");

    // usage errors exit before reading, so the pipe may already be closed
    let mut stdin = child.stdin.take().expect("stdin is piped");
    let _ = stdin.write_all(input.as_bytes());
    drop(stdin);

    child.wait_with_output().expect("Failed to wait for fairplay")
}

fn run_verify(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fairplay-verify"))
        .args(args)
        .output()
        .expect("Failed to run fairplay-verify")
}

/// Value after `prefix` on the first line that starts with it
fn field<'a>(stdout: &'a str, prefix: &str) -> &'a str {
    stdout
        .lines()
        .find_map(|line| line.strip_prefix(prefix))
        .unwrap_or_else(|| panic!("no '{}' line in:\n{}", prefix, stdout))
}

#[test]
fn test_duplicate_moves_rejected() {
    let output = run_game(&["Rock", "Paper", "Rock"], "1\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(!stdout.contains("HMAC:"));
    assert!(stderr.contains("non-repeating"));
    assert!(stderr.contains("Rock Paper Scissors"));
}

#[test]
fn test_even_move_count_rejected() {
    let output = run_game(&["Rock", "Paper", "Scissors", "Lizard"], "1\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("HMAC:"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Example:"));
}

#[test]
fn test_too_few_moves_rejected() {
    let output = run_game(&["Rock"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_weak_key_length_rejected() {
    let output = run_game(&["--key-length", "8", "Rock", "Paper", "Scissors"], "1\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("HMAC:"));
}

#[test]
fn test_hyphenated_moves_are_playable() {
    let output = run_game(&["-1", "0", "1"], "1\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("1 - -1"));
    assert_eq!(field(&stdout, "Your move: "), "-1");
}

#[test]
fn test_flag_names_after_first_move_are_moves() {
    let output = run_game(&["Rock", "Paper", "-v"], "3\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(field(&stdout, "Your move: "), "-v");

    let output = run_game(&["a", "b", "--key-length"], "0\n");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("3 - --key-length"));
}

#[test]
fn test_bad_option_is_usage_error() {
    let output = run_game(&["--key-length", "many", "Rock", "Paper", "Scissors"], "1\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Example:"));
}

#[test]
fn test_exit_without_reveal() {
    let output = run_game(&["Rock", "Paper", "Scissors"], "0\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert_eq!(field(&stdout, "HMAC: ").len(), 64);
    assert!(stdout.contains("Game exited."));
    assert!(!stdout.contains("HMAC key:"));
}

#[test]
fn test_full_round_is_verifiable() {
    let moves = ["Rock", "Paper", "Scissors", "Lizard", "Spock"];
    let output = run_game(&moves, "?\nnope\n4\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("Invalid input. Please try again."));
    assert_eq!(field(&stdout, "Your move: "), "Lizard");

    let published = field(&stdout, "HMAC: ");
    let key = field(&stdout, "HMAC key: ");
    let computer_move = field(&stdout, "Computer's move: ");
    assert!(moves.contains(&computer_move));
    assert_eq!(key.len(), 64);

    let commitment = Commitment::from_hex(published).unwrap();
    let key_bytes = RoundKey::from_hex(key).unwrap();
    assert!(commitment.verify(&key_bytes, computer_move));

    let result = field(&stdout, "Result: You ");
    assert!(["Win", "Lose", "Draw"].contains(&result));
    assert_eq!(result == "Draw", computer_move == "Lizard");

    let verified = run_verify(&["--hmac", published, "--key", key, computer_move]);
    assert!(verified.status.success());

    let other = moves.iter().find(|m| **m != computer_move).unwrap();
    let mismatch = run_verify(&["--hmac", published, "--key", key, other]);
    assert_eq!(mismatch.status.code(), Some(1));
}

#[test]
fn test_verify_rejects_malformed_hex() {
    let output = run_verify(&["--hmac", "xyz", "--key", "00", "Rock"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_verify_json_report() {
    let key = RoundKey::from_bytes(vec![9u8; 32]);
    let hmac = fairplay_core::commit(&key, "Paper").to_hex();
    let output = run_verify(&["--json", "--hmac", &hmac, "--key", &key.to_hex(), "Paper"]);

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["verified"], true);
    assert_eq!(report["expected"], hmac.as_str());
}
