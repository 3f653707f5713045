//! Runs the `movie-mood` binary end to end.

use std::process::Command;

#[test]
fn test_missing_data_file_is_fatal() {
    let output = Command::new(env!("CARGO_BIN_EXE_movie-mood"))
        .args(["--data-file", "no/such.csv", "--no-animation"])
        .output()
        .expect("failed to run movie-mood");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Error! File 'no/such.csv' was not found."));
}

#[test]
fn test_zero_count_is_rejected() {
    let output = Command::new(env!("CARGO_BIN_EXE_movie-mood"))
        .args(["--count", "0"])
        .output()
        .expect("failed to run movie-mood");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--count must be at least 1"));
}
