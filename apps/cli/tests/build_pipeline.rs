//! End-to-end build over a temporary quiz directory.

use std::fs;

use quizbank_cli::build;
use tempfile::TempDir;

const HARD_QUIZ: &str = "Q1. What is 2+2?\n   A. 3\n   B. 4\n   C. 5\n   D. 6\n\n   Answer: B\n   Explanation: Basic arithmetic.\n\nQ2. Which option wraps\nacross lines?\n   A. this one,\ncontinued here\n   B. not this\n\n   Answer: A\n";

const MISC_QUIZ: &str = "Q1. Standalone?\n   A. yes\n   B. no\n\n   Answer: A\n\nQ2. Broken block without an answer\n   A. yes\n   B. no\n";

#[test]
fn builds_bank_from_directory() {
    let dir = TempDir::new().unwrap();
    let quiz_dir = dir.path().join("quiz_txts");
    fs::create_dir(&quiz_dir).unwrap();
    fs::write(quiz_dir.join("MD2 Hard Quiz.txt"), HARD_QUIZ).unwrap();
    fs::write(quiz_dir.join("Misc Review.txt"), MISC_QUIZ).unwrap();
    fs::write(quiz_dir.join("readme.md"), "not quiz input").unwrap();

    let output = dir.path().join("questions.json");
    build::run(&quiz_dir, &output).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let bank = json.as_array().unwrap();

    // Two from the hard quiz; one from misc, whose second block is
    // dropped for having no answer tag.
    assert_eq!(bank.len(), 3);

    assert_eq!(bank[0]["source"], "MD2 Hard Quiz");
    assert_eq!(bank[0]["module"], "MD2");
    assert_eq!(bank[0]["difficulty"], "Hard");
    assert_eq!(bank[0]["questionNumber"], 1);
    assert_eq!(bank[0]["hint"], "");
    assert_eq!(bank[0]["answerOptions"][1]["isCorrect"], true);
    assert_eq!(bank[0]["answerOptions"][0]["isCorrect"], false);
    assert_eq!(bank[0]["answerOptions"][0]["rationale"], "Basic arithmetic.");

    assert_eq!(bank[1]["question"], "Which option wraps across lines?");
    assert_eq!(
        bank[1]["answerOptions"][0]["text"],
        "this one, continued here"
    );

    assert_eq!(bank[2]["source"], "Misc Review");
    assert_eq!(bank[2]["module"], "Other");
    assert_eq!(bank[2]["difficulty"], "Unknown");
}

#[test]
fn non_ascii_preserved_in_output() {
    let dir = TempDir::new().unwrap();
    let quiz_dir = dir.path().join("quiz_txts");
    fs::create_dir(&quiz_dir).unwrap();
    fs::write(
        quiz_dir.join("Accents.txt"),
        "Q1. Caf\u{e9}?\n   A. oui\n   B. non\n\n   Answer: A\n",
    )
    .unwrap();

    let output = dir.path().join("questions.json");
    build::run(&quiz_dir, &output).unwrap();

    let raw = fs::read_to_string(&output).unwrap();
    assert!(raw.contains("Caf\u{e9}?"));
    assert!(!raw.contains("\\u"));
}

#[test]
fn empty_directory_writes_empty_array() {
    let dir = TempDir::new().unwrap();
    let quiz_dir = dir.path().join("quiz_txts");
    fs::create_dir(&quiz_dir).unwrap();

    let output = dir.path().join("questions.json");
    build::run(&quiz_dir, &output).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "[]");
}

#[test]
fn missing_input_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = build::run(&dir.path().join("absent"), &dir.path().join("out.json"));

    assert!(matches!(result, Err(build::BuildError::Scan { .. })));
}
