//! Command-line front end for the quizbank converter.
//!
//! Scans a directory of quiz text files, parses each into question
//! records with `quizbank-core`, and writes the combined bank as one
//! JSON array.

pub mod build;
