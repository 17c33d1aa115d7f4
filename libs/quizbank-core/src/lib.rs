//! Core library for the quizbank converter.
//!
//! Provides:
//! - Block parser for plain-text quiz files
//! - Label heuristics for module and difficulty tags
//! - Shared question record types
//!
//! The library is pure: it never touches the filesystem. Callers feed it
//! `(label, text)` pairs and get back question records ready for JSON
//! serialization.

pub mod metadata;
pub mod parser;
pub mod types;

pub use metadata::{difficulty_from_label, module_from_label};
pub use parser::parse;
pub use types::{AnswerOption, Difficulty, Module, QuestionRecord};
