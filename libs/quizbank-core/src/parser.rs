//! Block parser for plain-text quiz files.
//!
//! # Format
//! ```text
//! Q1. Question text, possibly wrapped
//!    A. Option text, possibly wrapped
//!    B. Option text
//!    C. Option text
//!    D. Option text
//!
//!    Answer: B
//!    Explanation: Why B is right, runs to the end of the block.
//! ```
//!
//! Blocks are separated by a blank line followed by the next `Q<n>.`
//! marker. The format is lenient and ad hoc, so extraction is a single
//! forward pass of line-tag classification per block, not a grammar.

use crate::metadata;
use crate::types::{AnswerOption, Difficulty, Module, QuestionRecord};

/// Parse the full text of one quiz source into question records.
///
/// `source` is the label of the originating file; it is stored on each
/// record verbatim and feeds the module/difficulty heuristics. Malformed
/// blocks (no options, or no recognizable answer tag) are dropped rather
/// than reported; noisy source material is expected.
pub fn parse(text: &str, source: &str) -> Vec<QuestionRecord> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let module = metadata::module_from_label(source);
    let difficulty = metadata::difficulty_from_label(source);

    split_blocks(text)
        .into_iter()
        .filter_map(|block| parse_block(&block))
        .map(|question| question.into_record(source, module, difficulty))
        .collect()
}

/// Split normalized text into per-question line blocks.
///
/// A boundary is a blank line immediately followed by a `Q<n>.` marker
/// line; the marker stays with the block it opens. The first block needs
/// no preceding blank line.
fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut prev_blank = false;

    for line in text.lines() {
        if prev_blank && is_question_start(line) {
            blocks.push(std::mem::take(&mut current));
        }
        prev_blank = line.trim().is_empty();
        current.push(line);
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

/// Fields pulled from one block before record assembly.
struct RawQuestion {
    number: Option<u32>,
    question: String,
    options: Vec<RawOption>,
    answer: char,
    explanation: String,
}

struct RawOption {
    letter: char,
    text: String,
}

impl RawQuestion {
    fn into_record(self, source: &str, module: Module, difficulty: Difficulty) -> QuestionRecord {
        let RawQuestion {
            number,
            question,
            options,
            answer,
            explanation,
        } = self;

        let answer_options = options
            .into_iter()
            .map(|option| AnswerOption {
                text: option.text,
                is_correct: option.letter == answer,
                rationale: explanation.clone(),
            })
            .collect();

        QuestionRecord {
            question,
            hint: String::new(),
            answer_options,
            source: source.to_string(),
            module,
            difficulty,
            question_number: number,
        }
    }
}

/// Extract one question's fields from a block of raw lines.
///
/// Returns `None` for malformed blocks: no options consumed, or no answer
/// tag anywhere after them.
fn parse_block(raw: &[&str]) -> Option<RawQuestion> {
    let lines: Vec<&str> = raw
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();
    let first = *lines.first()?;

    let (number, mut question) = match question_tag(first) {
        Some((number, rest)) => (Some(number), rest.to_string()),
        None => (None, first.to_string()),
    };

    // The question may wrap onto further lines before the options start.
    let mut idx = 1;
    while idx < lines.len() && option_tag(lines[idx]).is_none() && !is_answer_line(lines[idx]) {
        question.push(' ');
        question.push_str(lines[idx]);
        idx += 1;
    }

    let mut options = Vec::new();
    while idx < lines.len() {
        let Some((letter, rest)) = option_tag(lines[idx]) else {
            break;
        };
        idx += 1;

        // Option text wraps the same way question text does.
        let mut text = rest.to_string();
        while idx < lines.len()
            && option_tag(lines[idx]).is_none()
            && !is_answer_line(lines[idx])
            && !is_explanation_line(lines[idx])
        {
            text.push(' ');
            text.push_str(lines[idx]);
            idx += 1;
        }

        options.push(RawOption { letter, text });
    }

    // Anything between the options and the answer tag is tolerated noise.
    let mut answer = None;
    for (i, line) in lines.iter().enumerate().skip(idx) {
        if let Some(letter) = answer_tag(line) {
            answer = Some(letter);
            idx = i + 1;
            break;
        }
    }
    let answer = answer?;

    if options.is_empty() {
        return None;
    }

    // Once an explanation tag is seen it runs to the end of the block.
    let mut explanation = String::new();
    let mut started = false;
    for line in &lines[idx..] {
        if started {
            explanation.push(' ');
            explanation.push_str(line);
        } else if let Some(rest) = explanation_tag(line) {
            started = true;
            explanation.push_str(rest);
        }
    }

    Some(RawQuestion {
        number,
        question,
        options,
        answer,
        explanation,
    })
}

/// `Q<digits>.` marker at the very start of a raw line, uppercase only.
/// Block boundaries are stricter than the per-block question match.
fn is_question_start(line: &str) -> bool {
    let Some(rest) = line.strip_prefix('Q') else {
        return false;
    };
    let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
    digits > 0 && rest[digits..].starts_with('.')
}

/// `Q<digits>.` with a case-insensitive `Q`; yields the number and the
/// rest of the line after the period.
fn question_tag(line: &str) -> Option<(u32, &str)> {
    let rest = line.strip_prefix(['Q', 'q'])?;
    let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let number = rest[..digits].parse().ok()?;
    let rest = rest[digits..].strip_prefix('.')?;
    Some((number, rest.trim_start()))
}

/// `<letter>.` option marker, letters A-D in either case; yields the
/// upper-cased letter and the rest of the line after the period.
fn option_tag(line: &str) -> Option<(char, &str)> {
    let mut chars = line.chars();
    let letter = chars.next()?;
    if !matches!(letter, 'A'..='D' | 'a'..='d') {
        return None;
    }
    if chars.next() != Some('.') {
        return None;
    }
    Some((letter.to_ascii_uppercase(), chars.as_str().trim_start()))
}

/// Case-insensitive prefix match; yields the text after the tag.
fn strip_tag<'a>(line: &'a str, tag: &str) -> Option<&'a str> {
    match line.get(..tag.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(tag) => Some(&line[tag.len()..]),
        _ => None,
    }
}

fn is_answer_line(line: &str) -> bool {
    strip_tag(line, "answer:").is_some()
}

/// `Answer: <letter>` in any case; the rest of the line is ignored.
fn answer_tag(line: &str) -> Option<char> {
    let rest = strip_tag(line, "answer:")?;
    let letter = rest.trim_start().chars().next()?;
    if matches!(letter, 'A'..='D' | 'a'..='d') {
        Some(letter.to_ascii_uppercase())
    } else {
        None
    }
}

fn is_explanation_line(line: &str) -> bool {
    strip_tag(line, "explanation:").is_some()
}

/// `Explanation: <text>` in any case; yields the text after the tag.
fn explanation_tag(line: &str) -> Option<&str> {
    strip_tag(line, "explanation:").map(str::trim_start)
}
