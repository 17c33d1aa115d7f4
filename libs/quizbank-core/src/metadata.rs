//! Label-derived metadata heuristics.
//!
//! Source files carry loosely conventional names like `MD3 TB Hard Quiz`.
//! Module and difficulty tags are recovered from that label alone, never
//! from the parsed question content, so both heuristics are plain string
//! scans with sentinel fallbacks instead of errors.

use crate::types::{Difficulty, Module};

/// Extract a module tag such as `MD1` from a label.
///
/// Scans for `md` or `mod` (any case) followed by optional whitespace and
/// digits: `MD1`, `MD 1`, `mod 9`, `Mod10` all match. Leading zeros are
/// normalized away, so `Mod 01` also yields `MD1`. Labels without a match
/// fall back to [`Module::Other`].
pub fn module_from_label(label: &str) -> Module {
    let lower = label.to_lowercase();
    for (pos, _) in lower.char_indices() {
        let rest = &lower[pos..];
        for tag in ["md", "mod"] {
            if let Some(after) = rest.strip_prefix(tag) {
                if let Some(number) = leading_number(after) {
                    return Module::Md(number);
                }
            }
        }
    }
    Module::Other
}

/// Optional whitespace followed by at least one digit.
fn leading_number(s: &str) -> Option<u32> {
    let s = s.trim_start();
    let digits = s.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    s[..digits].parse().ok()
}

/// Derive a difficulty tier from a label. First match wins: `hard`, then
/// `medium` or `med `, then `easy`; anything else is
/// [`Difficulty::Unknown`].
pub fn difficulty_from_label(label: &str) -> Difficulty {
    let lower = label.to_lowercase();
    if lower.contains("hard") {
        Difficulty::Hard
    } else if lower.contains("medium") || lower.contains("med ") {
        Difficulty::Medium
    } else if lower.contains("easy") {
        Difficulty::Easy
    } else {
        Difficulty::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn module_matches_case_and_padding_variants() {
        assert_eq!(module_from_label("MD1"), Module::Md(1));
        assert_eq!(module_from_label("md 01"), Module::Md(1));
        assert_eq!(module_from_label("Mod001"), Module::Md(1));
        assert_eq!(module_from_label("MD 10"), Module::Md(10));
        assert_eq!(module_from_label("mod 9 tb"), Module::Md(9));
    }

    #[test]
    fn module_found_mid_label() {
        assert_eq!(module_from_label("Quiz md3 review"), Module::Md(3));
        assert_eq!(module_from_label("MD3 TB Hard Quiz"), Module::Md(3));
    }

    #[test]
    fn module_requires_trailing_digits() {
        assert_eq!(module_from_label("Misc Review"), Module::Other);
        assert_eq!(module_from_label("module seven"), Module::Other);
        assert_eq!(module_from_label("md"), Module::Other);
    }

    #[test]
    fn module_skips_tag_without_digits_and_keeps_scanning() {
        assert_eq!(module_from_label("md notes mod 4"), Module::Md(4));
    }

    #[test]
    fn difficulty_first_rule_wins() {
        assert_eq!(difficulty_from_label("hard easy"), Difficulty::Hard);
        assert_eq!(difficulty_from_label("Medium but easy"), Difficulty::Medium);
    }

    #[test]
    fn difficulty_variants() {
        assert_eq!(difficulty_from_label("MD3 TB Hard Quiz"), Difficulty::Hard);
        assert_eq!(difficulty_from_label("md1 medium set"), Difficulty::Medium);
        assert_eq!(difficulty_from_label("MD2 Med Quiz"), Difficulty::Medium);
        assert_eq!(difficulty_from_label("warm-up EASY round"), Difficulty::Easy);
        assert_eq!(difficulty_from_label("Misc Review"), Difficulty::Unknown);
    }
}
