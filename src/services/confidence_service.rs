//! Heuristic caveats about how far a detection result can be trusted.
//!
//! None of these checks affect which language is detected. They only annotate
//! the response, in a fixed order: length, special characters, scripts.

use std::collections::BTreeSet;
use unicode_general_category::{get_general_category, GeneralCategory};

const SHORT_TEXT_CHARS: usize = 10;
const LONG_TEXT_CHARS: usize = 100;
const SPECIAL_CHAR_RATIO: f64 = 0.3;

pub const SHORT_TEXT: &str = "Short text length may reduce confidence.";
pub const LONG_TEXT: &str = "Longer text generally provides higher confidence.";
pub const MANY_SPECIAL_CHARS: &str = "A high number of special characters was detected.";
pub const MIXED_SCRIPTS: &str = "Mixed writing systems (scripts) were detected.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Script {
    Chinese,
    Japanese,
    Korean,
    Arabic,
    Hebrew,
    Thai,
    Devanagari,
}

impl Script {
    /// Buckets are checked in a fixed order, Chinese first.
    pub fn of(c: char) -> Option<Script> {
        match c {
            '\u{4e00}'..='\u{9fff}' => Some(Script::Chinese),
            '\u{3040}'..='\u{30ff}' => Some(Script::Japanese),
            '\u{ac00}'..='\u{d7af}' => Some(Script::Korean),
            '\u{0600}'..='\u{06ff}' => Some(Script::Arabic),
            '\u{0590}'..='\u{05ff}' => Some(Script::Hebrew),
            '\u{0e00}'..='\u{0e7f}' => Some(Script::Thai),
            '\u{0900}'..='\u{097f}' => Some(Script::Devanagari),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Script::Chinese => "Chinese",
            Script::Japanese => "Japanese",
            Script::Korean => "Korean",
            Script::Arabic => "Arabic",
            Script::Hebrew => "Hebrew",
            Script::Thai => "Thai",
            Script::Devanagari => "Devanagari (e.g., Hindi)",
        }
    }
}

pub fn annotate(text: &str) -> Vec<String> {
    let length = text.chars().count();
    let mut factors = vec![];

    if length < SHORT_TEXT_CHARS {
        factors.push(SHORT_TEXT.to_string());
    } else if length > LONG_TEXT_CHARS {
        factors.push(LONG_TEXT.to_string());
    }

    let special_chars = text
        .chars()
        .filter(|c| !is_letter_or_number(*c) && !c.is_whitespace())
        .count();

    if special_chars as f64 > length as f64 * SPECIAL_CHAR_RATIO {
        factors.push(MANY_SPECIAL_CHARS.to_string());
    }

    let scripts = scripts_in(text);
    let mut iter = scripts.iter();
    match (iter.next(), iter.next()) {
        (Some(_), Some(_)) => factors.push(MIXED_SCRIPTS.to_string()),
        (Some(script), None) => {
            factors.push(format!("Detected a specific script: {}.", script.name()))
        }
        _ => {}
    }

    factors
}

/// Letters and numbers by general category (L* and N*). Combining marks such
/// as Devanagari vowel signs are not counted, unlike `char::is_alphanumeric`.
fn is_letter_or_number(c: char) -> bool {
    use GeneralCategory::*;

    matches!(
        get_general_category(c),
        UppercaseLetter
            | LowercaseLetter
            | TitlecaseLetter
            | ModifierLetter
            | OtherLetter
            | DecimalNumber
            | LetterNumber
            | OtherNumber
    )
}

pub fn scripts_in(text: &str) -> BTreeSet<Script> {
    text.chars().filter_map(Script::of).collect()
}
