//! Difficulty numbers and the named difficulty ladder.

use crate::error::DifficultyError;

/// Named difficulties, easiest first.
pub const DIFFICULTIES: [(&str, u32); 5] = [
    ("very easy", 3),
    ("easy", 7),
    ("challenging", 11),
    ("hard", 15),
    ("very hard", 19),
];

/// Lowest numeric difficulty accepted.
pub const MIN_DIFFICULTY: i64 = 1;

/// Highest numeric difficulty accepted.
pub const MAX_DIFFICULTY: i64 = 30;

/// Parse a difficulty given as a number or a name.
///
/// Names match case-insensitively. An exact name wins outright; otherwise
/// the input must be a prefix of exactly one name.
pub fn parse_difficulty(input: &str) -> Result<u32, DifficultyError> {
    let normalized = input.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();

    if let Some(n) = parse_number(&normalized) {
        return if (MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&n) {
            Ok(n as u32)
        } else {
            Err(DifficultyError::OutOfRange(n))
        };
    }

    if let Some(&(_, value)) = DIFFICULTIES.iter().find(|(name, _)| *name == normalized) {
        return Ok(value);
    }

    let candidates: Vec<&(&str, u32)> = DIFFICULTIES
        .iter()
        .filter(|(name, _)| !normalized.is_empty() && name.starts_with(&normalized))
        .collect();

    match candidates.as_slice() {
        [] => Err(DifficultyError::Unknown(input.trim().to_string())),
        [(_, value)] => Ok(*value),
        many => Err(DifficultyError::Ambiguous {
            input: input.trim().to_string(),
            candidates: many.iter().map(|(name, _)| name.to_string()).collect(),
        }),
    }
}

/// An optionally signed run of digits, saturated to the `i64` range.
fn parse_number(s: &str) -> Option<i64> {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(s.parse::<i64>().unwrap_or(if s.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    }))
}

/// The name of a difficulty number on the ladder, if it has one.
pub fn difficulty_name(value: u32) -> Option<&'static str> {
    DIFFICULTIES
        .iter()
        .find(|(_, v)| *v == value)
        .map(|(name, _)| *name)
}
