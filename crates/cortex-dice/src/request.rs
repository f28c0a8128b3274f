//! The textual roll request: `<dice and traits...> [vs <difficulty>]`.
//!
//! Tokens are whitespace-separated; double quotes group a multi-word trait
//! name (`"iron will"`). The first unquoted `vs` ends the dice list and
//! everything after it is the difficulty.

use crate::difficulty::parse_difficulty;
use crate::error::{CortexResult, RequestError};

/// A parsed roll request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollRequest {
    /// Dice and trait tokens, lowercased, in the order given.
    pub tokens: Vec<String>,
    /// Target number, if a `vs` clause was given.
    pub difficulty: Option<u32>,
}

impl RollRequest {
    /// A request for the given tokens with no difficulty.
    pub fn new<T: Into<String>>(tokens: impl IntoIterator<Item = T>) -> Self {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            difficulty: None,
        }
    }

    /// Set the difficulty.
    pub fn with_difficulty(mut self, difficulty: u32) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Parse a free-form roll request.
    pub fn parse(input: &str) -> CortexResult<Self> {
        let words = split_words(input)?;

        let vs = words.iter().position(|(word, quoted)| !quoted && word == "vs");
        let (dice, difficulty) = match vs {
            Some(i) => {
                let clause: Vec<&str> = words[i + 1..].iter().map(|(w, _)| w.as_str()).collect();
                if clause.is_empty() {
                    return Err(RequestError::MissingDifficulty.into());
                }
                (&words[..i], Some(parse_difficulty(&clause.join(" "))?))
            }
            None => (&words[..], None),
        };

        if dice.is_empty() {
            return Err(RequestError::NoDice.into());
        }

        Ok(Self {
            tokens: dice.iter().map(|(w, _)| w.clone()).collect(),
            difficulty,
        })
    }
}

/// Split on whitespace outside quotes. Each word is lowercased and tagged
/// with whether it was quoted.
fn split_words(input: &str) -> Result<Vec<(String, bool)>, RequestError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut in_quotes = false;

    for c in input.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                quoted = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                push_word(&mut words, &mut current, quoted);
                quoted = false;
            }
            c => current.push(c),
        }
    }
    if in_quotes {
        return Err(RequestError::UnterminatedQuote);
    }
    push_word(&mut words, &mut current, quoted);

    Ok(words)
}

fn push_word(words: &mut Vec<(String, bool)>, current: &mut String, quoted: bool) {
    let word = current.split_whitespace().collect::<Vec<_>>().join(" ");
    if !word.is_empty() {
        words.push((word.to_lowercase(), quoted));
    }
    current.clear();
}
