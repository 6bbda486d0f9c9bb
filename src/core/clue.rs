//! Clue parsing
//!
//! Turns the raw feedback a user types after a guess into structured clues.
//!
//! One clue token is either:
//! - **positional**: exactly five characters, uppercase = green (right letter,
//!   right place), lowercase = yellow (right letter, wrong place), `-` = no
//!   information at that position. A token is positional when it contains a
//!   `-`, contains an uppercase letter, or is prefixed with `!`.
//! - **gray**: one to five lowercase letters that do not occur in the word.
//!
//! An input line holds any number of comma separated clues, or one of the
//! session commands (`1` for a new game, `2` to quit). Word commands would
//! collide with gray runs such as `exit`, so the only spelled-out command is
//! `new game`, and only as the whole line.

use super::letters::LetterSet;
use super::word::WORD_LEN;
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Marks a position with no constraint
pub const PLACEHOLDER: char = '-';

/// Prefix that forces a token to be read as positional feedback
pub const FORCE_POSITIONAL: char = '!';

/// Why a clue token was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Clue is empty")]
    Empty,
    #[error("Positional clue must be exactly {WORD_LEN} characters, got {0}")]
    PositionalLength(usize),
    #[error("Gray clue must list 1 to {WORD_LEN} letters, got {0}")]
    GrayLength(usize),
    #[error("'{0}' is not accepted here")]
    InvalidCharacter(char),
}

/// Per-position letters, `None` meaning "no constraint"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Mask([Option<u8>; WORD_LEN]);

impl Mask {
    #[must_use]
    pub const fn new(slots: [Option<u8>; WORD_LEN]) -> Self {
        Self(slots)
    }

    /// Parse a five-character mask like `g-a--` (`-` = unconstrained)
    ///
    /// Letters are lower-cased. Returns `None` on wrong length or on any
    /// character that is neither a letter nor `-`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LEN {
            return None;
        }

        let mut slots = [None; WORD_LEN];
        for (slot, ch) in slots.iter_mut().zip(chars) {
            match ch {
                PLACEHOLDER => {}
                c if c.is_ascii_alphabetic() => *slot = Some(c.to_ascii_lowercase() as u8),
                _ => return None,
            }
        }
        Some(Self(slots))
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, position: usize) -> Option<u8> {
        self.0[position]
    }

    #[inline]
    pub const fn set(&mut self, position: usize, letter: u8) {
        self.0[position] = Some(letter);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// Constrained `(position, letter)` pairs in position order
    pub fn iter(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|letter| (i, letter)))
    }

    /// Indices of the constrained positions
    #[must_use]
    pub fn positions(&self) -> Vec<usize> {
        self.iter().map(|(i, _)| i).collect()
    }

    /// Distinct letters mentioned by the mask
    #[must_use]
    pub fn letters(&self) -> LetterSet {
        self.iter().map(|(_, letter)| letter).collect()
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.0 {
            match slot {
                Some(letter) => write!(f, "{}", *letter as char)?,
                None => write!(f, "{PLACEHOLDER}")?,
            }
        }
        Ok(())
    }
}

/// Yellow and green feedback from one guess
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionalClue {
    yellow: Mask,
    green: Mask,
}

impl PositionalClue {
    #[must_use]
    pub const fn new(yellow: Mask, green: Mask) -> Self {
        Self { yellow, green }
    }

    /// Letters present in the word but not at their marked position
    #[must_use]
    pub const fn yellow(&self) -> &Mask {
        &self.yellow
    }

    /// Letters fixed at their position
    #[must_use]
    pub const fn green(&self) -> &Mask {
        &self.green
    }

    /// Every letter the clue marks (yellow or green), in position order
    #[must_use]
    pub fn marked_letters(&self) -> Vec<u8> {
        (0..WORD_LEN)
            .filter_map(|i| self.green.get(i).or_else(|| self.yellow.get(i)))
            .collect()
    }

    /// How many times each letter is marked present
    ///
    /// A letter marked twice is known to occur at least twice.
    #[must_use]
    pub fn marked_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for letter in self.marked_letters() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

/// One parsed clue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clue {
    /// Yellow/green feedback with positions
    Positional(PositionalClue),
    /// Letters absent from the word
    Gray(LetterSet),
}

impl fmt::Display for Clue {
    /// Renders the clue back into a token `translate` accepts
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positional(clue) => {
                let token: String = (0..WORD_LEN)
                    .map(|i| match (clue.green.get(i), clue.yellow.get(i)) {
                        (Some(g), _) => g.to_ascii_uppercase() as char,
                        (None, Some(y)) => y as char,
                        (None, None) => PLACEHOLDER,
                    })
                    .collect();
                let needs_prefix = !token.contains(PLACEHOLDER)
                    && !token.chars().any(|c| c.is_ascii_uppercase());
                if needs_prefix {
                    write!(f, "{FORCE_POSITIONAL}")?;
                }
                write!(f, "{token}")
            }
            Self::Gray(letters) => write!(f, "{letters}"),
        }
    }
}

/// Translate a single clue token
///
/// # Errors
///
/// Returns `ValidationError` if the token is empty, contains anything other
/// than letters and `-` (after an optional leading `!`), is positional but not
/// exactly five characters long, or is gray with more than five letters.
///
/// # Examples
/// ```
/// use wordle_assistant::core::{Clue, translate};
///
/// let Clue::Positional(clue) = translate("G-a--").unwrap() else { panic!() };
/// assert_eq!(clue.green().to_string(), "g----");
/// assert_eq!(clue.yellow().to_string(), "--a--");
///
/// assert!(matches!(translate("xyz").unwrap(), Clue::Gray(_)));
/// assert!(translate("cr@ne").is_err());
/// ```
pub fn translate(token: &str) -> Result<Clue, ValidationError> {
    let token = token.trim();
    let (forced, body) = match token.strip_prefix(FORCE_POSITIONAL) {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    if body.is_empty() {
        return Err(ValidationError::Empty);
    }

    if let Some(bad) = body
        .chars()
        .find(|&c| !c.is_ascii_alphabetic() && c != PLACEHOLDER)
    {
        return Err(ValidationError::InvalidCharacter(bad));
    }

    let positional =
        forced || body.contains(PLACEHOLDER) || body.chars().any(|c| c.is_ascii_uppercase());

    if positional {
        translate_positional(body).map(Clue::Positional)
    } else {
        translate_gray(body).map(Clue::Gray)
    }
}

fn translate_positional(body: &str) -> Result<PositionalClue, ValidationError> {
    // Only ASCII remains at this point, so bytes == chars
    let bytes = body.as_bytes();
    if bytes.len() != WORD_LEN {
        return Err(ValidationError::PositionalLength(bytes.len()));
    }

    let mut yellow = Mask::default();
    let mut green = Mask::default();
    for (i, &ch) in bytes.iter().enumerate() {
        if ch.is_ascii_uppercase() {
            green.set(i, ch.to_ascii_lowercase());
        } else if ch.is_ascii_lowercase() {
            yellow.set(i, ch);
        }
    }

    Ok(PositionalClue { yellow, green })
}

fn translate_gray(body: &str) -> Result<LetterSet, ValidationError> {
    if body.len() > WORD_LEN {
        return Err(ValidationError::GrayLength(body.len()));
    }
    Ok(body.bytes().collect())
}

/// A clue token together with its translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawClue {
    pub token: String,
    pub parsed: Result<Clue, ValidationError>,
}

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Abandon the current game and start over
    NewGame,
    /// Leave the tool
    Exit,
    /// Feedback for the current round
    Clues(Vec<RawClue>),
}

/// Parse a full input line
///
/// Commands win over clues: a line with a `1` or `2` token anywhere is
/// treated as that command. `new game` counts only as the whole line.
///
/// # Examples
/// ```
/// use wordle_assistant::core::{Input, parse_input};
///
/// assert_eq!(parse_input("1"), Input::NewGame);
/// let Input::Clues(clues) = parse_input("-r--E, tio") else { panic!() };
/// assert_eq!(clues.len(), 2);
/// ```
#[must_use]
pub fn parse_input(line: &str) -> Input {
    let tokens: Vec<&str> = line
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();

    if line.trim().eq_ignore_ascii_case("new game") {
        return Input::NewGame;
    }
    for token in &tokens {
        match *token {
            "1" => return Input::NewGame,
            "2" => return Input::Exit,
            _ => {}
        }
    }

    Input::Clues(
        tokens
            .into_iter()
            .map(|token| RawClue {
                token: token.to_string(),
                parsed: translate(token),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positional(token: &str) -> PositionalClue {
        match translate(token).unwrap() {
            Clue::Positional(clue) => clue,
            Clue::Gray(_) => panic!("expected positional clue for {token}"),
        }
    }

    #[test]
    fn uppercase_is_green_lowercase_is_yellow() {
        let clue = positional("Cr-n-");
        assert_eq!(clue.green().to_string(), "c----");
        assert_eq!(clue.yellow().to_string(), "-r-n-");
        assert_eq!(clue.marked_letters(), b"crn".to_vec());
    }

    #[test]
    fn all_green_without_placeholder() {
        let clue = positional("GRAPE");
        assert_eq!(clue.green().to_string(), "grape");
        assert!(clue.yellow().is_empty());
    }

    #[test]
    fn forced_all_yellow() {
        let clue = positional("!abcde");
        assert_eq!(clue.yellow().to_string(), "abcde");
        assert!(clue.green().is_empty());
    }

    #[test]
    fn lowercase_without_placeholder_is_gray() {
        let Clue::Gray(letters) = translate("xyz").unwrap() else {
            panic!("expected gray clue");
        };
        assert_eq!(letters.to_string(), "xyz");
    }

    #[test]
    fn gray_duplicates_collapse() {
        let Clue::Gray(letters) = translate("ttt").unwrap() else {
            panic!("expected gray clue");
        };
        assert_eq!(letters.len(), 1);
    }

    #[test]
    fn rejects_wrong_positional_length() {
        assert_eq!(
            translate("-a--"),
            Err(ValidationError::PositionalLength(4))
        );
        assert_eq!(
            translate("-a----"),
            Err(ValidationError::PositionalLength(6))
        );
        assert_eq!(translate("!abc"), Err(ValidationError::PositionalLength(3)));
    }

    #[test]
    fn rejects_long_gray() {
        assert_eq!(translate("abcdef"), Err(ValidationError::GrayLength(6)));
    }

    #[test]
    fn rejects_invalid_characters() {
        assert_eq!(
            translate("cr@ne"),
            Err(ValidationError::InvalidCharacter('@'))
        );
        assert_eq!(
            translate("a-3--"),
            Err(ValidationError::InvalidCharacter('3'))
        );
        assert_eq!(translate("!"), Err(ValidationError::Empty));
        assert_eq!(translate("   "), Err(ValidationError::Empty));
    }

    #[test]
    fn marked_counts_track_duplicates() {
        let clue = positional("-eE--");
        let counts = clue.marked_counts();
        assert_eq!(counts.get(&b'e'), Some(&2));
    }

    #[test]
    fn display_renders_translatable_token() {
        for token in ["Cr-n-", "GRAPE", "!abcde", "xyz"] {
            let clue = translate(token).unwrap();
            assert_eq!(translate(&clue.to_string()).unwrap(), clue);
        }
        assert_eq!(translate("!abcde").unwrap().to_string(), "!abcde");
    }

    #[test]
    fn mask_parse() {
        let mask = Mask::parse("G-a--").unwrap();
        assert_eq!(mask.to_string(), "g-a--");
        assert_eq!(mask.positions(), vec![0, 2]);
        assert!(Mask::parse("g-a-").is_none());
        assert!(Mask::parse("g-a-?").is_none());
    }

    #[test]
    fn parse_input_commands() {
        assert_eq!(parse_input("1"), Input::NewGame);
        assert_eq!(parse_input(" New Game "), Input::NewGame);
        assert_eq!(parse_input("2"), Input::Exit);
        assert_eq!(parse_input("-a---, 2"), Input::Exit);
    }

    #[test]
    fn gray_runs_spelling_words_stay_clues() {
        assert!(matches!(translate("exit"), Ok(Clue::Gray(_))));

        for line in ["new", "quit", "exit", "---S-, exit"] {
            let Input::Clues(clues) = parse_input(line) else {
                panic!("{line:?} parsed as a command");
            };
            assert!(clues.iter().all(|c| c.parsed.is_ok()), "{line:?}");
        }

        let Input::Clues(clues) = parse_input("exit, ---ST") else {
            panic!("expected clues");
        };
        assert_eq!(clues.len(), 2);
        assert!(matches!(clues[0].parsed, Ok(Clue::Gray(_))));
        assert!(matches!(clues[1].parsed, Ok(Clue::Positional(_))));
    }

    #[test]
    fn parse_input_keeps_rejected_clues() {
        let Input::Clues(clues) = parse_input("-a---, q!z ,, tio") else {
            panic!("expected clues");
        };
        assert_eq!(clues.len(), 3);
        assert!(clues[0].parsed.is_ok());
        assert_eq!(clues[1].token, "q!z");
        assert_eq!(
            clues[1].parsed,
            Err(ValidationError::InvalidCharacter('!'))
        );
        assert!(clues[2].parsed.is_ok());
    }

    #[test]
    fn parse_input_empty_line() {
        assert_eq!(parse_input("   "), Input::Clues(Vec::new()));
    }
}
