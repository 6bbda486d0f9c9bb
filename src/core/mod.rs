//! Core domain types
//!
//! Words, letter sets, clue parsing and game feedback. Everything here is
//! pure and free of I/O.

mod clue;
mod feedback;
mod letters;
mod word;

pub use clue::{
    Clue, FORCE_POSITIONAL, Input, Mask, PLACEHOLDER, PositionalClue, RawClue, ValidationError,
    parse_input, translate,
};
pub use feedback::{Feedback, Mark};
pub use letters::{ALPHABET_LEN, LetterSet};
pub use word::{WORD_LEN, Word, WordError};
