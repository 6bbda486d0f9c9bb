//! Word lists and letter statistics
//!
//! Loading of the answer list and guess bank, plus the reference letter
//! frequency table.

pub mod frequency;
pub mod loader;

pub use loader::{SourceLoadError, load_initial_pool};

/// Default answer list path
pub const DEFAULT_ANSWERS_PATH: &str = "wordle-list.txt";

/// Default guess bank path
pub const DEFAULT_BANK_PATH: &str = "words.txt";
