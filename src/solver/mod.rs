//! Candidate filtering, suggestion scoring and the game session
//!
//! This module contains the algorithmic part of the assistant.

mod constraints;
mod filter;
mod scoring;
mod session;
pub mod strategy;

pub use constraints::{ConstraintSet, GrayResolution};
pub use filter::{
    apply_clue, apply_round_feedback, filter_gray, filter_letter_caps, filter_yellow_green,
};
pub use scoring::{LetterFrequencyTable, Scored, informative_letters, rank_suggestions, score_word};
pub use session::{
    DEFAULT_SOLVED_THRESHOLD, GameSession, RoundOutcome, RoundReport, SessionConfig, SessionState,
    reduction_percent,
};
pub use strategy::{Weighting, ZeroScorePolicy};
