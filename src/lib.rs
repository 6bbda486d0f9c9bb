//! Wordle Assistant
//!
//! Translates Wordle clues into constraints, filters the candidate list and
//! ranks next guesses by letter frequency.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assistant::core::{Word, translate};
//! use wordle_assistant::solver::{GameSession, RoundOutcome, SessionConfig};
//!
//! let answers: Vec<Word> = ["crane", "slate", "grape", "shape"]
//!     .into_iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//! let mut session = GameSession::new(&answers, &answers, SessionConfig::default());
//!
//! // Green A and E, gray c, n, r
//! let clues = vec![translate("--A-E").unwrap(), translate("cnr").unwrap()];
//! match session.apply_round(&clues) {
//!     RoundOutcome::Solved(report) => assert_eq!(report.after, 2),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

// Core domain types
pub mod core;

// Filtering, scoring and the game session
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
