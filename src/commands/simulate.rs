//! Simulation command
//!
//! Plays the assistant against known targets: the top suggestion is guessed,
//! feedback is synthesised from the target and fed back as clues.

use crate::core::{Feedback, Word};
use crate::solver::{DEFAULT_SOLVED_THRESHOLD, GameSession, RoundOutcome, SessionConfig};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::{Duration, Instant};

/// Default cap on rounds per simulated game
pub const DEFAULT_MAX_ROUNDS: usize = 10;

/// Outcome of one simulated game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub target: String,
    pub guesses: Vec<String>,
    /// One "GUESS 🟩⬜..." row per guess
    pub rows: Vec<String>,
    pub solved: bool,
}

impl GameRecord {
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.guesses.len()
    }
}

/// Statistics from a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub games: usize,
    pub solved: usize,
    pub failed: usize,
    /// Average rounds over solved games
    pub average_rounds: f64,
    /// Rounds needed → number of solved games
    pub distribution: FxHashMap<usize, usize>,
    pub failures: Vec<String>,
    /// Solved game that took the most rounds
    pub hardest: Option<GameRecord>,
    pub duration: Duration,
}

/// Pick the next guess
///
/// With a small pool a candidate is guessed directly, otherwise the best
/// scoring suggestion not guessed yet.
fn next_guess<'a>(session: &mut GameSession<'a>, guessed: &FxHashSet<&str>) -> Option<&'a Word> {
    let pool = session.pool();
    if pool.len() <= DEFAULT_SOLVED_THRESHOLD {
        return pool.iter().copied().find(|w| !guessed.contains(w.text()));
    }

    session
        .suggestions()
        .into_iter()
        .find(|s| s.score > 0.0 && !guessed.contains(s.word.text()))
        .map(|s| s.word)
        .or_else(|| {
            session
                .pool()
                .iter()
                .copied()
                .find(|w| !guessed.contains(w.text()))
        })
}

/// Play one game against `target`, starting from a fresh `session`
///
/// The session must have a solved threshold of zero so it keeps narrowing
/// until the target is guessed.
#[must_use]
pub fn play_game(mut session: GameSession<'_>, target: &Word, max_rounds: usize) -> GameRecord {
    let mut guessed: FxHashSet<&str> = FxHashSet::default();
    let mut guesses = Vec::new();
    let mut rows = Vec::new();
    let mut solved = false;

    while guesses.len() < max_rounds {
        let Some(guess) = next_guess(&mut session, &guessed) else {
            break;
        };
        guessed.insert(guess.text());
        guesses.push(guess.text().to_string());

        let feedback = Feedback::calculate(guess, target);
        debug!("{target}: {}", feedback.to_row());
        rows.push(feedback.to_row());
        if feedback.is_solved() {
            solved = true;
            break;
        }

        if let RoundOutcome::Exhausted { before } = session.apply_round(&feedback.to_clues()) {
            debug!(
                "{target}: pool of {before} emptied by {} ({})",
                guess,
                feedback.to_input()
            );
            break;
        }
    }

    GameRecord {
        target: target.text().to_string(),
        guesses,
        rows,
        solved,
    }
}

/// Simulate games against `count` targets sampled from the answer list
pub fn run_simulation<R: Rng + ?Sized>(
    answers: &[Word],
    bank: &[Word],
    config: SessionConfig,
    count: usize,
    max_rounds: usize,
    rng: &mut R,
) -> SimulationResult {
    let targets: Vec<&Word> = answers.choose_multiple(rng, count).collect();

    let config = SessionConfig {
        solved_threshold: 0,
        ..config
    };
    let template = GameSession::new(answers, bank, config);

    let pb = ProgressBar::new(targets.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let records: Vec<GameRecord> = targets
        .par_iter()
        .map(|target| {
            let record = play_game(template.clone(), target, max_rounds);
            pb.inc(1);
            record
        })
        .collect();
    pb.finish_with_message("Complete!");

    summarize(&records, start.elapsed())
}

/// Aggregate game records into run statistics
#[must_use]
pub fn summarize(records: &[GameRecord], duration: Duration) -> SimulationResult {
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut failures = Vec::new();
    let mut total_rounds = 0;
    let mut hardest: Option<&GameRecord> = None;

    for record in records {
        if record.solved {
            total_rounds += record.rounds();
            if hardest.is_none_or(|h| record.rounds() > h.rounds()) {
                hardest = Some(record);
            }
            *distribution.entry(record.rounds()).or_insert(0) += 1;
        } else {
            failures.push(record.target.clone());
        }
    }

    let solved = records.len() - failures.len();
    SimulationResult {
        games: records.len(),
        solved,
        failed: failures.len(),
        average_rounds: if solved == 0 {
            0.0
        } else {
            total_rounds as f64 / solved as f64
        },
        distribution,
        failures,
        hardest: hardest.cloned(),
        duration,
    }
}
