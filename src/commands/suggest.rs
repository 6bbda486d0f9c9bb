//! One-shot suggestion command
//!
//! Applies a single round of clues to the full answer list and ranks the
//! word bank against what is left.

use crate::core::{Clue, RawClue, ValidationError, Word, translate};
use crate::solver::{GameSession, RoundOutcome, Scored, SessionConfig, reduction_percent};

/// Result of a one-shot suggestion run
pub struct SuggestResult<'a> {
    pub before: usize,
    pub survivors: Vec<&'a Word>,
    pub reduction_percent: f64,
    pub suggestions: Vec<Scored<'a>>,
    /// Tokens that were skipped, with the reason
    pub rejected: Vec<(String, ValidationError)>,
}

/// Separate translated clues from rejected tokens, keeping input order
#[must_use]
pub fn split_clues(raw: Vec<RawClue>) -> (Vec<Clue>, Vec<(String, ValidationError)>) {
    let mut clues = Vec::with_capacity(raw.len());
    let mut rejected = Vec::new();
    for RawClue { token, parsed } in raw {
        match parsed {
            Ok(clue) => clues.push(clue),
            Err(e) => rejected.push((token, e)),
        }
    }
    (clues, rejected)
}

/// Apply clue tokens (each may hold several comma-separated clues) once
///
/// The game is never declared solved here: every surviving word is kept.
#[must_use]
pub fn run_suggest<'a, S: AsRef<str>>(
    answers: &'a [Word],
    bank: &'a [Word],
    config: SessionConfig,
    tokens: &[S],
) -> SuggestResult<'a> {
    let raw: Vec<RawClue> = tokens
        .iter()
        .flat_map(|t| t.as_ref().split(','))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|token| RawClue {
            token: token.to_string(),
            parsed: translate(token),
        })
        .collect();
    let (clues, rejected) = split_clues(raw);

    let config = SessionConfig {
        solved_threshold: 0,
        ..config
    };
    let mut session = GameSession::new(answers, bank, config);

    match session.apply_round(&clues) {
        RoundOutcome::Narrowed(report) | RoundOutcome::Solved(report) => SuggestResult {
            before: report.before,
            survivors: report.survivors,
            reduction_percent: report.reduction_percent,
            suggestions: report.suggestions,
            rejected,
        },
        RoundOutcome::Exhausted { before } => SuggestResult {
            before,
            survivors: Vec::new(),
            reduction_percent: reduction_percent(before, 0),
            suggestions: Vec::new(),
            rejected,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn applies_all_clues() {
        let answers = words(&["crane", "slate", "grape"]);
        let bank = words(&["crane", "slate", "grape", "plumb"]);

        let result = run_suggest(&answers, &bank, SessionConfig::default(), &["G-p--"]);
        assert_eq!(result.before, 3);
        assert_eq!(result.survivors.len(), 1);
        assert_eq!(result.survivors[0].text(), "grape");
        assert!(result.rejected.is_empty());
    }

    #[test]
    fn comma_separated_tokens_split() {
        let answers = words(&["mango", "lemon", "melon"]);
        let bank = words(&["mango", "lemon", "melon"]);

        let result = run_suggest(&answers, &bank, SessionConfig::default(), &["l----, g"]);
        let texts: Vec<&str> = result.survivors.iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["melon"]);
    }

    #[test]
    fn bad_tokens_are_reported_and_skipped() {
        let answers = words(&["crane", "slate", "grape"]);
        let bank = words(&["crane", "slate", "grape"]);

        let result = run_suggest(
            &answers,
            &bank,
            SessionConfig::default(),
            &["oo----", "--A-E"],
        );
        assert_eq!(result.rejected.len(), 1);
        assert_eq!(result.rejected[0].0, "oo----");
        assert_eq!(result.survivors.len(), 3);
        assert!(result.reduction_percent.abs() < f64::EPSILON);
    }

    #[test]
    fn contradictory_clues_leave_nothing() {
        let answers = words(&["crane", "slate"]);
        let bank = words(&["crane", "slate"]);

        let result = run_suggest(&answers, &bank, SessionConfig::default(), &["Z----"]);
        assert!(result.survivors.is_empty());
        assert!(result.suggestions.is_empty());
        assert!((result.reduction_percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn split_keeps_order() {
        let raw = ["r---E", "", "xyz"]
            .iter()
            .map(|t| RawClue {
                token: (*t).to_string(),
                parsed: translate(t),
            })
            .collect();
        let (clues, rejected) = split_clues(raw);
        assert_eq!(clues.len(), 2);
        assert_eq!(rejected, vec![(String::new(), ValidationError::Empty)]);
    }
}
