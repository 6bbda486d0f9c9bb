//! Game session state machine
//!
//! Owns the candidate pool, the working word bank and the accumulated
//! constraints of one game, and moves between
//! `FreshGame → Active → (Solved | Exhausted) → FreshGame`.

use super::constraints::ConstraintSet;
use super::filter::{filter_gray, filter_letter_caps, filter_yellow_green};
use super::scoring::{Scored, informative_letters, rank_suggestions};
use super::strategy::{Weighting, ZeroScorePolicy};
use crate::core::{Clue, Word};
use log::{debug, info};

/// Pool size at or below which the game counts as solved
pub const DEFAULT_SOLVED_THRESHOLD: usize = 2;

/// Session tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub solved_threshold: usize,
    pub weighting: Weighting,
    pub zero_scores: ZeroScorePolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            solved_threshold: DEFAULT_SOLVED_THRESHOLD,
            weighting: Weighting::default(),
            zero_scores: ZeroScorePolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Full pool, no constraints
    FreshGame,
    /// Pool narrowed by at least one round
    Active,
    /// Pool at or below the solved threshold
    Solved,
    /// No word left
    Exhausted,
}

/// What one round of feedback did to the pool
#[derive(Debug, Clone)]
pub struct RoundReport<'a> {
    pub before: usize,
    pub after: usize,
    /// Percentage of the pre-round pool that was eliminated
    pub reduction_percent: f64,
    pub survivors: Vec<&'a Word>,
    /// Ranked next guesses (opening suggestions once the game has reset)
    pub suggestions: Vec<Scored<'a>>,
}

impl<'a> RoundReport<'a> {
    fn new(before: usize, survivors: Vec<&'a Word>, suggestions: Vec<Scored<'a>>) -> Self {
        let after = survivors.len();
        Self {
            before,
            after,
            reduction_percent: reduction_percent(before, after),
            survivors,
            suggestions,
        }
    }
}

/// Result of [`GameSession::apply_round`]
#[derive(Debug, Clone)]
pub enum RoundOutcome<'a> {
    /// Still several candidates; the session stays in play
    Narrowed(RoundReport<'a>),
    /// Few enough candidates to call it; the session has reset
    Solved(RoundReport<'a>),
    /// Nothing matches; the session has reset
    Exhausted { before: usize },
}

impl RoundOutcome<'_> {
    /// State the round ended in, before any automatic reset
    #[must_use]
    pub const fn state(&self) -> SessionState {
        match self {
            Self::Narrowed(_) => SessionState::Active,
            Self::Solved(_) => SessionState::Solved,
            Self::Exhausted { .. } => SessionState::Exhausted,
        }
    }
}

/// Percentage of `before` removed to leave `after`
#[must_use]
pub fn reduction_percent(before: usize, after: usize) -> f64 {
    if before == 0 {
        return 0.0;
    }
    100.0 - (after as f64 / before as f64) * 100.0
}

/// One assistant session, possibly spanning several games
///
/// Cloning a fresh session reuses its opening ranking.
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    answers: &'a [Word],
    bank: &'a [Word],
    config: SessionConfig,
    opening: Vec<Scored<'a>>,
    pool: Vec<&'a Word>,
    working_bank: Vec<&'a Word>,
    constraints: ConstraintSet,
    state: SessionState,
    round: usize,
}

impl<'a> GameSession<'a> {
    /// Create a session over the answer list and the guess bank
    ///
    /// Opening suggestions (the bank ranked against the full answer list) are
    /// computed once here.
    #[must_use]
    pub fn new(answers: &'a [Word], bank: &'a [Word], config: SessionConfig) -> Self {
        let pool: Vec<&'a Word> = answers.iter().collect();
        let working_bank: Vec<&'a Word> = bank.iter().collect();

        let mut opening = rank_suggestions(&pool, &working_bank, &[], config.weighting);
        if config.zero_scores == ZeroScorePolicy::Drop {
            opening.retain(|s| s.score > 0.0);
        }

        Self {
            answers,
            bank,
            config,
            opening,
            pool,
            working_bank,
            constraints: ConstraintSet::new(),
            state: SessionState::FreshGame,
            round: 0,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Words still possible in the current game
    #[must_use]
    pub fn pool(&self) -> &[&'a Word] {
        &self.pool
    }

    /// Size of the full answer list
    #[must_use]
    pub const fn total_words(&self) -> usize {
        self.answers.len()
    }

    /// Guess words still considered for suggestions
    #[must_use]
    pub fn working_bank(&self) -> &[&'a Word] {
        &self.working_bank
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Rounds played in the current game
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    /// Suggested first guesses for a fresh game
    #[must_use]
    pub fn opening(&self) -> &[Scored<'a>] {
        &self.opening
    }

    /// Abandon the current game
    pub fn new_game(&mut self) {
        info!("new game started after {} round(s)", self.round);
        self.reset();
    }

    /// Rank the working bank against the current pool
    ///
    /// Under [`ZeroScorePolicy::Drop`] zero scorers are removed from the
    /// result and from the working bank.
    pub fn suggestions(&mut self) -> Vec<Scored<'a>> {
        if self.state == SessionState::FreshGame {
            return self.opening.clone();
        }

        let excluded = self.constraints.green_positions();
        let mut ranked = rank_suggestions(
            &self.pool,
            &self.working_bank,
            &excluded,
            self.config.weighting,
        );

        if self.config.zero_scores == ZeroScorePolicy::Drop {
            ranked.retain(|s| s.score > 0.0);
            let informative = informative_letters(&self.pool, &excluded);
            let before = self.working_bank.len();
            self.working_bank
                .retain(|w| !w.letters().is_disjoint(informative));
            debug!(
                "pruned {} uninformative word(s) from the bank",
                before - self.working_bank.len()
            );
        }

        ranked
    }

    /// Apply one round of feedback
    ///
    /// Positional clues are applied before gray ones so a gray mark on a
    /// letter confirmed in the same round caps its count instead of removing
    /// it. Solved and exhausted games reset the session before returning.
    /// An empty round changes nothing and reports the current pool.
    pub fn apply_round(&mut self, clues: &[Clue]) -> RoundOutcome<'a> {
        let before = self.pool.len();
        if clues.is_empty() {
            let survivors = self.pool.clone();
            let suggestions = self.suggestions();
            return RoundOutcome::Narrowed(RoundReport::new(before, survivors, suggestions));
        }

        for clue in clues {
            if let Clue::Positional(clue) = clue {
                self.pool = filter_yellow_green(&self.pool, clue.yellow(), clue.green()).0;
                self.constraints.record_positional(clue);
            }
        }
        for clue in clues {
            if let Clue::Gray(letters) = clue {
                let resolution = self.constraints.resolve_gray(*letters);
                self.pool = filter_gray(&self.pool, resolution.absent);
                if !resolution.caps.is_empty() {
                    self.pool = filter_letter_caps(&self.pool, &resolution.caps);
                }
                self.constraints.record_gray(&resolution);
            }
        }

        self.round += 1;
        let after = self.pool.len();
        debug!(
            "round {}: {} clue(s), pool {before} -> {after}",
            self.round,
            clues.len()
        );

        if after == 0 {
            self.state = SessionState::Exhausted;
            info!("no candidates left after round {}, restarting", self.round);
            self.reset();
            return RoundOutcome::Exhausted { before };
        }

        let survivors = self.pool.clone();

        if after <= self.config.solved_threshold {
            self.state = SessionState::Solved;
            info!("solved in {} round(s)", self.round);
            self.reset();
            return RoundOutcome::Solved(RoundReport::new(before, survivors, self.opening.clone()));
        }

        self.state = SessionState::Active;
        let suggestions = self.suggestions();
        RoundOutcome::Narrowed(RoundReport::new(before, survivors, suggestions))
    }

    fn reset(&mut self) {
        self.pool = self.answers.iter().collect();
        self.working_bank = self.bank.iter().collect();
        self.constraints.clear();
        self.state = SessionState::FreshGame;
        self.round = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, translate};

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn clues(tokens: &[&str]) -> Vec<Clue> {
        tokens.iter().map(|t| translate(t).unwrap()).collect()
    }

    const ANSWERS: &[&str] = &[
        "crane", "slate", "grape", "baker", "maker", "taker", "waker", "boxer", "lemon", "melon",
    ];
    const BANK: &[&str] = &[
        "crane", "slate", "grape", "baker", "maker", "taker", "waker", "boxer", "lemon", "melon",
        "bumpy", "twerk", "fizzy",
    ];

    #[test]
    fn starts_fresh_with_full_pool() {
        let answers = words(ANSWERS);
        let bank = words(BANK);
        let session = GameSession::new(&answers, &bank, SessionConfig::default());

        assert_eq!(session.state(), SessionState::FreshGame);
        assert_eq!(session.pool().len(), answers.len());
        assert_eq!(session.opening().len(), bank.len());
        assert!(session.constraints().is_empty());
    }

    #[test]
    fn narrowing_round_stays_active() {
        let answers = words(ANSWERS);
        let bank = words(BANK);
        let mut session = GameSession::new(&answers, &bank, SessionConfig::default());

        let RoundOutcome::Narrowed(report) = session.apply_round(&clues(&["-AKER"])) else {
            panic!("expected a narrowing round");
        };
        assert_eq!(report.before, 10);
        assert_eq!(report.after, 4);
        assert!((report.reduction_percent - 60.0).abs() < 1e-9);
        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(session.round(), 1);

        // Only the first letter is open, so b/m/t/w coverage wins
        let best = report.suggestions[0].word.text();
        assert!(best == "twerk" || best == "bumpy", "unexpected best guess {best}");
    }

    #[test]
    fn solved_round_resets_on_next_round() {
        let answers = words(ANSWERS);
        let bank = words(BANK);
        let mut session = GameSession::new(&answers, &bank, SessionConfig::default());

        let outcome = session.apply_round(&clues(&["GRAPE"]));
        assert_eq!(outcome.state(), SessionState::Solved);
        let RoundOutcome::Solved(report) = outcome else {
            panic!("expected solved");
        };
        assert_eq!(report.after, 1);
        assert_eq!(report.survivors[0].text(), "grape");

        assert_eq!(session.state(), SessionState::FreshGame);
        assert_eq!(session.pool().len(), answers.len());
        assert!(session.constraints().is_empty());

        // The next round starts from the full list again
        let RoundOutcome::Narrowed(report) = session.apply_round(&clues(&["-AKER"])) else {
            panic!("expected a narrowing round");
        };
        assert_eq!(report.before, answers.len());
    }

    #[test]
    fn exhausted_round_resets() {
        let answers = words(ANSWERS);
        let bank = words(BANK);
        let mut session = GameSession::new(&answers, &bank, SessionConfig::default());

        let outcome = session.apply_round(&clues(&["Z----"]));
        assert!(matches!(outcome, RoundOutcome::Exhausted { before: 10 }));
        assert_eq!(session.state(), SessionState::FreshGame);
        assert_eq!(session.pool().len(), answers.len());
    }

    #[test]
    fn gray_letter_after_positional_caps_count() {
        let answers = words(&["creep", "crepe", "eerie", "emcee", "sneer"]);
        let bank = words(&["geese"]);
        let config = SessionConfig {
            solved_threshold: 0,
            ..SessionConfig::default()
        };
        let mut session = GameSession::new(&answers, &bank, config);

        // GEESE against CREEP, gray listed first on purpose
        let target = Word::new("creep").unwrap();
        let feedback = Feedback::calculate(&bank[0], &target);
        let mut round = feedback.to_clues();
        round.reverse();

        let RoundOutcome::Narrowed(report) = session.apply_round(&round) else {
            panic!("expected a narrowing round");
        };
        assert!(report.survivors.iter().any(|w| w.text() == "creep"));
        assert!(report.survivors.iter().all(|w| w.count_of(b'e') <= 2));
    }

    #[test]
    fn pool_always_admitted_by_constraints() {
        let answers = words(ANSWERS);
        let bank = words(BANK);
        let config = SessionConfig {
            solved_threshold: 0,
            ..SessionConfig::default()
        };
        let mut session = GameSession::new(&answers, &bank, config);

        for round in [vec!["----r"], vec!["s", "-a---"]] {
            let _ = session.apply_round(&clues(&round));
            assert!(session.pool().iter().all(|w| session.constraints().admits(w)));
        }
    }

    #[test]
    fn empty_round_changes_nothing() {
        let answers = words(ANSWERS);
        let bank = words(BANK);
        let mut session = GameSession::new(&answers, &bank, SessionConfig::default());

        let RoundOutcome::Narrowed(report) = session.apply_round(&[]) else {
            panic!("expected the pool to be reported");
        };
        assert_eq!(report.before, report.after);
        assert!(report.reduction_percent.abs() < f64::EPSILON);
        assert_eq!(session.state(), SessionState::FreshGame);
        assert_eq!(session.round(), 0);

        let _ = session.apply_round(&clues(&["-AKER"]));
        let _ = session.apply_round(&[]);
        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(session.round(), 1);
        assert_eq!(session.pool().len(), 4);
    }

    #[test]
    fn explicit_new_game_resets() {
        let answers = words(ANSWERS);
        let bank = words(BANK);
        let mut session = GameSession::new(&answers, &bank, SessionConfig::default());

        let _ = session.apply_round(&clues(&["-AKER"]));
        session.new_game();
        assert_eq!(session.state(), SessionState::FreshGame);
        assert_eq!(session.round(), 0);
        assert_eq!(session.pool().len(), answers.len());
    }

    #[test]
    fn drop_policy_prunes_bank() {
        let answers = words(ANSWERS);
        let bank = words(BANK);
        let config = SessionConfig {
            zero_scores: ZeroScorePolicy::Drop,
            ..SessionConfig::default()
        };
        let mut session = GameSession::new(&answers, &bank, config);

        let RoundOutcome::Narrowed(report) = session.apply_round(&clues(&["-AKER"])) else {
            panic!("expected a narrowing round");
        };
        assert!(report.suggestions.iter().all(|s| s.score > 0.0));
        assert!(session.working_bank().iter().all(|w| w.text() != "fizzy"));
        assert!(session.working_bank().len() < bank.len());
    }

    #[test]
    fn reduction_percent_edges() {
        assert!((reduction_percent(10, 10)).abs() < f64::EPSILON);
        assert!((reduction_percent(4, 1) - 75.0).abs() < 1e-9);
        assert!((reduction_percent(0, 0)).abs() < f64::EPSILON);
    }
}
