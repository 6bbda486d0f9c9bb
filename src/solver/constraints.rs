//! Constraints accumulated over a game
//!
//! Besides the plain green/yellow/gray facts, the set remembers how many
//! copies of each letter are known to be present. A gray mark on a letter
//! that is already known present (the second `e` of `geese` against `creep`)
//! then means "no more copies than already known" instead of "not in the word".

use crate::core::{LetterSet, Mask, PositionalClue, WORD_LEN, Word};
use rustc_hash::FxHashMap;

/// How a gray clue applies given what is already known
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrayResolution {
    /// Letters excluded outright
    pub absent: LetterSet,
    /// Letters known present, limited to `max` copies
    pub caps: Vec<(u8, usize)>,
}

/// Cumulative constraints of the current game
#[derive(Debug, Clone, Default)]
pub struct ConstraintSet {
    green: Mask,
    yellow: [LetterSet; WORD_LEN],
    min_counts: FxHashMap<u8, usize>,
    absent: LetterSet,
    caps: FxHashMap<u8, usize>,
}

impl ConstraintSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything (new game)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Nothing recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.green.is_empty()
            && self.yellow.iter().all(|s| s.is_empty())
            && self.absent.is_empty()
            && self.caps.is_empty()
    }

    /// Record yellow/green feedback
    pub fn record_positional(&mut self, clue: &PositionalClue) {
        for (i, letter) in clue.green().iter() {
            self.green.set(i, letter);
        }
        for (i, letter) in clue.yellow().iter() {
            self.yellow[i].insert(letter);
        }
        for (letter, count) in clue.marked_counts() {
            let known = self.min_counts.entry(letter).or_insert(0);
            *known = (*known).max(usize::from(count));
        }
    }

    /// Split gray letters into outright exclusions and count caps
    #[must_use]
    pub fn resolve_gray(&self, gray: LetterSet) -> GrayResolution {
        let mut resolution = GrayResolution::default();
        for letter in gray.iter() {
            match self.min_counts.get(&letter) {
                Some(&known) if known > 0 => resolution.caps.push((letter, known)),
                _ => resolution.absent.insert(letter),
            }
        }
        resolution
    }

    /// Record a resolved gray clue
    pub fn record_gray(&mut self, resolution: &GrayResolution) {
        self.absent = self.absent.union(resolution.absent);
        for &(letter, max) in &resolution.caps {
            let cap = self.caps.entry(letter).or_insert(max);
            *cap = (*cap).min(max);
        }
    }

    /// Green letters fixed so far
    #[must_use]
    pub const fn green(&self) -> &Mask {
        &self.green
    }

    /// Positions fixed by green feedback
    #[must_use]
    pub fn green_positions(&self) -> Vec<usize> {
        self.green.positions()
    }

    /// Letters excluded at each position by yellow feedback
    #[must_use]
    pub const fn yellow_exclusions(&self) -> &[LetterSet; WORD_LEN] {
        &self.yellow
    }

    /// Letters known to be in the word
    #[must_use]
    pub fn required_letters(&self) -> LetterSet {
        self.min_counts
            .iter()
            .filter(|&(_, &count)| count > 0)
            .map(|(&letter, _)| letter)
            .collect()
    }

    /// Letters known not to be in the word
    #[must_use]
    pub const fn absent(&self) -> LetterSet {
        self.absent
    }

    /// Letters with a known maximum count, alphabetical
    #[must_use]
    pub fn caps(&self) -> Vec<(u8, usize)> {
        let mut caps: Vec<(u8, usize)> = self.caps.iter().map(|(&l, &m)| (l, m)).collect();
        caps.sort_unstable();
        caps
    }

    /// Whether `word` satisfies every recorded constraint
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        self.green.iter().all(|(i, letter)| word.char_at(i) == letter)
            && self
                .yellow
                .iter()
                .enumerate()
                .all(|(i, excluded)| !excluded.contains(word.char_at(i)))
            && self.required_letters().iter().all(|l| word.has_letter(l))
            && word.letters().is_disjoint(self.absent)
            && self
                .caps
                .iter()
                .all(|(&letter, &max)| word.count_of(letter) <= max)
    }
}
