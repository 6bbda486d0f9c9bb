//! Letter-frequency suggestion scoring
//!
//! A greedy stand-in for "which guess reveals the most": a bank word scores the
//! summed frequency of its distinct letters that still carry information.
//!
//! # Algorithm
//! 1. Count every letter occurrence across the candidate pool and normalise by
//!    the total to get relative frequencies (or use the English reference
//!    table under [`Weighting::Corpus`]).
//! 2. Build the informative letter set: letters found in pool words at any
//!    position not already fixed green.
//! 3. Score each bank word as the sum of frequencies of its distinct letters
//!    that are in the informative set. No overlap scores exactly zero.
//! 4. Sort descending; ties keep bank order.
//!
//! Cost is O(pool × 5 + bank × 5), cheap enough to rerun every round.

use super::strategy::Weighting;
use crate::core::{ALPHABET_LEN, LetterSet, WORD_LEN, Word};
use crate::wordlists::frequency::ENGLISH_LETTER_FREQUENCY;
use rayon::prelude::*;
use std::fmt;

/// A word with its score for the current round
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored<'a> {
    pub word: &'a Word,
    pub score: f64,
}

impl fmt::Display for Scored<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3})", self.word, self.score)
    }
}

/// Relative frequency of each letter
#[derive(Debug, Clone, PartialEq)]
pub struct LetterFrequencyTable([f64; ALPHABET_LEN]);

impl LetterFrequencyTable {
    /// Frequencies of letter occurrences across the pool
    ///
    /// Repeated letters count once per occurrence. An empty pool gives all
    /// zeros.
    #[must_use]
    pub fn from_pool(pool: &[&Word]) -> Self {
        let mut counts = [0usize; ALPHABET_LEN];
        for word in pool {
            for &ch in word.chars() {
                counts[LetterSet::index_of(ch)] += 1;
            }
        }

        let total = pool.len() * WORD_LEN;
        let mut table = [0.0; ALPHABET_LEN];
        if total > 0 {
            for (slot, count) in table.iter_mut().zip(counts) {
                *slot = count as f64 / total as f64;
            }
        }
        Self(table)
    }

    /// The static English reference frequencies
    #[must_use]
    pub fn english() -> Self {
        let mut table = [0.0; ALPHABET_LEN];
        for &(letter, freq) in &ENGLISH_LETTER_FREQUENCY {
            table[LetterSet::index_of(letter)] = freq;
        }
        Self(table)
    }

    /// Table for the given weighting
    #[must_use]
    pub fn for_weighting(weighting: Weighting, pool: &[&Word]) -> Self {
        match weighting {
            Weighting::Pool => Self::from_pool(pool),
            Weighting::Corpus => Self::english(),
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> f64 {
        self.0[LetterSet::index_of(letter)]
    }
}

/// Letters that still carry information this round
///
/// Union over the pool of letters at positions not in `excluded_positions`.
#[must_use]
pub fn informative_letters(pool: &[&Word], excluded_positions: &[usize]) -> LetterSet {
    let mut letters = LetterSet::EMPTY;
    for word in pool {
        for (i, &ch) in word.chars().iter().enumerate() {
            if !excluded_positions.contains(&i) {
                letters.insert(ch);
            }
        }
    }
    letters
}

/// Score one word against a frequency table and informative letter set
#[must_use]
pub fn score_word(word: &Word, table: &LetterFrequencyTable, informative: LetterSet) -> f64 {
    word.letters()
        .intersection(informative)
        .iter()
        .map(|letter| table.get(letter))
        .sum()
}

/// Rank bank words by how useful they are as the next guess
///
/// Scores are computed in parallel; the returned order is descending by score
/// with ties kept in bank order.
///
/// # Examples
/// ```
/// use wordle_assistant::core::Word;
/// use wordle_assistant::solver::{Weighting, rank_suggestions};
///
/// let pool_words: Vec<Word> = ["baker", "maker", "taker"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let bank_words: Vec<Word> = ["water", "bumpy", "fizzy"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let pool: Vec<&Word> = pool_words.iter().collect();
/// let bank: Vec<&Word> = bank_words.iter().collect();
///
/// // Positions 1..5 are green ("-AKER"), only the first letter is open
/// let ranked = rank_suggestions(&pool, &bank, &[1, 2, 3, 4], Weighting::Pool);
///
/// assert_eq!(ranked[0].word.text(), "bumpy"); // covers b and m
/// assert_eq!(ranked[2].score, 0.0); // fizzy tells nothing
/// ```
#[must_use]
pub fn rank_suggestions<'a>(
    pool: &[&Word],
    bank: &[&'a Word],
    excluded_positions: &[usize],
    weighting: Weighting,
) -> Vec<Scored<'a>> {
    let table = LetterFrequencyTable::for_weighting(weighting, pool);
    let informative = informative_letters(pool, excluded_positions);

    let mut scored: Vec<Scored<'a>> = bank
        .par_iter()
        .map(|&word| Scored {
            word,
            score: score_word(word, &table, informative),
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}
