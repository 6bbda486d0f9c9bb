//! Formatting utilities for terminal output

use crate::core::Word;
use crate::solver::Scored;
use rand::Rng;
use rand::seq::index;

/// Pick at most `limit` words to show, at random when there are more
///
/// The chosen words keep their pool order. The random source is injected so
/// callers (and tests) control reproducibility.
pub fn sample_words<'a, R: Rng + ?Sized>(
    words: &[&'a Word],
    limit: usize,
    rng: &mut R,
) -> Vec<&'a Word> {
    if words.len() <= limit {
        return words.to_vec();
    }

    let mut picked = index::sample(rng, words.len(), limit).into_vec();
    picked.sort_unstable();
    picked.into_iter().map(|i| words[i]).collect()
}

/// Format a word list as "(total): a, b, c" with "..." when truncated
#[must_use]
pub fn format_word_list(shown: &[&Word], total: usize) -> String {
    let list = shown
        .iter()
        .map(|w| w.text())
        .collect::<Vec<_>>()
        .join(", ");
    let more = if total > shown.len() { "..." } else { "" };
    format!("({total}): {list}{more}")
}

/// Format the top `limit` ranked suggestions as "word (score), ..."
#[must_use]
pub fn format_ranked(suggestions: &[Scored], limit: usize) -> String {
    let list = suggestions
        .iter()
        .take(limit)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let more = if suggestions.len() > limit { "..." } else { "" };
    format!("{list}{more}")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
