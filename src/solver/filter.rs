//! Candidate pool filtering
//!
//! Pure, order-preserving filters over a pool of word references. An empty
//! result is a normal outcome; none of these can fail.

use crate::core::{Clue, LetterSet, Mask, ValidationError, Word, translate};

/// Keep words consistent with yellow and green feedback
///
/// A word survives when it
/// - contains every yellow letter somewhere,
/// - does not have a yellow letter at the position it was marked yellow for,
/// - has the required letter at every green position.
///
/// Also returns the indices of the green-fixed positions.
///
/// # Examples
/// ```
/// use wordle_assistant::core::{Mask, Word};
/// use wordle_assistant::solver::filter_yellow_green;
///
/// let words: Vec<Word> = ["crane", "slate", "grape"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let pool: Vec<&Word> = words.iter().collect();
///
/// let green = Mask::parse("g----").unwrap();
/// let (survivors, fixed) = filter_yellow_green(&pool, &Mask::default(), &green);
///
/// assert_eq!(survivors.len(), 1);
/// assert_eq!(survivors[0].text(), "grape");
/// assert_eq!(fixed, vec![0]);
/// ```
#[must_use]
pub fn filter_yellow_green<'a>(
    pool: &[&'a Word],
    yellow: &Mask,
    green: &Mask,
) -> (Vec<&'a Word>, Vec<usize>) {
    let required = yellow.letters();

    let survivors = pool
        .iter()
        .copied()
        .filter(|word| {
            required.iter().all(|letter| word.has_letter(letter))
                && yellow.iter().all(|(i, letter)| word.char_at(i) != letter)
                && green.iter().all(|(i, letter)| word.char_at(i) == letter)
        })
        .collect();

    (survivors, green.positions())
}

/// Keep words that contain none of the gray letters
#[must_use]
pub fn filter_gray<'a>(pool: &[&'a Word], gray: LetterSet) -> Vec<&'a Word> {
    pool.iter()
        .copied()
        .filter(|word| word.letters().is_disjoint(gray))
        .collect()
}

/// Keep words containing each capped letter at most `max` times
#[must_use]
pub fn filter_letter_caps<'a>(pool: &[&'a Word], caps: &[(u8, usize)]) -> Vec<&'a Word> {
    pool.iter()
        .copied()
        .filter(|word| caps.iter().all(|&(letter, max)| word.count_of(letter) <= max))
        .collect()
}

/// Apply one parsed clue literally
///
/// Returns the survivors and the green-fixed positions (none for gray clues).
#[must_use]
pub fn apply_clue<'a>(pool: &[&'a Word], clue: &Clue) -> (Vec<&'a Word>, Vec<usize>) {
    match clue {
        Clue::Positional(clue) => filter_yellow_green(pool, clue.yellow(), clue.green()),
        Clue::Gray(letters) => (filter_gray(pool, *letters), Vec::new()),
    }
}

/// Translate a raw feedback token and filter the pool with it
///
/// # Errors
///
/// Returns `ValidationError` if the token is malformed; the pool is untouched.
///
/// # Examples
/// ```
/// use wordle_assistant::core::Word;
/// use wordle_assistant::solver::apply_round_feedback;
///
/// let words: Vec<Word> = ["boxer", "crane"].iter().map(|w| Word::new(*w).unwrap()).collect();
/// let pool: Vec<&Word> = words.iter().collect();
///
/// let (survivors, excluded) = apply_round_feedback(&pool, "xyz").unwrap();
/// assert_eq!(survivors.len(), 1);
/// assert!(excluded.is_empty());
///
/// assert!(apply_round_feedback(&pool, "-a-").is_err());
/// ```
pub fn apply_round_feedback<'a>(
    pool: &[&'a Word],
    raw_token: &str,
) -> Result<(Vec<&'a Word>, Vec<usize>), ValidationError> {
    let clue = translate(raw_token)?;
    Ok(apply_clue(pool, &clue))
}
