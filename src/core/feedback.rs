//! Game feedback for a guess against a known target
//!
//! Reproduces what the game would show, with proper duplicate-letter handling,
//! and renders it as the clue tokens a player would type into the assistant.
//! The simulation command and the soundness tests drive the assistant with it.

use super::clue::{Clue, Mask, PositionalClue};
use super::letters::LetterSet;
use super::word::{WORD_LEN, Word};

/// Feedback colour of one square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter not in word (or no copies left)
    Gray,
    /// Letter in word, wrong position
    Yellow,
    /// Letter in correct position
    Green,
}

/// The five squares of feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    guess: Word,
    marks: [Mark; WORD_LEN],
}

impl Feedback {
    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact matches green and use up those letters
    /// 2. Second pass: mark present-but-misplaced letters yellow from what is left
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(feedback.to_input(), "--A-E, cnr");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut marks = [Mark::Gray; WORD_LEN];
        let mut available = target.char_counts();

        for (i, mark) in marks.iter_mut().enumerate() {
            if guess.char_at(i) == target.char_at(i) {
                *mark = Mark::Green;
                if let Some(count) = available.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, mark) in marks.iter_mut().enumerate() {
            if *mark == Mark::Gray
                && let Some(count) = available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                *mark = Mark::Yellow;
                *count -= 1;
            }
        }

        Self {
            guess: guess.clone(),
            marks,
        }
    }

    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LEN] {
        &self.marks
    }

    /// All five squares green
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.marks.iter().all(|&m| m == Mark::Green)
    }

    /// Letters with at least one gray square
    #[must_use]
    pub fn gray_letters(&self) -> LetterSet {
        self.marks
            .iter()
            .zip(self.guess.chars())
            .filter(|&(&m, _)| m == Mark::Gray)
            .map(|(_, &letter)| letter)
            .collect()
    }

    /// The clues a player would enter for this feedback
    ///
    /// A positional clue when anything is yellow or green, then a gray clue
    /// when any square is gray.
    #[must_use]
    pub fn to_clues(&self) -> Vec<Clue> {
        let mut yellow = Mask::default();
        let mut green = Mask::default();
        for (i, &mark) in self.marks.iter().enumerate() {
            match mark {
                Mark::Green => green.set(i, self.guess.char_at(i)),
                Mark::Yellow => yellow.set(i, self.guess.char_at(i)),
                Mark::Gray => {}
            }
        }

        let mut clues = Vec::with_capacity(2);
        if !yellow.is_empty() || !green.is_empty() {
            clues.push(Clue::Positional(PositionalClue::new(yellow, green)));
        }
        let gray = self.gray_letters();
        if !gray.is_empty() {
            clues.push(Clue::Gray(gray));
        }
        clues
    }

    /// The input line a player would type for this feedback
    #[must_use]
    pub fn to_input(&self) -> String {
        self.to_clues()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// One display row: the guess in uppercase followed by its emoji squares
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::{Feedback, Word};
    ///
    /// let feedback = Feedback::calculate(&Word::new("crane").unwrap(), &Word::new("slate").unwrap());
    /// assert_eq!(feedback.to_row(), "CRANE ⬜⬜🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn to_row(&self) -> String {
        format!("{} {}", self.guess().text().to_uppercase(), self.to_emoji())
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks
            .iter()
            .map(|mark| match mark {
                Mark::Green => '🟩',
                Mark::Yellow => '🟨',
                Mark::Gray => '⬜',
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clue::translate;

    fn feedback(guess: &str, target: &str) -> Feedback {
        Feedback::calculate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn all_green_is_solved() {
        let fb = feedback("crane", "crane");
        assert!(fb.is_solved());
        assert_eq!(fb.to_input(), "CRANE");
    }

    #[test]
    fn all_gray() {
        let fb = feedback("abcde", "fghij");
        assert_eq!(fb.marks(), &[Mark::Gray; WORD_LEN]);
        assert_eq!(fb.to_input(), "abcde");
    }

    #[test]
    fn duplicate_letters_green_takes_priority() {
        // ROBOT vs FLOOR: first O yellow, second O green
        let fb = feedback("robot", "floor");
        assert_eq!(
            fb.marks(),
            &[Mark::Yellow, Mark::Yellow, Mark::Gray, Mark::Green, Mark::Gray]
        );
        assert_eq!(fb.to_input(), "ro-O-, bt");
    }

    #[test]
    fn surplus_duplicate_is_gray() {
        // GEESE vs CREEP: two E's in the target, the third guessed E is gray
        let fb = feedback("geese", "creep");
        assert_eq!(
            fb.marks(),
            &[Mark::Gray, Mark::Yellow, Mark::Green, Mark::Gray, Mark::Gray]
        );
        assert_eq!(fb.gray_letters().to_string(), "egs");
    }

    #[test]
    fn all_yellow_needs_forced_prefix() {
        let fb = feedback("abcde", "eabcd");
        assert_eq!(fb.to_input(), "!abcde");
        assert!(matches!(translate("!abcde"), Ok(Clue::Positional(_))));
    }

    #[test]
    fn clues_translate_back() {
        let fb = feedback("slate", "plate");
        for clue in fb.to_clues() {
            assert_eq!(translate(&clue.to_string()).unwrap(), clue);
        }
    }

    #[test]
    fn emoji_rendering() {
        let fb = feedback("crane", "slate");
        assert_eq!(fb.to_emoji(), "⬜⬜🟩⬜🟩");

        let fb = feedback("geese", "creep");
        assert_eq!(fb.to_row(), "GEESE ⬜🟨🟩⬜⬜");
    }
}
