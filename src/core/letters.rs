//! Compact set of lowercase ASCII letters
//!
//! Backed by a 26-bit mask so membership, union and disjointness checks are
//! single integer operations.

use std::fmt;

/// Number of letters in the alphabet the assistant works with
pub const ALPHABET_LEN: usize = 26;

/// A set of lowercase ASCII letters (`b'a'..=b'z'`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Index of a lowercase letter in `0..26`
    ///
    /// # Panics
    /// Panics in debug mode if `letter` is not a lowercase ASCII letter
    #[inline]
    #[must_use]
    pub const fn index_of(letter: u8) -> usize {
        debug_assert!(letter.is_ascii_lowercase(), "letter must be a-z");
        (letter - b'a') as usize
    }

    /// Insert a lowercase letter
    #[inline]
    pub const fn insert(&mut self, letter: u8) {
        self.0 |= 1 << Self::index_of(letter);
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & (1 << Self::index_of(letter)) != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..ALPHABET_LEN as u8)
            .filter(move |&i| self.0 & (1 << i) != 0)
            .map(|i| b'a' + i)
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_contains() {
        let mut set = LetterSet::EMPTY;
        set.insert(b'a');
        set.insert(b'z');

        assert!(set.contains(b'a'));
        assert!(set.contains(b'z'));
        assert!(!set.contains(b'm'));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn duplicates_collapse() {
        let set: LetterSet = b"speed".iter().copied().collect();
        assert_eq!(set.len(), 4);
        assert_eq!(set.to_string(), "deps");
    }

    #[test]
    fn disjointness() {
        let xyz: LetterSet = b"xyz".iter().copied().collect();
        let boxer: LetterSet = b"boxer".iter().copied().collect();
        let crane: LetterSet = b"crane".iter().copied().collect();

        assert!(!xyz.is_disjoint(boxer));
        assert!(xyz.is_disjoint(crane));
        assert_eq!(xyz.intersection(boxer).to_string(), "x");
    }
}
