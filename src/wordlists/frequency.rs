//! Reference letter frequencies
//!
//! Relative frequency of each letter in English dictionary words. Used by the
//! corpus weighting instead of frequencies derived from the live pool.

/// Relative frequency of each letter, most common first
pub const ENGLISH_LETTER_FREQUENCY: [(u8, f64); 26] = [
    (b'e', 0.111_607),
    (b'a', 0.084_966),
    (b'r', 0.075_809),
    (b'i', 0.075_448),
    (b'o', 0.071_635),
    (b't', 0.069_509),
    (b'n', 0.066_544),
    (b's', 0.057_351),
    (b'l', 0.054_893),
    (b'c', 0.045_388),
    (b'u', 0.036_308),
    (b'd', 0.033_844),
    (b'p', 0.031_671),
    (b'm', 0.030_129),
    (b'h', 0.030_034),
    (b'g', 0.024_705),
    (b'b', 0.020_720),
    (b'f', 0.018_121),
    (b'y', 0.017_779),
    (b'w', 0.012_899),
    (b'k', 0.011_016),
    (b'v', 0.010_074),
    (b'x', 0.002_902),
    (b'z', 0.002_722),
    (b'j', 0.001_965),
    (b'q', 0.001_962),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn covers_every_letter_once() {
        let letters: HashSet<u8> = ENGLISH_LETTER_FREQUENCY.iter().map(|&(l, _)| l).collect();
        assert_eq!(letters.len(), 26);
        assert!(letters.iter().all(u8::is_ascii_lowercase));
    }

    #[test]
    fn sums_to_roughly_one() {
        let total: f64 = ENGLISH_LETTER_FREQUENCY.iter().map(|&(_, f)| f).sum();
        assert!((total - 1.0).abs() < 0.01);
    }

    #[test]
    fn sorted_most_common_first() {
        assert!(
            ENGLISH_LETTER_FREQUENCY
                .windows(2)
                .all(|w| w[0].1 >= w[1].1)
        );
    }
}
