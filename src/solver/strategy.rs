//! Scoring strategy knobs
//!
//! Runtime-selectable variants of the suggestion heuristic.

use log::warn;

/// Where letter frequencies come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Weighting {
    /// Relative letter frequency in the live candidate pool (default)
    #[default]
    Pool,
    /// Static English letter frequencies
    Corpus,
}

impl Weighting {
    /// Create a weighting from its name
    ///
    /// Supported names: "pool", "corpus" (alias "english").
    /// Defaults to pool if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "pool" => Self::Pool,
            "corpus" | "english" => Self::Corpus,
            other => {
                warn!("unknown weighting '{other}', using pool frequencies");
                Self::Pool
            }
        }
    }
}

/// What to do with bank words that share no letter with the informative set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZeroScorePolicy {
    /// Rank them last (default)
    #[default]
    Keep,
    /// Leave them out of suggestions and prune them from the session's bank
    Drop,
}

impl ZeroScorePolicy {
    /// Create a policy from its name
    ///
    /// Supported names: "keep", "drop" (alias "prune").
    /// Defaults to keep if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "keep" => Self::Keep,
            "drop" | "prune" => Self::Drop,
            other => {
                warn!("unknown zero-score policy '{other}', keeping zero scores");
                Self::Keep
            }
        }
    }
}
