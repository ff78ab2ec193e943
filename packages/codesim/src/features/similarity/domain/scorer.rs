//! Sequence similarity scorer
//!
//! Scores two encoded sequences character by character (the space-joined
//! digit text, not the source tokens).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::sequence_matcher::SequenceMatcher;
use super::vocabulary::EncodedSequence;

/// Which ratio the scorer computes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioKind {
    /// Multiset intersection of characters, order ignored
    #[default]
    Quick,
    /// Greedy longest-matching-block sum
    MatchingBlocks,
}

impl RatioKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RatioKind::MatchingBlocks => "matching_blocks",
            RatioKind::Quick => "quick",
        }
    }
}

impl fmt::Display for RatioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RatioKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "matching_blocks" | "matching-blocks" | "blocks" => Ok(RatioKind::MatchingBlocks),
            "quick" => Ok(RatioKind::Quick),
            other => Err(format!(
                "Unknown ratio '{}'. Valid ratios: matching_blocks, quick",
                other
            )),
        }
    }
}

/// Scores a pair of encoded sequences in `[0.0, 1.0]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scorer {
    pub kind: RatioKind,
    pub autojunk: bool,
}

impl Scorer {
    pub fn new(kind: RatioKind, autojunk: bool) -> Self {
        Self { kind, autojunk }
    }

    pub fn similarity(&self, a: &EncodedSequence, b: &EncodedSequence) -> f64 {
        self.similarity_str(a.as_str(), b.as_str())
    }

    /// Score raw text; two empty inputs score 1.0
    pub fn similarity_str(&self, a: &str, b: &str) -> f64 {
        let matcher = SequenceMatcher::with_autojunk(a.as_bytes(), b.as_bytes(), self.autojunk);
        match self.kind {
            RatioKind::MatchingBlocks => matcher.ratio(),
            RatioKind::Quick => matcher.quick_ratio(),
        }
    }
}

/// Score with the default scorer (matching blocks, no autojunk)
pub fn similarity(a: &EncodedSequence, b: &EncodedSequence) -> f64 {
    Scorer::default().similarity(a, b)
}
