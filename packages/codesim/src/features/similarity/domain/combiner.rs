//! Two-channel combination
//!
//! Runs encoder + scorer once over the type tags and once over the token
//! texts, with independent vocabularies, then folds both ratios into one
//! score: `round(type_ratio + token_ratio, 3) * 50`.

use tracing::debug;

use super::scorer::Scorer;
use super::vocabulary::encode_pair;
use crate::features::tokenization::LeafSequence;

/// Decimal places the ratio sum is rounded to
pub const DEFAULT_PRECISION: u32 = 3;

/// Factor applied after rounding; two ratios in [0, 1] map onto [0, 100]
pub const DEFAULT_SCALE: f64 = 50.0;

/// Per-channel ratios for one pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelScores {
    pub type_ratio: f64,
    pub token_ratio: f64,
    pub type_vocabulary: usize,
    pub token_vocabulary: usize,
}

/// Score the type channel and the token channel of two leaf sequences
pub fn score_channels(first: &LeafSequence, second: &LeafSequence, scorer: &Scorer) -> ChannelScores {
    let types = encode_pair(first.types(), second.types());
    let type_ratio = scorer.similarity(&types.first, &types.second);

    let tokens = encode_pair(first.tokens(), second.tokens());
    let token_ratio = scorer.similarity(&tokens.first, &tokens.second);

    debug!(
        type_ratio,
        token_ratio,
        type_vocabulary = types.vocabulary_size,
        token_vocabulary = tokens.vocabulary_size,
        "scored channels"
    );

    ChannelScores {
        type_ratio,
        token_ratio,
        type_vocabulary: types.vocabulary_size,
        token_vocabulary: tokens.vocabulary_size,
    }
}

/// Folds the two channel ratios into the final score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombineRule {
    pub precision: u32,
    pub scale: f64,
}

impl Default for CombineRule {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            scale: DEFAULT_SCALE,
        }
    }
}

impl CombineRule {
    pub fn new(precision: u32, scale: f64) -> Self {
        Self { precision, scale }
    }

    /// Round the *sum* first, then scale
    pub fn combine(&self, type_ratio: f64, token_ratio: f64) -> f64 {
        round_to(type_ratio + token_ratio, self.precision) * self.scale
    }

    pub fn apply(&self, scores: &ChannelScores) -> f64 {
        self.combine(scores.type_ratio, scores.token_ratio)
    }
}

/// Round to `digits` decimal places, correctly rounded from the exact binary value
///
/// Goes through decimal formatting so that e.g. `2.675` (stored as
/// 2.67499999...) rounds down to `2.67`, as a decimal-exact rounding does.
pub fn round_to(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", digits as usize, value)
        .parse()
        .unwrap_or(value)
}
