//! Comparison result

use serde::Serialize;

use super::combiner::ChannelScores;
use crate::features::parsing::LanguageId;

/// Outcome of comparing two sources
///
/// `score` is the only value the comparison promises; the rest explains it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityReport {
    /// Final score in `[0, 100]`
    pub score: f64,
    pub type_ratio: f64,
    pub token_ratio: f64,
    pub language: LanguageId,
    pub first_leaves: usize,
    pub second_leaves: usize,
    pub type_vocabulary: usize,
    pub token_vocabulary: usize,
}

impl SimilarityReport {
    pub fn new(
        score: f64,
        channels: ChannelScores,
        language: LanguageId,
        first_leaves: usize,
        second_leaves: usize,
    ) -> Self {
        Self {
            score,
            type_ratio: channels.type_ratio,
            token_ratio: channels.token_ratio,
            language,
            first_leaves,
            second_leaves,
            type_vocabulary: channels.type_vocabulary,
            token_vocabulary: channels.token_vocabulary,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// The score as printed text: shortest round-trip digits, always with a fraction
    pub fn score_text(&self) -> String {
        format_score(self.score)
    }
}

/// Format a score so integral values keep one decimal (`100.0`, not `100`)
pub fn format_score(score: f64) -> String {
    if score.is_finite() && score.fract() == 0.0 {
        format!("{:.1}", score)
    } else {
        score.to_string()
    }
}
