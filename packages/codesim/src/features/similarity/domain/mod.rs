//! Similarity domain: vocabulary encoding, sequence scoring, combination

mod combiner;
mod report;
mod scorer;
pub mod sequence_matcher;
mod vocabulary;

pub use combiner::{
    round_to, score_channels, ChannelScores, CombineRule, DEFAULT_PRECISION, DEFAULT_SCALE,
};
pub use report::{format_score, SimilarityReport};
pub use scorer::{similarity, RatioKind, Scorer};
pub use sequence_matcher::{Match, SequenceMatcher};
pub use vocabulary::{encode_pair, EncodedPair, EncodedSequence, Vocabulary};
