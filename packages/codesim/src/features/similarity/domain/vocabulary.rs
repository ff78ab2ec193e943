//! Vocabulary encoding
//!
//! Maps the distinct values of two sequences onto one shared alphabet of
//! small integers so the scorer compares codes, not raw strings. Codes are
//! ranks in the sorted union; they mean nothing outside the pair they were
//! built from.

use std::collections::BTreeMap;
use std::fmt::Write;

/// Shared, sorted, deduplicated vocabulary of two sequences
#[derive(Debug, Clone)]
pub struct Vocabulary<'a, T: Ord> {
    codes: BTreeMap<&'a T, usize>,
}

impl<'a, T: Ord> Vocabulary<'a, T> {
    /// Build from the union of both sequences' values
    pub fn build(seq_a: &'a [T], seq_b: &'a [T]) -> Self {
        let mut codes: BTreeMap<&'a T, usize> =
            seq_a.iter().chain(seq_b).map(|value| (value, 0)).collect();

        // BTreeMap iterates in sorted order: rank == code
        for (rank, code) in codes.values_mut().enumerate() {
            *code = rank;
        }

        Self { codes }
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn code(&self, value: &T) -> Option<usize> {
        self.codes.get(value).copied()
    }

    /// Render `seq` as space-joined decimal codes
    ///
    /// Values missing from the vocabulary are skipped; that only happens
    /// when `seq` was not one of the sequences the vocabulary was built from.
    pub fn encode(&self, seq: &[T]) -> EncodedSequence {
        let mut rendered = String::with_capacity(seq.len() * 3);
        for code in seq.iter().filter_map(|value| self.code(value)) {
            if !rendered.is_empty() {
                rendered.push(' ');
            }
            // Writing to a String cannot fail
            let _ = write!(rendered, "{}", code);
        }
        EncodedSequence(rendered)
    }
}

/// A sequence of vocabulary codes rendered as whitespace-joined decimal text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodedSequence(String);

impl EncodedSequence {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Length in characters (the unit the scorer works on)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for EncodedSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Both sides of one channel encoded under one vocabulary
#[derive(Debug, Clone)]
pub struct EncodedPair {
    pub first: EncodedSequence,
    pub second: EncodedSequence,
    /// Number of distinct values across both sides
    pub vocabulary_size: usize,
}

/// Encode two sequences under their shared vocabulary
pub fn encode_pair<T: Ord>(seq_a: &[T], seq_b: &[T]) -> EncodedPair {
    let vocabulary = Vocabulary::build(seq_a, seq_b);
    EncodedPair {
        first: vocabulary.encode(seq_a),
        second: vocabulary.encode(seq_b),
        vocabulary_size: vocabulary.len(),
    }
}
