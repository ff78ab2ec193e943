//! Tokenization Feature (L2)
//!
//! Reduces a syntax tree to two synchronized leaf streams: the source text
//! of every leaf and its grammar-type tag, in pre-order.

mod extractor;
mod leaf_sequence;

pub use extractor::{extract_leaves, ExtractOptions, LeafDecodeError};
pub use leaf_sequence::LeafSequence;
