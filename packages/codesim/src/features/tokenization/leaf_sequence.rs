//! Leaf streams of one tree

use serde::Serialize;

/// Leaf text values and leaf grammar types of one tree
///
/// Both vectors always have the same length: index `i` of each describes
/// the same leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeafSequence {
    tokens: Vec<String>,
    types: Vec<String>,
}

impl LeafSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: impl Into<String>, grammar_type: impl Into<String>) {
        self.tokens.push(token.into());
        self.types.push(grammar_type.into());
    }

    /// Decoded leaf texts
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Leaf grammar-type tags
    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
