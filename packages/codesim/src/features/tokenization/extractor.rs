//! Leaf extractor
//!
//! Walks the tree depth-first, pre-order, children in order. A node with no
//! children is a leaf and contributes its source text and grammar type;
//! internal nodes contribute nothing. The walk uses an explicit stack so deep
//! or adversarial trees cannot exhaust the call stack.

use std::str::Utf8Error;

use tracing::trace;

use super::LeafSequence;
use crate::features::parsing::ports::SyntaxNodeView;
use crate::shared::models::ByteSpan;

/// Extraction options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Count extra nodes (comments) as leaves
    pub include_extras: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            include_extras: true,
        }
    }
}

/// A leaf's byte span could not be turned into text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeafDecodeError {
    #[error("leaf bytes {span} are not valid UTF-8: {source}")]
    InvalidUtf8 {
        span: ByteSpan,
        #[source]
        source: Utf8Error,
    },

    #[error("leaf span {span} lies outside the {len}-byte source")]
    OutOfBounds { span: ByteSpan, len: usize },
}

impl LeafDecodeError {
    pub fn span(&self) -> ByteSpan {
        match self {
            LeafDecodeError::InvalidUtf8 { span, .. } | LeafDecodeError::OutOfBounds { span, .. } => {
                *span
            }
        }
    }
}

/// Extract `(tokens, types)` from the tree rooted at `root`
///
/// `source` must be the exact bytes the tree was parsed from.
pub fn extract_leaves<N: SyntaxNodeView>(
    root: N,
    source: &[u8],
    options: ExtractOptions,
) -> Result<LeafSequence, LeafDecodeError> {
    let mut leaves = LeafSequence::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        let children = node.child_nodes();

        if children.is_empty() {
            let span = node.byte_span();
            let text = decode_span(source, span)?;
            leaves.push(text, node.grammar_type());
            continue;
        }

        // Reverse so the first child is popped first
        for child in children.into_iter().rev() {
            if !options.include_extras && child.is_extra_node() {
                continue;
            }
            stack.push(child);
        }
    }

    trace!(leaves = leaves.len(), "extracted leaves");
    Ok(leaves)
}

fn decode_span(source: &[u8], span: ByteSpan) -> Result<&str, LeafDecodeError> {
    let bytes = source
        .get(span.range())
        .ok_or(LeafDecodeError::OutOfBounds {
            span,
            len: source.len(),
        })?;
    std::str::from_utf8(bytes).map_err(|source| LeafDecodeError::InvalidUtf8 { span, source })
}
