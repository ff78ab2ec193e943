//! Parser port (interface)
//!
//! The contract the similarity core consumes from a grammar-aware parser:
//! a tree of nodes, each with a grammar-type tag, a byte span and ordered
//! children, plus a structural-error flag on the tree.

use crate::features::parsing::domain::LanguageId;
use crate::shared::models::ByteSpan;

/// Read-only view of one syntax node
pub trait SyntaxNodeView: Sized {
    /// Grammar-type tag (e.g. "identifier", "string_literal")
    fn grammar_type(&self) -> &str;

    /// Byte range `[start, end)` into the parsed source
    fn byte_span(&self) -> ByteSpan;

    /// Children in source order
    fn child_nodes(&self) -> Vec<Self>;

    /// Nodes the grammar allows anywhere (comments and the like)
    fn is_extra_node(&self) -> bool {
        false
    }
}

/// A parsed concrete syntax tree
pub trait SyntaxTree {
    type Node<'a>: SyntaxNodeView
    where
        Self: 'a;

    fn root(&self) -> Self::Node<'_>;

    /// Whether the parse hit a structural error anywhere in the tree
    fn has_error(&self) -> bool;
}

/// Why a parse produced no tree at all
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFailure {
    /// The bounded-time guard cancelled the parse
    #[error("parse exceeded {timeout_ms} ms")]
    TimedOut { timeout_ms: u64 },

    /// The grammar could not be installed into the parser
    #[error("grammar error: {0}")]
    Grammar(String),
}

/// Parser trait - abstraction over parsing implementation
pub trait SourceParser: Send + Sync {
    type Tree: SyntaxTree;

    /// Parse source bytes into a tree
    fn parse(&self, source: &[u8]) -> Result<Self::Tree, ParseFailure>;

    /// Grammar this parser is bound to
    fn language(&self) -> LanguageId;
}
