//! Tree-sitter parser implementation
//!
//! This is where tree-sitter dependency lives.

use std::time::Duration;

use tree_sitter::{Node, Parser as TSParser, Tree};

use super::grammar::GrammarHandle;
use crate::features::parsing::domain::LanguageId;
use crate::features::parsing::ports::{ParseFailure, SourceParser, SyntaxNodeView, SyntaxTree};
use crate::shared::models::ByteSpan;

/// Tree-sitter based parser
#[derive(Debug, Clone)]
pub struct TreeSitterParser {
    grammar: GrammarHandle,
    /// 0 disables the guard
    timeout_micros: u64,
}

impl TreeSitterParser {
    pub fn new(grammar: GrammarHandle) -> Self {
        Self {
            grammar,
            timeout_micros: 0,
        }
    }

    /// Create a parser for a language with no timeout
    pub fn for_language(id: LanguageId) -> Self {
        Self::new(GrammarHandle::new(id))
    }

    /// Create a C++ parser
    pub fn cpp() -> Self {
        Self::for_language(LanguageId::Cpp)
    }

    /// Bound the time a single parse may take; `Duration::ZERO` removes the bound
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_micros = u64::try_from(timeout.as_micros()).unwrap_or(u64::MAX);
        if self.timeout_micros == 0 && !timeout.is_zero() {
            self.timeout_micros = 1;
        }
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_micros > 0).then(|| Duration::from_micros(self.timeout_micros))
    }

    pub fn grammar(&self) -> &GrammarHandle {
        &self.grammar
    }
}

impl SourceParser for TreeSitterParser {
    type Tree = Tree;

    fn parse(&self, source: &[u8]) -> Result<Tree, ParseFailure> {
        let mut parser = TSParser::new();
        parser
            .set_language(self.grammar.language())
            .map_err(|e| ParseFailure::Grammar(format!("Failed to set language: {}", e)))?;

        if self.timeout_micros > 0 {
            parser.set_timeout_micros(self.timeout_micros);
        }

        // With a language installed, the only way to get no tree is cancellation
        parser.parse(source, None).ok_or(ParseFailure::TimedOut {
            timeout_ms: self.timeout_micros.div_ceil(1000),
        })
    }

    fn language(&self) -> LanguageId {
        self.grammar.id()
    }
}

impl SyntaxTree for Tree {
    type Node<'a> = Node<'a>;

    fn root(&self) -> Node<'_> {
        self.root_node()
    }

    fn has_error(&self) -> bool {
        self.root_node().has_error()
    }
}

impl<'tree> SyntaxNodeView for Node<'tree> {
    fn grammar_type(&self) -> &str {
        self.kind()
    }

    fn byte_span(&self) -> ByteSpan {
        ByteSpan::new(self.start_byte(), self.end_byte())
    }

    fn child_nodes(&self) -> Vec<Node<'tree>> {
        let mut cursor = self.walk();
        self.children(&mut cursor).collect()
    }

    fn is_extra_node(&self) -> bool {
        self.is_extra()
    }
}
