//! Parsing ports (interfaces)

mod parser;

pub use parser::{ParseFailure, SourceParser, SyntaxNodeView, SyntaxTree};
