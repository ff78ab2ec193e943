//! Parsing Feature (L1)
//!
//! Turns source bytes into a concrete syntax tree for one fixed grammar.
//!
//! ## Structure
//! - `domain/` - LanguageId
//! - `ports/` - SourceParser, SyntaxTree and SyntaxNodeView traits
//! - `infrastructure/` - TreeSitterParser, GrammarHandle

pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use domain::LanguageId;

pub use infrastructure::{GrammarHandle, TreeSitterParser};
pub use ports::{ParseFailure, SourceParser, SyntaxNodeView, SyntaxTree};
