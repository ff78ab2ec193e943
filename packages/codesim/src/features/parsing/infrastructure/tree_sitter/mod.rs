//! Tree-sitter based parser implementation

mod grammar;
mod parser;

pub use grammar::GrammarHandle;
pub use parser::TreeSitterParser;
