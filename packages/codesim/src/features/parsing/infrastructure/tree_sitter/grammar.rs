//! Immutable grammar handle
//!
//! Constructed once and shared read-only by every comparison (and every
//! worker thread); parsers are created per call from it.

use tree_sitter::Language;

use crate::features::parsing::domain::LanguageId;

/// Loaded tree-sitter grammar for one language
#[derive(Clone)]
pub struct GrammarHandle {
    id: LanguageId,
    language: Language,
}

impl GrammarHandle {
    pub fn new(id: LanguageId) -> Self {
        let language = match id {
            LanguageId::Cpp => tree_sitter_cpp::language(),
            LanguageId::Python => tree_sitter_python::language(),
            LanguageId::Java => tree_sitter_java::language(),
            // JS uses same grammar
            LanguageId::TypeScript | LanguageId::JavaScript => {
                tree_sitter_typescript::language_typescript()
            }
            LanguageId::Kotlin => tree_sitter_kotlin::language(),
            LanguageId::Rust => tree_sitter_rust::language(),
            LanguageId::Go => tree_sitter_go::language(),
        };
        Self { id, language }
    }

    pub fn id(&self) -> LanguageId {
        self.id
    }

    pub fn language(&self) -> &Language {
        &self.language
    }
}

impl std::fmt::Debug for GrammarHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrammarHandle")
            .field("id", &self.id)
            .field("node_kinds", &self.language.node_kind_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_grammar_loads() {
        for id in LanguageId::ALL {
            let grammar = GrammarHandle::new(id);
            assert_eq!(grammar.id(), id);
            assert!(grammar.language().node_kind_count() > 0);
        }
    }

    #[test]
    fn test_handle_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GrammarHandle>();
    }
}
