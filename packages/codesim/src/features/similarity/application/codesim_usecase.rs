//! Code similarity UseCase Implementation
//!
//! parse (first) → parse (second) → extract leaves → score both channels →
//! combine. Any failure ends the comparison; no partial score is produced.

use tracing::{info, warn};

use crate::config::CodesimConfig;
use crate::errors::{CodesimError, Result};
use crate::features::parsing::ports::{ParseFailure, SourceParser, SyntaxTree};
use crate::features::parsing::TreeSitterParser;
use crate::features::similarity::domain::{score_channels, CombineRule, Scorer, SimilarityReport};
use crate::features::tokenization::{extract_leaves, ExtractOptions, LeafSequence};
use crate::shared::models::Side;

/// Code similarity UseCase Trait
pub trait CodeSimUseCase: Send + Sync {
    /// Compare two sources given as raw bytes
    fn compare(&self, first: &[u8], second: &[u8]) -> Result<SimilarityReport>;

    /// Score two source texts in `[0, 100]`
    fn codesim(&self, code1: &str, code2: &str) -> Result<f64> {
        self.compare(code1.as_bytes(), code2.as_bytes())
            .map(|report| report.score)
    }
}

/// Code similarity UseCase Implementation
#[derive(Debug, Clone)]
pub struct CodeSimUseCaseImpl<P: SourceParser = TreeSitterParser> {
    parser: P,
    scorer: Scorer,
    rule: CombineRule,
    extract: ExtractOptions,
}

impl CodeSimUseCaseImpl<TreeSitterParser> {
    /// Default configuration (C++ grammar, quick ratio, 5s parse guard)
    pub fn new() -> Self {
        Self::configured(&CodesimConfig::default())
    }

    /// Build a tree-sitter backed use case from a validated configuration
    pub fn from_config(config: &CodesimConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::configured(config))
    }

    fn configured(config: &CodesimConfig) -> Self {
        let mut parser = TreeSitterParser::for_language(config.language);
        if let Some(timeout) = config.parse_timeout() {
            parser = parser.with_timeout(timeout);
        }
        Self::with_parser(parser, config)
    }
}

impl Default for CodeSimUseCaseImpl<TreeSitterParser> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: SourceParser> CodeSimUseCaseImpl<P> {
    /// Use any parser satisfying the parser port
    pub fn with_parser(parser: P, config: &CodesimConfig) -> Self {
        Self {
            parser,
            scorer: config.scorer(),
            rule: config.combine_rule(),
            extract: config.extract_options(),
        }
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    fn parse_checked(&self, source: &[u8], side: Side) -> Result<P::Tree> {
        let tree = self.parser.parse(source).map_err(|failure| match failure {
            ParseFailure::TimedOut { timeout_ms } => CodesimError::ParseTimeout { side, timeout_ms },
            ParseFailure::Grammar(msg) => CodesimError::Grammar(msg),
        })?;

        if tree.has_error() {
            warn!(%side, "rejecting input with structural error");
            return Err(CodesimError::StructuralParse { side });
        }
        Ok(tree)
    }

    fn leaves(&self, tree: &P::Tree, source: &[u8], side: Side) -> Result<LeafSequence> {
        extract_leaves(tree.root(), source, self.extract)
            .map_err(|source| CodesimError::Decoding { side, source })
    }
}

impl<P: SourceParser> CodeSimUseCase for CodeSimUseCaseImpl<P> {
    fn compare(&self, first: &[u8], second: &[u8]) -> Result<SimilarityReport> {
        let tree1 = self.parse_checked(first, Side::First)?;
        let tree2 = self.parse_checked(second, Side::Second)?;

        let leaves1 = self.leaves(&tree1, first, Side::First)?;
        let leaves2 = self.leaves(&tree2, second, Side::Second)?;

        let channels = score_channels(&leaves1, &leaves2, &self.scorer);
        let score = self.rule.apply(&channels);

        info!(
            score,
            language = %self.parser.language(),
            first_leaves = leaves1.len(),
            second_leaves = leaves2.len(),
            "comparison complete"
        );

        Ok(SimilarityReport::new(
            score,
            channels,
            self.parser.language(),
            leaves1.len(),
            leaves2.len(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::parsing::ports::SyntaxNodeView;
    use crate::features::parsing::LanguageId;
    use crate::shared::models::ByteSpan;

    const PROGRAM: &str = "int add(int a, int b) {\n    return a + b;\n}\n";

    #[test]
    fn test_identity_scores_full() {
        let usecase = CodeSimUseCaseImpl::new();
        assert_eq!(usecase.codesim(PROGRAM, PROGRAM).unwrap(), 100.0);
    }

    #[test]
    fn test_default_usecase_bounds_parse_time() {
        let usecase = CodeSimUseCaseImpl::new();
        let expected = CodesimConfig::default().parse_timeout();

        assert!(expected.is_some());
        assert_eq!(usecase.parser().timeout(), expected);
        assert_eq!(CodeSimUseCaseImpl::default().parser().timeout(), expected);
    }

    #[test]
    fn test_zero_timeout_config_is_unbounded() {
        let config = CodesimConfig::default().parse_timeout_ms(0);
        let usecase = CodeSimUseCaseImpl::from_config(&config).unwrap();
        assert_eq!(usecase.parser().timeout(), None);
    }

    #[test]
    fn test_empty_inputs_score_full() {
        let usecase = CodeSimUseCaseImpl::new();
        assert_eq!(usecase.codesim("", "").unwrap(), 100.0);
    }

    #[test]
    fn test_broken_first_input() {
        let usecase = CodeSimUseCaseImpl::new();
        let err = usecase.codesim("int main() { return 0; }}}", PROGRAM).unwrap_err();

        assert!(matches!(err, CodesimError::StructuralParse { side: Side::First }));
    }

    #[test]
    fn test_broken_second_input() {
        let usecase = CodeSimUseCaseImpl::new();
        let err = usecase.codesim(PROGRAM, "int main( {{{ return ;").unwrap_err();

        assert_eq!(err.side(), Some(Side::Second));
    }

    #[test]
    fn test_report_details() {
        let usecase = CodeSimUseCaseImpl::new();
        let report = usecase
            .compare(b"int x;", b"int y;")
            .unwrap();

        assert_eq!(report.language, LanguageId::Cpp);
        assert_eq!(report.first_leaves, 3);
        assert_eq!(report.second_leaves, 3);
        assert_eq!(report.type_ratio, 1.0);
        assert_eq!(report.token_vocabulary, 4);
        assert!(report.token_ratio < 1.0);
    }

    // Parser double: one leaf spanning the whole input, error flag on demand

    struct FlatTree {
        len: usize,
        broken: bool,
    }

    #[derive(Clone, Copy)]
    struct FlatNode(usize);

    impl SyntaxNodeView for FlatNode {
        fn grammar_type(&self) -> &str {
            "text"
        }

        fn byte_span(&self) -> ByteSpan {
            ByteSpan::new(0, self.0)
        }

        fn child_nodes(&self) -> Vec<Self> {
            Vec::new()
        }
    }

    impl SyntaxTree for FlatTree {
        type Node<'a> = FlatNode;

        fn root(&self) -> FlatNode {
            FlatNode(self.len)
        }

        fn has_error(&self) -> bool {
            self.broken
        }
    }

    struct FlatParser {
        fail_with: Option<ParseFailure>,
    }

    impl SourceParser for FlatParser {
        type Tree = FlatTree;

        fn parse(&self, source: &[u8]) -> std::result::Result<FlatTree, ParseFailure> {
            if let Some(failure) = &self.fail_with {
                return Err(failure.clone());
            }
            Ok(FlatTree {
                len: source.len(),
                broken: source.starts_with(b"!"),
            })
        }

        fn language(&self) -> LanguageId {
            LanguageId::Cpp
        }
    }

    fn flat(fail_with: Option<ParseFailure>) -> CodeSimUseCaseImpl<FlatParser> {
        CodeSimUseCaseImpl::with_parser(FlatParser { fail_with }, &CodesimConfig::default())
    }

    #[test]
    fn test_first_error_reported_before_second_is_checked() {
        let err = flat(None).compare(b"!bad", b"!also bad").unwrap_err();
        assert_eq!(err.side(), Some(Side::First));
    }

    #[test]
    fn test_timeout_maps_to_side() {
        let usecase = flat(Some(ParseFailure::TimedOut { timeout_ms: 10 }));
        let err = usecase.compare(b"a", b"b").unwrap_err();
        assert!(matches!(
            err,
            CodesimError::ParseTimeout {
                side: Side::First,
                timeout_ms: 10
            }
        ));
    }

    #[test]
    fn test_decoding_error_names_side() {
        let err = flat(None).compare(b"ok", &[0xc3, 0x28]).unwrap_err();
        assert!(matches!(
            err,
            CodesimError::Decoding {
                side: Side::Second,
                ..
            }
        ));
    }

    #[test]
    fn test_whole_text_leaves() {
        let report = flat(None).compare(b"abc", b"abd").unwrap();
        // Same type, distinct single tokens: "0" vs "1"
        assert_eq!(report.type_ratio, 1.0);
        assert_eq!(report.token_ratio, 0.0);
        assert_eq!(report.score, 50.0);
    }
}
