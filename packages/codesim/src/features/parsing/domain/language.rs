//! Grammar identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language identifier
///
/// Selects the grammar used for both sides of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    #[default]
    Cpp,
    Python,
    Java,
    TypeScript,
    JavaScript,
    Kotlin,
    Rust,
    Go,
}

impl LanguageId {
    pub const ALL: [LanguageId; 8] = [
        LanguageId::Cpp,
        LanguageId::Python,
        LanguageId::Java,
        LanguageId::TypeScript,
        LanguageId::JavaScript,
        LanguageId::Kotlin,
        LanguageId::Rust,
        LanguageId::Go,
    ];

    /// Get language name as string
    pub fn name(&self) -> &'static str {
        match self {
            LanguageId::Cpp => "cpp",
            LanguageId::Python => "python",
            LanguageId::Java => "java",
            LanguageId::TypeScript => "typescript",
            LanguageId::JavaScript => "javascript",
            LanguageId::Kotlin => "kotlin",
            LanguageId::Rust => "rust",
            LanguageId::Go => "go",
        }
    }

    /// Get language from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.extensions().contains(&ext.as_str()))
    }

    /// Get supported file extensions
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            LanguageId::Cpp => &["cpp", "cc", "cxx", "c++", "hpp", "hh", "hxx", "h"],
            LanguageId::Python => &["py", "pyi"],
            LanguageId::Java => &["java"],
            LanguageId::TypeScript => &["ts", "tsx"],
            LanguageId::JavaScript => &["js", "jsx", "mjs", "cjs"],
            LanguageId::Kotlin => &["kt", "kts"],
            LanguageId::Rust => &["rs"],
            LanguageId::Go => &["go"],
        }
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a language name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown language '{0}'. Valid languages: cpp, python, java, typescript, javascript, kotlin, rust, go")]
pub struct UnknownLanguage(pub String);

impl FromStr for LanguageId {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cpp" | "c++" | "cxx" => Ok(LanguageId::Cpp),
            "python" | "py" => Ok(LanguageId::Python),
            "java" => Ok(LanguageId::Java),
            "typescript" | "ts" => Ok(LanguageId::TypeScript),
            "javascript" | "js" => Ok(LanguageId::JavaScript),
            "kotlin" | "kt" => Ok(LanguageId::Kotlin),
            "rust" | "rs" => Ok(LanguageId::Rust),
            "go" | "golang" => Ok(LanguageId::Go),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(LanguageId::from_extension("cpp"), Some(LanguageId::Cpp));
        assert_eq!(LanguageId::from_extension("H"), Some(LanguageId::Cpp));
        assert_eq!(LanguageId::from_extension("py"), Some(LanguageId::Python));
        assert_eq!(LanguageId::from_extension("md"), None);
    }

    #[test]
    fn test_name_roundtrip() {
        for lang in LanguageId::ALL {
            assert_eq!(lang.name().parse::<LanguageId>(), Ok(lang));
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("C++".parse::<LanguageId>(), Ok(LanguageId::Cpp));
        assert_eq!("golang".parse::<LanguageId>(), Ok(LanguageId::Go));
        assert!("cobol".parse::<LanguageId>().is_err());
    }

    #[test]
    fn test_default_is_cpp() {
        assert_eq!(LanguageId::default(), LanguageId::Cpp);
    }
}
