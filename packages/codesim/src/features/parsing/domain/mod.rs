//! Parsing domain models

mod language;

pub use language::{LanguageId, UnknownLanguage};
