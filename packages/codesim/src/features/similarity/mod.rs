//! Code Similarity (L3)
//!
//! Two-channel similarity score between two sources of one language.
//!
//! # Hexagonal Architecture
//!
//! ```text
//! External (api / CLI)
//!           ↓
//! application/ (UseCase - entry point, batch)
//!           ↓
//! domain/ (vocabulary, sequence matcher, combination rule)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use codesim::features::similarity::{CodeSimUseCase, CodeSimUseCaseImpl};
//!
//! let usecase = CodeSimUseCaseImpl::new();
//! let score = usecase.codesim("int x;", "int y;")?;
//! ```

pub mod application; // UseCase layer (entry point)
pub mod domain;

// Re-export application layer (primary interface)
pub use application::{
    compare_batch, read_source, BatchOutput, BatchStats, CodeSimUseCase, CodeSimUseCaseImpl,
};

// Re-export domain types
pub use domain::{
    encode_pair, similarity, CombineRule, EncodedSequence, RatioKind, Scorer, SimilarityReport,
    Vocabulary,
};
