//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains (where it needs them):
//! - domain/     - Pure business logic (no external dependencies)
//! - ports/      - Interface definitions (traits)
//! - application/ - Use cases
//! - infrastructure/ - External dependency implementations

// L1: Source bytes -> concrete syntax tree
pub mod parsing;

// L2: Syntax tree -> parallel leaf token / leaf type streams
pub mod tokenization;

// L3: Vocabulary encoding, quick-ratio scoring, two-channel combination
pub mod similarity;
