/*
 * codesim - Structural Code Similarity
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Side, ByteSpan)
 * - features/    : Vertical slices (parsing → tokenization → similarity)
 * - config/      : Presets, YAML and environment overrides
 * - api/         : Plain functions over strings, bytes and paths
 *
 * Performance:
 * - Iterative leaf traversal (no recursion limit)
 * - Rayon work-stealing for batch comparisons
 */

// Crate-level lint configuration
#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models
pub mod shared;

/// Feature modules (L1-L3 pipeline stages)
pub mod features;

/// Configuration system
pub mod config;

/// Language-agnostic Core API
pub mod api;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use api::{codesim, codesim_bytes, compare_files, compare_inputs, compare_with};
pub use config::{CodesimConfig, Preset};
pub use errors::{CodesimError, Result};
pub use features::parsing::LanguageId;
pub use features::similarity::{
    compare_batch, BatchOutput, BatchStats, CodeSimUseCase, CodeSimUseCaseImpl, RatioKind,
    SimilarityReport,
};
pub use shared::models::Side;
