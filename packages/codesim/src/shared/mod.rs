//! Shared module - Common types
//!
//! This module contains types that are shared across all features.
//! It has ZERO external dependencies (no tree-sitter, etc.)

pub mod models;

// Re-exports for convenience
pub use models::*;
