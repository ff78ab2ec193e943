//! Language-Agnostic Core API
//!
//! Plain functions over strings, bytes and paths. Every call builds its own
//! use case, so nothing is shared between comparisons.

use std::path::{Path, PathBuf};

use crate::config::CodesimConfig;
use crate::errors::{CodesimError, Result};
use crate::features::similarity::{read_source, CodeSimUseCase, CodeSimUseCaseImpl, SimilarityReport};

/// Number of inputs a comparison takes
pub const REQUIRED_INPUTS: usize = 2;

/// Similarity of two C++ sources in `[0, 100]`
///
/// # Example
/// ```
/// let score = codesim::codesim("int x;", "int x;").unwrap();
/// assert_eq!(score, 100.0);
/// ```
pub fn codesim(code1: &str, code2: &str) -> Result<f64> {
    CodeSimUseCaseImpl::new().codesim(code1, code2)
}

/// Same as [`codesim`] for raw bytes
pub fn codesim_bytes(code1: &[u8], code2: &[u8]) -> Result<f64> {
    CodeSimUseCaseImpl::new()
        .compare(code1, code2)
        .map(|report| report.score)
}

/// Full report for two sources under an explicit configuration
pub fn compare_with(config: &CodesimConfig, code1: &[u8], code2: &[u8]) -> Result<SimilarityReport> {
    CodeSimUseCaseImpl::from_config(config)?.compare(code1, code2)
}

/// Compare two files
pub fn compare_files(first: &Path, second: &Path, config: &CodesimConfig) -> Result<SimilarityReport> {
    let usecase = CodeSimUseCaseImpl::from_config(config)?;
    let code1 = read_source(first)?;
    let code2 = read_source(second)?;
    usecase.compare(&code1, &code2)
}

/// Compare the inputs named on a command line
///
/// Fails with [`CodesimError::Usage`] unless exactly two paths are given;
/// that check runs before any file is read.
pub fn compare_inputs(inputs: &[PathBuf], config: &CodesimConfig) -> Result<SimilarityReport> {
    match inputs {
        [first, second] => compare_files(first, second, config),
        _ => Err(CodesimError::Usage {
            expected: REQUIRED_INPUTS,
            found: inputs.len(),
        }),
    }
}
