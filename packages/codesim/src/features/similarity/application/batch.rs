//! Batch comparison
//!
//! Each pair is compared independently; one pair's failure never affects
//! another. With the `parallel` feature the pairs run on the rayon pool,
//! sharing only the read-only use case (and its grammar handle).

use std::path::{Path, PathBuf};
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::info;

use super::codesim_usecase::CodeSimUseCase;
use crate::errors::{CodesimError, Result};
use crate::features::similarity::domain::SimilarityReport;

/// Read one input file as raw bytes
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| CodesimError::io(path, e))
}

/// Output from a batch comparison, in input order
#[derive(Debug)]
pub struct BatchOutput {
    pub results: Vec<Result<SimilarityReport>>,
    pub stats: BatchStats,
}

/// Batch statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub total_pairs: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub execution_time_ms: u64,
}

impl BatchStats {
    fn from_results(results: &[Result<SimilarityReport>], elapsed_ms: u64) -> Self {
        let succeeded = results.iter().filter(|r| r.is_ok()).count();
        Self {
            total_pairs: results.len(),
            succeeded,
            failed: results.len() - succeeded,
            execution_time_ms: elapsed_ms,
        }
    }
}

fn compare_pair<U: CodeSimUseCase + ?Sized>(
    usecase: &U,
    first: &Path,
    second: &Path,
) -> Result<SimilarityReport> {
    let code1 = read_source(first)?;
    let code2 = read_source(second)?;
    usecase.compare(&code1, &code2)
}

/// Compare every `(first, second)` file pair
pub fn compare_batch<U: CodeSimUseCase + ?Sized>(
    usecase: &U,
    pairs: &[(PathBuf, PathBuf)],
) -> BatchOutput {
    let start = Instant::now();

    #[cfg(feature = "parallel")]
    let results: Vec<Result<SimilarityReport>> = pairs
        .par_iter()
        .map(|(first, second)| compare_pair(usecase, first, second))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results: Vec<Result<SimilarityReport>> = pairs
        .iter()
        .map(|(first, second)| compare_pair(usecase, first, second))
        .collect();

    let stats = BatchStats::from_results(&results, start.elapsed().as_millis() as u64);
    info!(
        total = stats.total_pairs,
        failed = stats.failed,
        elapsed_ms = stats.execution_time_ms,
        "batch comparison complete"
    );

    BatchOutput { results, stats }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::similarity::application::CodeSimUseCaseImpl;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_failures_are_isolated() {
        let dir = TempDir::new().unwrap();
        let good = write(&dir, "good.cpp", "int main() { return 0; }\n");
        let broken = write(&dir, "broken.cpp", "int main() { return 0; }}}\n");
        let missing = dir.path().join("missing.cpp");

        let usecase = CodeSimUseCaseImpl::new();
        let output = compare_batch(
            &usecase,
            &[
                (good.clone(), good.clone()),
                (good.clone(), broken),
                (missing, good),
            ],
        );

        assert_eq!(output.results.len(), 3);
        assert_eq!(output.results[0].as_ref().unwrap().score, 100.0);
        assert!(matches!(
            output.results[1],
            Err(CodesimError::StructuralParse { .. })
        ));
        assert!(matches!(output.results[2], Err(CodesimError::Io { .. })));

        assert_eq!(output.stats.total_pairs, 3);
        assert_eq!(output.stats.succeeded, 1);
        assert_eq!(output.stats.failed, 2);
    }

    #[test]
    fn test_empty_batch() {
        let output = compare_batch(&CodeSimUseCaseImpl::new(), &[]);
        assert!(output.results.is_empty());
        assert_eq!(output.stats.total_pairs, 0);
    }
}
