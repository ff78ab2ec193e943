//! End-to-end comparisons through the public API

mod common;

use std::path::PathBuf;

use codesim::{
    codesim, compare_batch, compare_files, compare_inputs, compare_with, CodeSimUseCase,
    CodeSimUseCaseImpl, CodesimConfig, CodesimError, LanguageId, Side,
};
use common::{write_source, BROKEN, PROGRAM_A, PROGRAM_A_RENAMED, PROGRAM_B};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn test_identical_programs_score_100() {
    assert_eq!(codesim(PROGRAM_A, PROGRAM_A).unwrap(), 100.0);
    assert_eq!(codesim(PROGRAM_B, PROGRAM_B).unwrap(), 100.0);
}

#[test]
fn test_rename_scores_above_unrelated() {
    let renamed = codesim(PROGRAM_A, PROGRAM_A_RENAMED).unwrap();
    let unrelated = codesim(PROGRAM_A, PROGRAM_B).unwrap();

    assert!(renamed < 100.0, "renamed = {}", renamed);
    assert!(renamed > unrelated, "renamed = {}, unrelated = {}", renamed, unrelated);
    assert!(unrelated >= 0.0);
}

#[test]
fn test_rename_keeps_type_channel() {
    let report = compare_with(
        &CodesimConfig::default(),
        PROGRAM_A.as_bytes(),
        PROGRAM_A_RENAMED.as_bytes(),
    )
    .unwrap();

    assert_eq!(report.type_ratio, 1.0);
    assert!(report.token_ratio < 1.0);
    assert_eq!(report.first_leaves, report.second_leaves);
    assert_eq!(report.language, LanguageId::Cpp);
}

#[test]
fn test_structural_error_names_side() {
    let err = codesim(PROGRAM_A, BROKEN).unwrap_err();
    assert_eq!(err.side(), Some(Side::Second));
    assert_eq!(err.to_string(), "The second code has a structural error");

    let err = codesim(BROKEN, PROGRAM_A).unwrap_err();
    assert_eq!(err.side(), Some(Side::First));
    assert_eq!(err.to_string(), "The first code has a structural error");
}

#[test]
fn test_first_side_checked_first() {
    let err = codesim(BROKEN, BROKEN).unwrap_err();
    assert_eq!(err.side(), Some(Side::First));
}

#[test]
fn test_empty_sources() {
    assert_eq!(codesim("", "").unwrap(), 100.0);
}

#[test]
fn test_deterministic() {
    let usecase = CodeSimUseCaseImpl::new();
    let first = usecase
        .compare(PROGRAM_A.as_bytes(), PROGRAM_B.as_bytes())
        .unwrap();
    for _ in 0..5 {
        let again = usecase
            .compare(PROGRAM_A.as_bytes(), PROGRAM_B.as_bytes())
            .unwrap();
        assert_eq!(again, first);
    }
}

#[test]
fn test_compare_inputs_arity() {
    let config = CodesimConfig::default();
    let err = compare_inputs(&[PathBuf::from("only.cpp")], &config).unwrap_err();
    assert!(err.is_usage());
    assert_eq!(err.to_string(), "Requires 2 input paths, got 1");
}

#[test]
fn test_compare_files() {
    let dir = TempDir::new().unwrap();
    let first = write_source(&dir, "a.cpp", PROGRAM_A);
    let second = write_source(&dir, "a_copy.cpp", PROGRAM_A);

    let report = compare_files(&first, &second, &CodesimConfig::default()).unwrap();
    assert_eq!(report.score, 100.0);

    let report = compare_inputs(&[first, second], &CodesimConfig::default()).unwrap();
    assert_eq!(report.score, 100.0);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let first = write_source(&dir, "a.cpp", PROGRAM_A);
    let missing = dir.path().join("nope.cpp");

    let err = compare_files(&first, &missing, &CodesimConfig::default()).unwrap_err();
    match err {
        CodesimError::Io { path, .. } => assert_eq!(path, missing),
        other => panic!("expected io error, got {:?}", other),
    }
}

#[test]
fn test_python_grammar() {
    let config = CodesimConfig::default().language(LanguageId::Python);
    let code = b"def f(x):\n    return x + 1\n";
    let report = compare_with(&config, code, code).unwrap();
    assert_eq!(report.score, 100.0);
    assert_eq!(report.language, LanguageId::Python);
}

#[test]
fn test_batch_preserves_order() {
    let dir = TempDir::new().unwrap();
    let a = write_source(&dir, "a.cpp", PROGRAM_A);
    let renamed = write_source(&dir, "renamed.cpp", PROGRAM_A_RENAMED);
    let broken = write_source(&dir, "broken.cpp", BROKEN);

    let usecase = CodeSimUseCaseImpl::new();
    let pairs = vec![
        (a.clone(), a.clone()),
        (a.clone(), renamed.clone()),
        (broken, a.clone()),
    ];
    let output = compare_batch(&usecase, &pairs);

    assert_eq!(output.results[0].as_ref().unwrap().score, 100.0);
    assert_eq!(
        output.results[1].as_ref().unwrap().score,
        codesim(PROGRAM_A, PROGRAM_A_RENAMED).unwrap()
    );
    assert_eq!(
        output.results[2].as_ref().unwrap_err().side(),
        Some(Side::First)
    );
    assert_eq!(output.stats.succeeded, 2);
    assert_eq!(output.stats.failed, 1);
}
