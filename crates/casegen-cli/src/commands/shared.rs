//! Loading helpers shared by the command handlers.

use std::path::{Path, PathBuf};

use anyhow::Context;
use casegen_core::naming::test_case_file_name_of;
use casegen_core::{
    ExtractOptions, SignatureUnit, TestCaseUnit, extract_signatures, extract_test_cases,
};
use casegen_parser::{ParsedSource, parse_file};

pub fn parse(path: &Path) -> anyhow::Result<ParsedSource> {
    parse_file(path).with_context(|| format!("failed to parse {}", path.display()))
}

pub fn load_signatures(path: &Path, options: &ExtractOptions) -> anyhow::Result<SignatureUnit> {
    let parsed = parse(path)?;
    extract_signatures(&parsed.unit, &parsed.resolver, options)
        .with_context(|| format!("failed to extract signatures from {}", path.display()))
}

pub fn load_test_cases(path: &Path, options: &ExtractOptions) -> anyhow::Result<TestCaseUnit> {
    let parsed = parse(path)?;
    extract_test_cases(&parsed.unit, &parsed.resolver, options)
        .with_context(|| format!("failed to extract test cases from {}", path.display()))
}

/// The `_testcase.go` companion of `source`, if it exists on disk.
pub fn companion_cases_path(source: &Path) -> Option<PathBuf> {
    let companion = PathBuf::from(test_case_file_name_of(source.to_str()?)?);
    companion.is_file().then_some(companion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn companion_requires_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("two_sum.go");
        assert_eq!(companion_cases_path(&source), None);

        std::fs::write(dir.path().join("two_sum_testcase.go"), "package p\n").unwrap();
        assert_eq!(
            companion_cases_path(&source),
            Some(dir.path().join("two_sum_testcase.go"))
        );
    }

    #[test]
    fn non_go_source_has_no_companion() {
        assert_eq!(companion_cases_path(Path::new("notes.txt")), None);
    }
}
