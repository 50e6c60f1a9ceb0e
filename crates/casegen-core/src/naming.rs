//! Naming conventions shared with the file shell and the emitter.
//!
//! - Files: `x.go` <-> `x_testcase.go` (declared cases) -> `x_test.go` (generated test).
//! - Types: `test<Func>Case`, `test<Func>Input`, `test<Func>Output`.

const SOURCE_SUFFIX: &str = ".go";
const TEST_CASE_FILE_SUFFIX: &str = "_testcase.go";
const TEST_FILE_SUFFIX: &str = "_test.go";

const TEST_CASE_PREFIX: &str = "test";
const TEST_CASE_SUFFIX: &str = "Case";
const TEST_CASE_INPUT_SUFFIX: &str = "Input";
const TEST_CASE_OUTPUT_SUFFIX: &str = "Output";

/// `x_testcase.go` -> `x.go`.
#[must_use]
pub fn src_file_name_of(test_case_file: &str) -> Option<String> {
    test_case_file
        .strip_suffix(TEST_CASE_FILE_SUFFIX)
        .map(|stem| format!("{stem}{SOURCE_SUFFIX}"))
}

/// `x.go` -> `x_testcase.go`.
#[must_use]
pub fn test_case_file_name_of(source_file: &str) -> Option<String> {
    source_file
        .strip_suffix(SOURCE_SUFFIX)
        .map(|stem| format!("{stem}{TEST_CASE_FILE_SUFFIX}"))
}

/// `x.go` -> `x_test.go`.
#[must_use]
pub fn test_file_name_of(source_file: &str) -> Option<String> {
    source_file
        .strip_suffix(SOURCE_SUFFIX)
        .map(|stem| format!("{stem}{TEST_FILE_SUFFIX}"))
}

#[must_use]
pub fn test_case_type_name_of(func_name: &str) -> String {
    format!("{TEST_CASE_PREFIX}{func_name}{TEST_CASE_SUFFIX}")
}

#[must_use]
pub fn test_case_input_type_name_of(func_name: &str) -> String {
    format!("{TEST_CASE_PREFIX}{func_name}{TEST_CASE_INPUT_SUFFIX}")
}

#[must_use]
pub fn test_case_output_type_name_of(func_name: &str) -> String {
    format!("{TEST_CASE_PREFIX}{func_name}{TEST_CASE_OUTPUT_SUFFIX}")
}

/// Whether `type_name` is a `test...Case` type.
#[must_use]
pub fn is_test_case(type_name: &str) -> bool {
    has_affixes(type_name, TEST_CASE_SUFFIX)
}

#[must_use]
pub fn is_test_case_input(type_name: &str) -> bool {
    has_affixes(type_name, TEST_CASE_INPUT_SUFFIX)
}

#[must_use]
pub fn is_test_case_output(type_name: &str) -> bool {
    has_affixes(type_name, TEST_CASE_OUTPUT_SUFFIX)
}

/// Function name encoded in a `test<Func>{Case,Input,Output}` type name.
///
/// The first matching suffix among `Case`, `Input`, `Output` is stripped.
/// Returns `None` when the name does not follow the convention.
#[must_use]
pub fn func_name_of(type_name: &str) -> Option<&str> {
    let rest = type_name.strip_prefix(TEST_CASE_PREFIX)?;
    [TEST_CASE_SUFFIX, TEST_CASE_INPUT_SUFFIX, TEST_CASE_OUTPUT_SUFFIX]
        .iter()
        .find_map(|suffix| rest.strip_suffix(suffix))
}

fn has_affixes(type_name: &str, suffix: &str) -> bool {
    type_name.starts_with(TEST_CASE_PREFIX) && type_name.ends_with(suffix)
}
