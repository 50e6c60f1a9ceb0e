//! Parse Go fixtures and run them through extraction and correlation.

use std::path::Path;

use casegen_core::{
    CoreError, Correlation, ExtractOptions, Field, correlate, extract_signatures,
    extract_test_cases,
};
use casegen_parser::{ParserError, parse_file, parse_go};
use pretty_assertions::assert_eq;

const SAMPLE: &str = include_str!("fixtures/sample.go");
const SAMPLE_CASES: &str = include_str!("fixtures/sample_testcase.go");

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn tagged_functions_become_signatures() {
    let parsed = parse_go(SAMPLE).unwrap();
    let unit =
        extract_signatures(&parsed.unit, &parsed.resolver, &ExtractOptions::default()).unwrap();

    let names: Vec<&str> = unit
        .signatures
        .iter()
        .map(|s| s.function_name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["add", "divide", "swap", "hello", "Map", "sum", "countIslands", "Push"]
    );
}

#[test]
fn signature_fields_are_rendered() {
    let parsed = parse_go(SAMPLE).unwrap();
    let unit =
        extract_signatures(&parsed.unit, &parsed.resolver, &ExtractOptions::default()).unwrap();

    let divide = unit.find("divide").unwrap();
    assert_eq!(divide.params, vec![Field::new("a", "int"), Field::new("b", "int")]);
    assert_eq!(divide.results, vec![Field::new("q", "int"), Field::new("r", "int")]);

    let swap = unit.find("swap").unwrap();
    assert_eq!(
        swap.results,
        vec![Field::new("field0", "string"), Field::new("field1", "string")]
    );

    let sum = unit.find("sum").unwrap();
    assert_eq!(sum.params, vec![Field::new("nums", "[]int")]);

    let islands = unit.find("countIslands").unwrap();
    assert_eq!(islands.params, vec![Field::new("grid", "[][]byte")]);

    let hello = unit.find("hello").unwrap();
    assert!(hello.params.is_empty());
    assert!(hello.results.is_empty());
}

#[test]
fn generic_signature_filters_per_side() {
    let parsed = parse_go(SAMPLE).unwrap();
    let unit =
        extract_signatures(&parsed.unit, &parsed.resolver, &ExtractOptions::default()).unwrap();

    let map = unit.find("Map").unwrap();
    assert_eq!(map.generics, vec![Field::new("T", "any"), Field::new("U", "any")]);
    assert_eq!(map.param_generics(), map.generics);
    assert_eq!(map.result_generics(), vec![Field::new("U", "any")]);
    assert_eq!(map.results, vec![Field::new("field0", "[]U")]);
}

#[test]
fn test_case_values_group_by_function() {
    let parsed = parse_go(SAMPLE_CASES).unwrap();
    let unit =
        extract_test_cases(&parsed.unit, &parsed.resolver, &ExtractOptions::default()).unwrap();

    assert_eq!(unit.namespace, "arithmetic");
    assert_eq!(unit.groups.len(), 2);

    let add = &unit.groups[0];
    assert_eq!(add.function_name, "Add");
    let described: Vec<(&str, &str)> = add
        .cases
        .iter()
        .map(|c| (c.name.as_str(), c.description.as_str()))
        .collect();
    assert_eq!(
        described,
        vec![
            ("basic", "adds two positives"),
            ("negativeNumbers", "negative numbers"),
            ("rawName", r#"say \"hi\""#),
            ("annotated", "annotated"),
            ("built", "built"),
        ]
    );

    let divide = &unit.groups[1];
    assert_eq!(divide.function_name, "Divide");
    assert_eq!(divide.cases[0].description, "divide by one");
}

#[test]
fn description_key_is_configurable() {
    let parsed = parse_go(SAMPLE_CASES).unwrap();
    let options = ExtractOptions {
        description_key: "title".to_string(),
        ..ExtractOptions::default()
    };
    let unit = extract_test_cases(&parsed.unit, &parsed.resolver, &options).unwrap();
    assert_eq!(unit.groups[0].cases[0].description, "basic");
}

#[test]
fn fixtures_correlate_fully() {
    let source = parse_go(SAMPLE).unwrap();
    let cases = parse_go(SAMPLE_CASES).unwrap();
    let options = ExtractOptions::default();

    let signatures = extract_signatures(&source.unit, &source.resolver, &options).unwrap();
    let test_cases = extract_test_cases(&cases.unit, &cases.resolver, &options).unwrap();
    let unit = correlate(&signatures, &test_cases).unwrap();

    assert_eq!(unit.pairs.len(), 2);
    assert_eq!(unit.unmatched().count(), 0);
    assert_eq!(unit.group_for("add").map(|g| g.cases.len()), Some(5));
    assert!(matches!(
        &unit.pairs[1],
        Correlation::Matched { signature, .. } if signature.function_name == "divide"
    ));
}

#[test]
fn cases_without_signature_stay_unmatched() {
    let source = parse_go(
        "package arithmetic\n\n// @lc code=start\nfunc add(x, y int) int { return x + y }\n",
    )
    .unwrap();
    let cases = parse_go(SAMPLE_CASES).unwrap();
    let options = ExtractOptions::default();

    let signatures = extract_signatures(&source.unit, &source.resolver, &options).unwrap();
    let test_cases = extract_test_cases(&cases.unit, &cases.resolver, &options).unwrap();
    let unit = correlate(&signatures, &test_cases).unwrap();

    let unmatched: Vec<&str> = unit.unmatched().map(|g| g.function_name.as_str()).collect();
    assert_eq!(unmatched, vec!["Divide"]);
    assert!(unit.pairs[1].params().is_empty());
}

#[test]
fn empty_package_yields_no_signatures() {
    let parsed = parse_go("package empty\n").unwrap();
    let err = extract_signatures(&parsed.unit, &parsed.resolver, &ExtractOptions::default())
        .unwrap_err();
    assert!(matches!(err, CoreError::NoTaggedDeclarations { .. }));
}

#[test]
fn solution_file_has_no_test_cases() {
    let parsed = parse_go(SAMPLE).unwrap();
    let err = extract_test_cases(&parsed.unit, &parsed.resolver, &ExtractOptions::default())
        .unwrap_err();
    assert!(matches!(err, CoreError::NoTestCases { .. }));
}

#[test]
fn conversion_value_is_a_test_case() {
    let source = r#"package arithmetic

type testAddCase struct{ name string }

type rawCase struct{ name string }

var seed = rawCase{name: "seed"}

var converted = testAddCase(seed)
"#;
    let parsed = parse_go(source).unwrap();
    let unit = extract_test_cases(&parsed.unit, &parsed.resolver, &ExtractOptions::default())
        .unwrap();

    assert_eq!(unit.groups.len(), 1);
    assert_eq!(unit.groups[0].function_name, "Add");
    assert_eq!(unit.groups[0].cases[0].name, "converted");
    assert_eq!(unit.groups[0].cases[0].description, "converted");
}

#[test]
fn parse_file_reads_fixture() {
    let parsed = parse_file(&fixture("sample.go")).unwrap();
    assert_eq!(parsed.unit.namespace, "arithmetic");
}

#[test]
fn parse_file_rejects_other_extensions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "package p\n").unwrap();
    assert!(matches!(
        parse_file(&path),
        Err(ParserError::UnsupportedLanguage(_))
    ));
}

#[test]
fn parse_file_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        parse_file(&dir.path().join("absent.go")),
        Err(ParserError::Io(_))
    ));
}
