use super::*;
pub(super) use casegen_core::{Expr, TypeResolver, ValueDecl};

mod generics;

const SAMPLE: &str = include_str!("../../../tests/fixtures/sample.go");
const SAMPLE_CASES: &str = include_str!("../../../tests/fixtures/sample_testcase.go");

fn parse(source: &str) -> ParsedSource {
    parse_go(source).expect("source should parse")
}

fn find_function<'a>(unit: &'a SourceUnit, name: &str) -> &'a FunctionDecl {
    unit.functions()
        .find(|f| f.name == name)
        .unwrap_or_else(|| panic!("should find function named '{name}'"))
}

fn find_value<'a>(unit: &'a SourceUnit, name: &str) -> &'a ValueDecl {
    unit.values()
        .find(|v| v.names.iter().any(|n| n == name))
        .unwrap_or_else(|| panic!("should find value named '{name}'"))
}

fn entry_texts(list: Option<&casegen_core::FieldList>) -> Vec<(Vec<String>, String)> {
    list.map(|l| {
        l.entries
            .iter()
            .map(|e| (e.names.clone(), e.ty.text.clone()))
            .collect()
    })
    .unwrap_or_default()
}

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
