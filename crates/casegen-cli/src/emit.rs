//! Go test-file rendering.
//!
//! One `package` clause and import block, then one test per signature:
//! a scaffold with its own input/result struct types and an empty case
//! table, or, when a test-case group matched the signature, a table of
//! the declared `test<Func>Case` values.

use std::fmt::Write;

use casegen_core::label::{field_list_of, type_list_of, upper_first};
use casegen_core::naming::{test_case_input_type_name_of, test_case_type_name_of};
use casegen_core::{CorrelatedUnit, Field, Signature, SignatureUnit, TestCaseGroup};

const HEADER: &str = "// Code generated by casegen.";

/// Render the test file for `signatures`.
///
/// `correlated` supplies the declared cases; signatures without a matched
/// group get a scaffold.
#[must_use]
pub fn render_test_file(signatures: &SignatureUnit, correlated: Option<&CorrelatedUnit>) -> String {
    let mut body = String::new();
    let mut needs_reflect = false;

    for signature in &signatures.signatures {
        needs_reflect |= signature.results.iter().any(|r| !is_comparable(&r.ty));
        body.push('\n');
        match correlated.and_then(|c| c.group_for(&signature.function_name)) {
            Some(group) => render_case_table(&mut body, signature, group),
            None => render_scaffold(&mut body, signature),
        }
    }

    let mut out = String::with_capacity(body.len() + 128);
    let _ = writeln!(out, "{HEADER}\n");
    let _ = writeln!(out, "package {}\n", signatures.namespace);
    if needs_reflect {
        out.push_str("import (\n\t\"reflect\"\n\t\"testing\"\n)\n");
    } else {
        out.push_str("import \"testing\"\n");
    }
    out.push_str(&body);
    out
}

/// Whether values of `ty` can be compared with `!=`.
fn is_comparable(ty: &str) -> bool {
    !(ty.starts_with("[]") || ty.starts_with("map[") || ty.starts_with("func"))
}

fn result_type_name_of(exported: &str) -> String {
    format!("test{exported}Result")
}

fn render_scaffold(out: &mut String, signature: &Signature) {
    let exported = upper_first(&signature.function_name);
    let input = test_case_input_type_name_of(&exported);
    let result = result_type_name_of(&exported);
    let param_generics = signature.param_generics();
    let result_generics = signature.result_generics();

    render_struct(out, &input, &field_list_of(&param_generics), &signature.params);
    out.push('\n');
    render_struct(out, &result, &field_list_of(&result_generics), &signature.results);
    out.push('\n');

    let _ = writeln!(out, "func Test{exported}(t *testing.T) {{");
    out.push_str("\ttestCases := []struct {\n");
    out.push_str("\t\tname   string\n");
    let _ = writeln!(out, "\t\tinput  {input}{}", type_list_of(&param_generics));
    let _ = writeln!(out, "\t\tresult {result}{}", type_list_of(&result_generics));
    out.push_str("\t}{\n");
    out.push_str("\t\t// TODO: Add test cases\n");
    out.push_str("\t}\n\n");
    out.push_str("\tfor _, tc := range testCases {\n");
    out.push_str("\t\tt.Run(tc.name, func(t *testing.T) {\n");
    render_call(out, signature, "tc.input", "tc.result");
    out.push_str("\t\t})\n\t}\n}\n");
}

fn render_case_table(out: &mut String, signature: &Signature, group: &TestCaseGroup) {
    let exported = upper_first(&signature.function_name);
    let case_type = test_case_type_name_of(&group.function_name);

    let _ = writeln!(out, "func Test{exported}(t *testing.T) {{");
    out.push_str("\ttestCases := []struct {\n");
    out.push_str("\t\tdesc string\n");
    let _ = writeln!(out, "\t\ttc   {case_type}");
    out.push_str("\t}{\n");
    for case in &group.cases {
        let _ = writeln!(out, "\t\t{{\"{}\", {}}},", case.description, case.name);
    }
    out.push_str("\t}\n\n");
    out.push_str("\tfor _, c := range testCases {\n");
    out.push_str("\t\tt.Run(c.desc, func(t *testing.T) {\n");
    render_call(out, signature, "c.tc.input", "c.tc.output");
    out.push_str("\t\t})\n\t}\n}\n");
}

/// `type name[generics] struct { ... }` with gofmt column alignment.
fn render_struct(out: &mut String, name: &str, type_params: &str, fields: &[Field]) {
    if fields.is_empty() {
        let _ = writeln!(out, "type {name}{type_params} struct{{}}");
        return;
    }
    let width = fields
        .iter()
        .map(|f| f.name.chars().count())
        .max()
        .unwrap_or_default();
    let _ = writeln!(out, "type {name}{type_params} struct {{");
    for field in fields {
        let _ = writeln!(out, "\t{:<width$} {}", field.name, field.ty);
    }
    out.push_str("}\n");
}

/// The call under test followed by one check per result.
fn render_call(out: &mut String, signature: &Signature, input: &str, expected: &str) {
    let function = &signature.function_name;
    let args = signature
        .params
        .iter()
        .map(|p| format!("{input}.{}", p.name))
        .collect::<Vec<_>>()
        .join(", ");

    if signature.results.is_empty() {
        let _ = writeln!(out, "\t\t\t{function}({args})");
        return;
    }

    let names = signature
        .results
        .iter()
        .map(|r| r.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(out, "\t\t\t{names} := {function}({args})");

    for result in &signature.results {
        let name = &result.name;
        let want = format!("{expected}.{name}");
        if is_comparable(&result.ty) {
            let _ = writeln!(out, "\t\t\tif {name} != {want} {{");
        } else {
            let _ = writeln!(out, "\t\t\tif !reflect.DeepEqual({name}, {want}) {{");
        }
        let _ = writeln!(
            out,
            "\t\t\t\tt.Errorf(\"{function}() {name} = %+v, want {name} = %+v\", {name}, {want})"
        );
        out.push_str("\t\t\t}\n");
    }
}

#[cfg(test)]
mod tests {
    use casegen_core::{Correlation, TestCase};
    use pretty_assertions::assert_eq;

    use super::*;

    fn add() -> Signature {
        Signature {
            function_name: "add".to_string(),
            params: vec![Field::new("x", "int"), Field::new("y", "int")],
            results: vec![Field::new("field0", "int")],
            generics: Vec::new(),
        }
    }

    fn unit(signatures: Vec<Signature>) -> SignatureUnit {
        SignatureUnit {
            namespace: "arithmetic".to_string(),
            signatures,
        }
    }

    #[test]
    fn scaffold_matches_expected_layout() {
        let rendered = render_test_file(&unit(vec![add()]), None);
        let expected = r#"// Code generated by casegen.

package arithmetic

import "testing"

type testAddInput struct {
	x int
	y int
}

type testAddResult struct {
	field0 int
}

func TestAdd(t *testing.T) {
	testCases := []struct {
		name   string
		input  testAddInput
		result testAddResult
	}{
		// TODO: Add test cases
	}

	for _, tc := range testCases {
		t.Run(tc.name, func(t *testing.T) {
			field0 := add(tc.input.x, tc.input.y)
			if field0 != tc.result.field0 {
				t.Errorf("add() field0 = %+v, want field0 = %+v", field0, tc.result.field0)
			}
		})
	}
}
"#;
        assert_eq!(rendered, expected);
    }

    #[test]
    fn matched_group_fills_case_table() {
        let group = TestCaseGroup {
            function_name: "Add".to_string(),
            cases: vec![
                TestCase {
                    name: "basic".to_string(),
                    description: "adds two positives".to_string(),
                },
                TestCase {
                    name: "negativeNumbers".to_string(),
                    description: "negative numbers".to_string(),
                },
            ],
        };
        let correlated = CorrelatedUnit {
            namespace: "arithmetic".to_string(),
            pairs: vec![Correlation::Matched {
                signature: add(),
                group,
            }],
        };

        let rendered = render_test_file(&unit(vec![add()]), Some(&correlated));
        assert!(rendered.contains("\t\ttc   testAddCase\n"));
        assert!(rendered.contains("\t\t{\"adds two positives\", basic},\n"));
        assert!(rendered.contains("\t\t{\"negative numbers\", negativeNumbers},\n"));
        assert!(rendered.contains("field0 := add(c.tc.input.x, c.tc.input.y)"));
        assert!(rendered.contains("if field0 != c.tc.output.field0 {"));
        assert!(!rendered.contains("type testAddInput"));
    }

    #[test]
    fn non_comparable_results_use_deep_equal() {
        let signature = Signature {
            function_name: "split".to_string(),
            params: vec![Field::new("s", "string")],
            results: vec![Field::new("parts", "[]string"), Field::new("ok", "bool")],
            generics: Vec::new(),
        };
        let rendered = render_test_file(&unit(vec![signature]), None);
        assert!(rendered.contains("import (\n\t\"reflect\"\n\t\"testing\"\n)\n"));
        assert!(rendered.contains("if !reflect.DeepEqual(parts, tc.result.parts) {"));
        assert!(rendered.contains("if ok != tc.result.ok {"));
        assert!(rendered.contains("\tparts []string\n\tok    bool\n"));
    }

    #[test]
    fn generics_are_filtered_per_struct() {
        let signature = Signature {
            function_name: "Map".to_string(),
            params: vec![Field::new("xs", "[]T"), Field::new("f", "func(T) U")],
            results: vec![Field::new("field0", "[]U")],
            generics: vec![Field::new("T", "any"), Field::new("U", "any")],
        };
        let rendered = render_test_file(&unit(vec![signature]), None);
        assert!(rendered.contains("type testMapInput[T any, U any] struct {"));
        assert!(rendered.contains("type testMapResult[U any] struct {"));
        assert!(rendered.contains("\t\tinput  testMapInput[any, any]\n"));
        assert!(rendered.contains("\t\tresult testMapResult[any]\n"));
    }

    #[test]
    fn no_params_or_results() {
        let signature = Signature {
            function_name: "hello".to_string(),
            params: Vec::new(),
            results: Vec::new(),
            generics: Vec::new(),
        };
        let rendered = render_test_file(&unit(vec![signature]), None);
        assert!(rendered.contains("type testHelloInput struct{}\n"));
        assert!(rendered.contains("type testHelloResult struct{}\n"));
        assert!(rendered.contains("\t\t\thello()\n"));
    }

    #[test]
    fn one_header_for_many_signatures() {
        let mut second = add();
        second.function_name = "sub".to_string();
        let rendered = render_test_file(&unit(vec![add(), second]), None);
        assert_eq!(rendered.matches("package arithmetic").count(), 1);
        assert!(rendered.contains("func TestAdd("));
        assert!(rendered.contains("func TestSub("));
    }

    #[test]
    fn comparability() {
        assert!(is_comparable("int"));
        assert!(is_comparable("[3]int"));
        assert!(is_comparable("*Node"));
        assert!(!is_comparable("[]int"));
        assert!(!is_comparable("map[string]int"));
        assert!(!is_comparable("func(int) int"));
    }
}
