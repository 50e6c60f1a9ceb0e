use pretty_assertions::assert_eq;

use super::*;

#[test]
fn type_parameters_extracted() {
    let parsed = parse(SAMPLE);
    let map = find_function(&parsed.unit, "Map");
    assert_eq!(
        entry_texts(map.type_params.as_ref()),
        vec![
            (names(&["T"]), "any".to_string()),
            (names(&["U"]), "any".to_string())
        ]
    );
}

#[test]
fn grouped_type_parameters_share_constraint() {
    let parsed = parse("package p\n\nfunc Max[T, U comparable](a T, b U) T { return a }\n");
    let max = find_function(&parsed.unit, "Max");
    assert_eq!(
        entry_texts(max.type_params.as_ref()),
        vec![(names(&["T", "U"]), "comparable".to_string())]
    );
}

#[test]
fn generic_parameter_types_are_verbatim() {
    let parsed = parse(SAMPLE);
    let map = find_function(&parsed.unit, "Map");
    assert_eq!(
        entry_texts(map.params.as_ref()),
        vec![
            (names(&["xs"]), "[]T".to_string()),
            (names(&["f"]), "func(T) U".to_string())
        ]
    );
}

#[test]
fn non_generic_function_has_no_type_parameters() {
    let parsed = parse(SAMPLE);
    assert!(find_function(&parsed.unit, "add").type_params.is_none());
}
