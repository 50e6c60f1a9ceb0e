//! Identifier humanization and list renderings used by the emitter.

use crate::model::Field;

/// Humanize a camel-case identifier: `"largeInput"` -> `"large input"`.
///
/// A space goes before every uppercase letter except the first character,
/// then the whole result is lower-cased.
#[must_use]
pub fn labelize(name: &str) -> String {
    let mut label = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            label.push(' ');
        }
        label.extend(c.to_lowercase());
    }
    label
}

/// Upper-case the first character: `"add"` -> `"Add"`.
#[must_use]
pub fn upper_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `[T int, U string]`, or `""` for no fields.
#[must_use]
pub fn field_list_of(fields: &[Field]) -> String {
    bracketed(fields, |f| format!("{} {}", f.name, f.ty))
}

/// `[T, U]`, or `""` for no fields.
#[must_use]
pub fn name_list_of(fields: &[Field]) -> String {
    bracketed(fields, |f| f.name.clone())
}

/// `[int, string]`, or `""` for no fields.
#[must_use]
pub fn type_list_of(fields: &[Field]) -> String {
    bracketed(fields, |f| f.ty.clone())
}

fn bracketed(fields: &[Field], render: impl Fn(&Field) -> String) -> String {
    if fields.is_empty() {
        return String::new();
    }
    let items: Vec<String> = fields.iter().map(render).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("HelloWorld", "hello world")]
    #[case("labelizeFunction", "labelize function")]
    #[case("TestCase", "test case")]
    #[case("simpleTest", "simple test")]
    #[case("", "")]
    #[case("Single", "single")]
    #[case("multipleWordsInOne", "multiple words in one")]
    #[case("largeInput", "large input")]
    #[case("emptyURL", "empty u r l")]
    fn labelize_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(labelize(input), expected);
    }

    #[rstest]
    #[case("hello", "Hello")]
    #[case("", "")]
    #[case("a", "A")]
    #[case("A", "A")]
    #[case("testCase", "TestCase")]
    #[case("TestCase", "TestCase")]
    #[case("ébauche", "Ébauche")]
    fn upper_first_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(upper_first(input), expected);
    }

    fn generics() -> Vec<Field> {
        vec![Field::new("T", "int"), Field::new("U", "string")]
    }

    #[test]
    fn list_renderings() {
        assert_eq!(field_list_of(&generics()), "[T int, U string]");
        assert_eq!(name_list_of(&generics()), "[T, U]");
        assert_eq!(type_list_of(&generics()), "[int, string]");
        assert_eq!(field_list_of(&[Field::new("A", "float64")]), "[A float64]");
    }

    #[test]
    fn empty_lists_render_nothing() {
        assert_eq!(field_list_of(&[]), "");
        assert_eq!(name_list_of(&[]), "");
        assert_eq!(type_list_of(&[]), "");
    }
}
