//! Filtering of generic parameters by textual reference.
//!
//! A generic parameter is kept when a field's type mentions its name as a
//! standalone identifier: `T` inside `List[T]` counts, `Type` inside
//! `TypeName` does not.

use crate::model::Field;

/// Subsequence of `generics` referenced by the types of `fields`.
///
/// A field references a generic when its type is exactly the generic's name
/// or when [`contains_generic`] finds a standalone occurrence. Order follows
/// `generics`; each generic appears at most once.
#[must_use]
pub fn filter_generics(generics: &[Field], fields: &[Field]) -> Vec<Field> {
    generics
        .iter()
        .filter(|generic| {
            !generic.name.is_empty()
                && fields
                    .iter()
                    .any(|f| f.ty == generic.name || contains_generic(&f.ty, &generic.name))
        })
        .cloned()
        .collect()
}

/// Whether `field_type` mentions `generic_name` as a standalone identifier
/// inside a larger type.
///
/// A bare type equal to the name is not a match, nor is an empty name.
#[must_use]
pub fn contains_generic(field_type: &str, generic_name: &str) -> bool {
    if generic_name.is_empty() || field_type == generic_name {
        return false;
    }
    field_type
        .match_indices(generic_name)
        .any(|(idx, _)| !is_part_of_larger_identifier(field_type, idx, generic_name.len()))
}

/// Whether the match `field_type[idx..idx + len]` touches an identifier
/// character on either side.
fn is_part_of_larger_identifier(field_type: &str, idx: usize, len: usize) -> bool {
    let before = field_type[..idx].chars().next_back();
    let after = field_type[idx + len..].chars().next();
    before.is_some_and(is_identifier_char) || after.is_some_and(is_identifier_char)
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
