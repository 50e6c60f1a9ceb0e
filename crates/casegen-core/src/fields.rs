//! Flattening of source field lists into named, typed [`Field`]s.

use crate::model::Field;
use crate::resolve::TypeResolver;
use crate::source::FieldList;

/// Name prefix for synthesized names of unnamed entries.
pub const FIELD_PREFIX: &str = "field";

/// Flatten `list` into one [`Field`] per declared name.
///
/// An entry with several names expands to one field per name, all sharing
/// the entry's type. An unnamed entry becomes `field<i>`, where `i` is the
/// entry's position in the original list. Types come from `resolver`, with
/// the raw source text as fallback. An absent list yields no fields.
pub fn extract_fields<R: TypeResolver + ?Sized>(
    list: Option<&FieldList>,
    resolver: &R,
) -> Vec<Field> {
    let Some(list) = list else {
        return Vec::new();
    };

    let mut fields = Vec::with_capacity(list.entries.len());
    for (i, entry) in list.entries.iter().enumerate() {
        let ty = resolver
            .resolve_type(&entry.ty)
            .unwrap_or_else(|| entry.ty.text.clone());

        if entry.names.is_empty() {
            fields.push(Field::new(format!("{FIELD_PREFIX}{i}"), ty));
        } else {
            fields.extend(entry.names.iter().map(|name| Field::new(name.clone(), ty.clone())));
        }
    }
    fields
}
