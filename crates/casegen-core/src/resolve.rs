//! Type resolution capability supplied by the parsing front end.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::source::{Expr, TypeExpr};

/// Underlying representation of a named type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Struct,
    Interface,
    Other,
}

/// A named type an expression evaluates to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedType {
    pub name: String,
    pub kind: TypeKind,
}

impl NamedType {
    #[must_use]
    pub fn is_struct(&self) -> bool {
        self.kind == TypeKind::Struct
    }
}

/// Canonical type renderings for source expressions.
///
/// Returning `None` means "not resolved"; callers fall back to raw text.
pub trait TypeResolver {
    /// Canonical rendering of a type expression.
    fn resolve_type(&self, expr: &TypeExpr) -> Option<String>;

    /// Named type an initializer expression evaluates to.
    fn resolve_value(&self, expr: &Expr) -> Option<NamedType>;
}

impl<R: TypeResolver + ?Sized> TypeResolver for &R {
    fn resolve_type(&self, expr: &TypeExpr) -> Option<String> {
        (**self).resolve_type(expr)
    }

    fn resolve_value(&self, expr: &Expr) -> Option<NamedType> {
        (**self).resolve_value(expr)
    }
}

/// Resolves nothing, so every type renders as its source text.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawText;

impl TypeResolver for RawText {
    fn resolve_type(&self, _expr: &TypeExpr) -> Option<String> {
        None
    }

    fn resolve_value(&self, _expr: &Expr) -> Option<NamedType> {
        None
    }
}

/// Lookup-table resolver.
///
/// Type expressions resolve by exact source text. Composite literals resolve
/// through the named type written in the literal.
#[derive(Debug, Clone, Default)]
pub struct TypeTable {
    types: HashMap<String, String>,
    named: HashMap<String, TypeKind>,
}

impl TypeTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render type expression `text` as `rendering`.
    #[must_use]
    pub fn with_type(mut self, text: impl Into<String>, rendering: impl Into<String>) -> Self {
        self.types.insert(text.into(), rendering.into());
        self
    }

    /// Declare a named type with the given underlying kind.
    #[must_use]
    pub fn with_named(mut self, name: impl Into<String>, kind: TypeKind) -> Self {
        let name = name.into();
        self.types.entry(name.clone()).or_insert_with(|| name.clone());
        self.named.insert(name, kind);
        self
    }

    pub fn insert_type(&mut self, text: impl Into<String>, rendering: impl Into<String>) {
        self.types.insert(text.into(), rendering.into());
    }

    pub fn insert_named(&mut self, name: impl Into<String>, kind: TypeKind) {
        self.named.insert(name.into(), kind);
    }
}

impl TypeResolver for TypeTable {
    fn resolve_type(&self, expr: &TypeExpr) -> Option<String> {
        self.types.get(&expr.text).cloned()
    }

    fn resolve_value(&self, expr: &Expr) -> Option<NamedType> {
        let Expr::Composite { ty: Some(ty), .. } = expr else {
            return None;
        };
        let kind = *self.named.get(&ty.text)?;
        Some(NamedType {
            name: ty.text.clone(),
            kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composite(ty: &str) -> Expr {
        Expr::Composite {
            text: format!("{ty}{{}}"),
            ty: Some(TypeExpr::new(ty)),
            elements: Vec::new(),
        }
    }

    #[test]
    fn raw_text_resolves_nothing() {
        assert_eq!(RawText.resolve_type(&TypeExpr::new("int")), None);
        assert_eq!(RawText.resolve_value(&composite("testAddCase")), None);
    }

    #[test]
    fn table_resolves_declared_types() {
        let table = TypeTable::new()
            .with_type("myInt", "int")
            .with_named("testAddCase", TypeKind::Struct);

        assert_eq!(table.resolve_type(&TypeExpr::new("myInt")).as_deref(), Some("int"));
        assert_eq!(
            table.resolve_type(&TypeExpr::new("testAddCase")).as_deref(),
            Some("testAddCase")
        );
        assert_eq!(table.resolve_type(&TypeExpr::new("float64")), None);

        let named = table.resolve_value(&composite("testAddCase")).unwrap();
        assert!(named.is_struct());
        assert_eq!(table.resolve_value(&composite("unknown")), None);
    }

    #[test]
    fn reference_delegates() {
        let table = TypeTable::new().with_type("a", "b");
        let by_ref: &dyn TypeResolver = &table;
        assert_eq!((&by_ref).resolve_type(&TypeExpr::new("a")).as_deref(), Some("b"));
    }
}
