//! Source model produced by a parsing front end.
//!
//! A front end materializes the top-level declarations of one file as a
//! flat list. Only the shapes the extractors look at are modeled: function
//! signatures with their doc comments, and value declarations with their
//! initializers. Anything else is dropped by the front end.

use serde::{Deserialize, Serialize};

/// Top-level declarations of one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceUnit {
    /// Package (namespace) identifier.
    pub namespace: String,
    pub declarations: Vec<Declaration>,
}

impl SourceUnit {
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDecl> {
        self.declarations.iter().filter_map(|d| match d {
            Declaration::Function(f) => Some(f),
            Declaration::Value(_) => None,
        })
    }

    pub fn values(&self) -> impl Iterator<Item = &ValueDecl> {
        self.declarations.iter().filter_map(|d| match d {
            Declaration::Value(v) => Some(v),
            Declaration::Function(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Declaration {
    Function(FunctionDecl),
    Value(ValueDecl),
}

/// A function-shaped declaration (free function or method).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: String,
    /// Attached comment lines, verbatim.
    pub doc: Vec<String>,
    pub params: Option<FieldList>,
    pub results: Option<FieldList>,
    pub type_params: Option<FieldList>,
}

impl FunctionDecl {
    /// Whether any attached comment line contains `marker`.
    #[must_use]
    pub fn has_marker(&self, marker: &str) -> bool {
        !marker.is_empty() && self.doc.iter().any(|line| line.contains(marker))
    }
}

/// A parameter, result, or generic-parameter list as written in source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldList {
    pub entries: Vec<FieldEntry>,
}

/// One list entry: zero or more names sharing a type expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEntry {
    pub names: Vec<String>,
    pub ty: TypeExpr,
}

impl FieldEntry {
    pub fn named<I, S>(names: I, ty: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            ty: TypeExpr::new(ty),
        }
    }

    pub fn unnamed(ty: impl Into<String>) -> Self {
        Self {
            names: Vec::new(),
            ty: TypeExpr::new(ty),
        }
    }
}

/// A type expression, kept as its raw source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeExpr {
    pub text: String,
}

impl TypeExpr {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A top-level value declaration (`var a, b T = x, y`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueDecl {
    pub names: Vec<String>,
    pub ty: Option<TypeExpr>,
    /// Initializers, positionally paired with `names`.
    pub values: Vec<Expr>,
}

/// An initializer expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expr {
    /// A composite literal such as `T{key: value, ...}`.
    Composite {
        text: String,
        ty: Option<TypeExpr>,
        elements: Vec<Element>,
    },
    /// A string literal. `value` is the literal body with source escapes intact.
    StringLiteral { text: String, value: String },
    Other { text: String },
}

impl Expr {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Composite { text, .. }
            | Self::StringLiteral { text, .. }
            | Self::Other { text } => text,
        }
    }

    /// String literal body of the element keyed `key`, if this is a composite literal.
    ///
    /// The first element with a matching key decides: a non-literal value yields `None`.
    #[must_use]
    pub fn keyed_string(&self, key: &str) -> Option<&str> {
        let Self::Composite { elements, .. } = self else {
            return None;
        };
        let element = elements.iter().find(|e| e.key.as_deref() == Some(key))?;
        match &element.value {
            Self::StringLiteral { value, .. } => Some(value),
            _ => None,
        }
    }
}

/// One element of a composite literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub key: Option<String>,
    pub value: Expr,
}
