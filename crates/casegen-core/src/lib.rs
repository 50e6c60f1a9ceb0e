//! # casegen-core
//!
//! Introspection and correlation engine for casegen.
//!
//! Given source declarations materialized by a front end (see
//! `casegen-parser`), this crate:
//! - extracts the signatures of declarations tagged with a marker token
//! - extracts `test<Func>Case` values and groups them per function
//! - correlates test-case groups back to the signatures they exercise
//! - filters generic parameters down to the ones a field list references
//!
//! Type resolution is a pluggable capability ([`TypeResolver`]); the engine
//! never resolves anything itself and falls back to raw source text.

pub mod correlate;
pub mod errors;
pub mod fields;
pub mod generics;
pub mod label;
pub mod model;
pub mod naming;
pub mod resolve;
pub mod signatures;
pub mod source;
pub mod test_cases;

pub use correlate::{CorrelatedUnit, Correlation, correlate};
pub use errors::CoreError;
pub use fields::extract_fields;
pub use generics::{contains_generic, filter_generics};
pub use model::{Field, Signature, SignatureUnit, TestCase, TestCaseGroup, TestCaseUnit};
pub use resolve::{NamedType, RawText, TypeKind, TypeResolver, TypeTable};
pub use signatures::extract_signatures;
pub use source::{
    Declaration, Element, Expr, FieldEntry, FieldList, FunctionDecl, SourceUnit, TypeExpr,
    ValueDecl,
};
pub use test_cases::extract_test_cases;

/// Marker token recognized in a declaration's doc comments.
pub const DEFAULT_MARKER: &str = "@lc";

/// Initializer key whose string literal supplies a case description.
pub const DEFAULT_DESCRIPTION_KEY: &str = "name";

/// Tunables shared by the extractors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Token that tags a declaration as a generation target.
    pub marker: String,
    /// Keyed-field name holding an explicit case description.
    pub description_key: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            description_key: DEFAULT_DESCRIPTION_KEY.to_string(),
        }
    }
}
