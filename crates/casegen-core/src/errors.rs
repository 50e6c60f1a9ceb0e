//! Error types for extraction and correlation.
//!
//! Parse and resolution failures belong to the front end (`ParserError` in
//! `casegen-parser`); everything here is a deterministic structural failure
//! of an otherwise well-formed source unit.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// No function-shaped declaration carried the marker token.
    #[error("No tagged declarations found in package '{namespace}' (marker '{marker}')")]
    NoTaggedDeclarations { namespace: String, marker: String },

    /// No top-level value had a `test<Func>Case` type.
    #[error("No test cases found in package '{namespace}'")]
    NoTestCases { namespace: String },

    /// The signature and test-case units come from different packages.
    #[error("Namespace mismatch: signatures are in '{signatures}', test cases are in '{test_cases}'")]
    NamespaceMismatch {
        signatures: String,
        test_cases: String,
    },
}
