//! Extraction results handed to the emitter.

use serde::{Deserialize, Serialize};

use crate::generics::filter_generics;

/// A named, typed entry of a parameter, result, or generic-parameter list.
///
/// `ty` is the resolved type rendering when resolution succeeded, else the
/// raw source text. For generic parameters it holds the constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Structural signature of one tagged declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub function_name: String,
    pub params: Vec<Field>,
    pub results: Vec<Field>,
    pub generics: Vec<Field>,
}

impl Signature {
    /// Generic parameters referenced by the parameter types.
    #[must_use]
    pub fn param_generics(&self) -> Vec<Field> {
        filter_generics(&self.generics, &self.params)
    }

    /// Generic parameters referenced by the result types.
    #[must_use]
    pub fn result_generics(&self) -> Vec<Field> {
        filter_generics(&self.generics, &self.results)
    }
}

/// One declared test-case value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Declared identifier of the value.
    pub name: String,
    /// Explicit description literal body, or the labelized identifier.
    pub description: String,
}

/// Test cases exercising one function, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCaseGroup {
    pub function_name: String,
    pub cases: Vec<TestCase>,
}

/// Signatures extracted from one source unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureUnit {
    pub namespace: String,
    pub signatures: Vec<Signature>,
}

impl SignatureUnit {
    #[must_use]
    pub fn find(&self, function_name: &str) -> Option<&Signature> {
        self.signatures
            .iter()
            .find(|s| s.function_name == function_name)
    }
}

/// Test-case groups extracted from one source unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCaseUnit {
    pub namespace: String,
    pub groups: Vec<TestCaseGroup>,
}

impl TestCaseUnit {
    /// Append `case` to the group for `function_name`, creating it on first use.
    pub fn push_case(&mut self, function_name: &str, case: TestCase) {
        if let Some(group) = self
            .groups
            .iter_mut()
            .find(|g| g.function_name == function_name)
        {
            group.cases.push(case);
            return;
        }
        self.groups.push(TestCaseGroup {
            function_name: function_name.to_string(),
            cases: vec![case],
        });
    }
}
