//! Correlation of test-case groups with the signatures they exercise.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::CoreError;
use crate::label::upper_first;
use crate::model::{Field, Signature, SignatureUnit, TestCaseGroup, TestCaseUnit};

/// Pairing of one test-case group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Correlation {
    Matched {
        signature: Signature,
        group: TestCaseGroup,
    },
    /// No signature matched the group's function name.
    Unmatched { group: TestCaseGroup },
}

impl Correlation {
    #[must_use]
    pub const fn group(&self) -> &TestCaseGroup {
        match self {
            Self::Matched { group, .. } | Self::Unmatched { group } => group,
        }
    }

    #[must_use]
    pub const fn signature(&self) -> Option<&Signature> {
        match self {
            Self::Matched { signature, .. } => Some(signature),
            Self::Unmatched { .. } => None,
        }
    }

    /// Parameters of the matched signature; empty when unmatched.
    #[must_use]
    pub fn params(&self) -> &[Field] {
        self.signature()
            .map(|s| s.params.as_slice())
            .unwrap_or_default()
    }

    /// Results of the matched signature; empty when unmatched.
    #[must_use]
    pub fn results(&self) -> &[Field] {
        self.signature()
            .map(|s| s.results.as_slice())
            .unwrap_or_default()
    }
}

/// Correlated output for one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrelatedUnit {
    pub namespace: String,
    pub pairs: Vec<Correlation>,
}

impl CorrelatedUnit {
    /// The group matched to `function_name`'s signature, if any.
    #[must_use]
    pub fn group_for(&self, function_name: &str) -> Option<&TestCaseGroup> {
        self.pairs.iter().find_map(|pair| match pair {
            Correlation::Matched { signature, group }
                if signature.function_name == function_name =>
            {
                Some(group)
            }
            _ => None,
        })
    }

    pub fn unmatched(&self) -> impl Iterator<Item = &TestCaseGroup> {
        self.pairs.iter().filter_map(|pair| match pair {
            Correlation::Unmatched { group } => Some(group),
            Correlation::Matched { .. } => None,
        })
    }
}

/// Pair every test-case group with a signature, in group order.
///
/// A group matches a signature with the same function name; failing that,
/// one whose name matches after upper-casing its first character (cases
/// are often named after the exported spelling). Groups with no match are
/// kept as [`Correlation::Unmatched`].
///
/// # Errors
/// Returns [`CoreError::NamespaceMismatch`] when the units come from different packages.
pub fn correlate(
    signatures: &SignatureUnit,
    test_cases: &TestCaseUnit,
) -> Result<CorrelatedUnit, CoreError> {
    if signatures.namespace != test_cases.namespace {
        return Err(CoreError::NamespaceMismatch {
            signatures: signatures.namespace.clone(),
            test_cases: test_cases.namespace.clone(),
        });
    }

    let pairs = test_cases
        .groups
        .iter()
        .map(|group| match find_signature(signatures, &group.function_name) {
            Some(signature) => Correlation::Matched {
                signature: signature.clone(),
                group: group.clone(),
            },
            None => {
                warn!(
                    function = %group.function_name,
                    cases = group.cases.len(),
                    "no signature matches test-case group"
                );
                Correlation::Unmatched {
                    group: group.clone(),
                }
            }
        })
        .collect();

    Ok(CorrelatedUnit {
        namespace: signatures.namespace.clone(),
        pairs,
    })
}

fn find_signature<'a>(signatures: &'a SignatureUnit, function_name: &str) -> Option<&'a Signature> {
    signatures.find(function_name).or_else(|| {
        signatures
            .signatures
            .iter()
            .find(|s| upper_first(&s.function_name) == function_name)
    })
}
