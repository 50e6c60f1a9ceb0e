//! Test-case extraction from `test<Func>Case` values.

use tracing::debug;

use crate::ExtractOptions;
use crate::errors::CoreError;
use crate::label::labelize;
use crate::model::{TestCase, TestCaseUnit};
use crate::naming::{func_name_of, is_test_case};
use crate::resolve::TypeResolver;
use crate::source::{Expr, SourceUnit, ValueDecl};

/// Go's blank identifier; values bound to it cannot be referenced.
const BLANK_IDENTIFIER: &str = "_";

/// Group every top-level value of a `test<Func>Case` type by `<Func>`.
///
/// A value's type comes from its annotation when present, else from its
/// initializer, which must evaluate to a named struct type. The
/// description is the string literal keyed `options.description_key` in
/// the initializer, else the labelized identifier.
///
/// # Errors
/// Returns [`CoreError::NoTestCases`] when no value qualifies.
pub fn extract_test_cases<R: TypeResolver + ?Sized>(
    unit: &SourceUnit,
    resolver: &R,
    options: &ExtractOptions,
) -> Result<TestCaseUnit, CoreError> {
    let mut result = TestCaseUnit {
        namespace: unit.namespace.clone(),
        groups: Vec::new(),
    };

    for decl in unit.values() {
        for (i, name) in decl.names.iter().enumerate() {
            if name == BLANK_IDENTIFIER {
                continue;
            }
            let initializer = decl.values.get(i);
            let Some(type_name) = value_type_name(decl, initializer, resolver) else {
                continue;
            };
            if !is_test_case(&type_name) {
                continue;
            }
            let Some(function_name) = func_name_of(&type_name).filter(|f| !f.is_empty()) else {
                continue;
            };

            let description = initializer
                .and_then(|expr| expr.keyed_string(&options.description_key))
                .map_or_else(|| labelize(name), str::to_string);

            debug!(value = %name, function = %function_name, "classified test case");
            result.push_case(
                function_name,
                TestCase {
                    name: name.clone(),
                    description,
                },
            );
        }
    }

    if result.groups.is_empty() {
        return Err(CoreError::NoTestCases {
            namespace: unit.namespace.clone(),
        });
    }
    Ok(result)
}

/// Annotated type if present, else the named struct type of the initializer.
fn value_type_name<R: TypeResolver + ?Sized>(
    decl: &ValueDecl,
    initializer: Option<&Expr>,
    resolver: &R,
) -> Option<String> {
    if let Some(ty) = &decl.ty {
        return Some(resolver.resolve_type(ty).unwrap_or_else(|| ty.text.clone()));
    }
    let named = resolver.resolve_value(initializer?)?;
    named.is_struct().then_some(named.name)
}
