//! Signature extraction for marker-tagged declarations.

use tracing::debug;

use crate::ExtractOptions;
use crate::errors::CoreError;
use crate::fields::extract_fields;
use crate::model::{Signature, SignatureUnit};
use crate::resolve::TypeResolver;
use crate::source::{FunctionDecl, SourceUnit};

/// Extract one [`Signature`] per function-shaped declaration whose doc
/// comments contain `options.marker`.
///
/// Untagged declarations are skipped.
///
/// # Errors
/// Returns [`CoreError::NoTaggedDeclarations`] when nothing carries the marker.
pub fn extract_signatures<R: TypeResolver + ?Sized>(
    unit: &SourceUnit,
    resolver: &R,
    options: &ExtractOptions,
) -> Result<SignatureUnit, CoreError> {
    let signatures: Vec<Signature> = unit
        .functions()
        .filter(|decl| {
            let tagged = decl.has_marker(&options.marker);
            if !tagged {
                debug!(function = %decl.name, "skipping untagged declaration");
            }
            tagged
        })
        .map(|decl| signature_of(decl, resolver))
        .collect();

    if signatures.is_empty() {
        return Err(CoreError::NoTaggedDeclarations {
            namespace: unit.namespace.clone(),
            marker: options.marker.clone(),
        });
    }

    debug!(
        namespace = %unit.namespace,
        count = signatures.len(),
        "extracted signatures"
    );
    Ok(SignatureUnit {
        namespace: unit.namespace.clone(),
        signatures,
    })
}

fn signature_of<R: TypeResolver + ?Sized>(decl: &FunctionDecl, resolver: &R) -> Signature {
    Signature {
        function_name: decl.name.clone(),
        params: extract_fields(decl.params.as_ref(), resolver),
        results: extract_fields(decl.results.as_ref(), resolver),
        generics: extract_fields(decl.type_params.as_ref(), resolver),
    }
}
