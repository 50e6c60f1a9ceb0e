//! Go front end: materializes the top-level declarations of one file.
//!
//! Only the source file's direct children are visited. Functions and
//! methods become [`FunctionDecl`]s, `var` declarations become
//! [`ValueDecl`]s, and `type` declarations feed the [`GoTypeResolver`].

use ast_grep_core::Node;
use casegen_core::{Declaration, FunctionDecl, SourceUnit, TypeExpr, ValueDecl};
use tracing::debug;

use crate::error::ParserError;
use crate::parser::parse_source;
use crate::resolver::GoTypeResolver;

mod helpers;

use helpers::{
    expressions_of, extract_go_doc, field_list_of, find_error, first_child_of_kind, result_list_of,
};

/// A parsed Go file: its declarations and the resolver built from them.
#[derive(Debug, Clone)]
pub struct ParsedSource {
    pub unit: SourceUnit,
    pub resolver: GoTypeResolver,
}

/// Parse Go source into a [`ParsedSource`].
///
/// # Errors
/// Returns `ParserError::ParseFailed` on syntax errors or a missing
/// `package` clause.
pub fn parse_go(source: &str) -> Result<ParsedSource, ParserError> {
    let tree = parse_source(source);
    let root = tree.root();

    if let Some(line) = find_error(&root) {
        return Err(ParserError::go(format!("syntax error at line {line}")));
    }

    let namespace = first_child_of_kind(&root, "package_clause")
        .and_then(|clause| first_child_of_kind(&clause, "package_identifier"))
        .map(|id| id.text().to_string())
        .ok_or_else(|| ParserError::go("missing package clause"))?;

    let mut resolver = GoTypeResolver::default();
    let mut declarations = Vec::new();

    for node in root.children() {
        match node.kind().as_ref() {
            "function_declaration" | "method_declaration" => {
                if let Some(decl) = process_function(&node) {
                    resolver.record_function(&decl);
                    declarations.push(Declaration::Function(decl));
                }
            }
            "var_declaration" => {
                let values = process_var_declaration(&node);
                declarations.extend(values.into_iter().map(Declaration::Value));
            }
            "type_declaration" => process_type_declaration(&node, &mut resolver),
            _ => {}
        }
    }

    debug!(
        namespace = %namespace,
        declarations = declarations.len(),
        "parsed go source"
    );
    Ok(ParsedSource {
        unit: SourceUnit {
            namespace,
            declarations,
        },
        resolver,
    })
}

// ── function_declaration / method_declaration ─────────────────────

fn process_function<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<FunctionDecl> {
    let name = node.field("name").map(|n| n.text().to_string())?;

    Some(FunctionDecl {
        name,
        doc: extract_go_doc(node),
        params: node.field("parameters").map(|p| field_list_of(&p)),
        results: node.field("result").map(|r| result_list_of(&r)),
        type_params: node.field("type_parameters").map(|tp| field_list_of(&tp)),
    })
}

// ── var_declaration ───────────────────────────────────────────────

fn process_var_declaration<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<ValueDecl> {
    let mut specs = Vec::new();
    for child in node.children() {
        match child.kind().as_ref() {
            "var_spec" => specs.push(process_var_spec(&child)),
            // var ( ... ) block
            "var_spec_list" => specs.extend(
                child
                    .children()
                    .filter(|spec| spec.kind().as_ref() == "var_spec")
                    .map(|spec| process_var_spec(&spec)),
            ),
            _ => {}
        }
    }
    specs
}

fn process_var_spec<D: ast_grep_core::Doc>(node: &Node<D>) -> ValueDecl {
    ValueDecl {
        names: node
            .children()
            .filter(|c| matches!(c.kind().as_ref(), "identifier" | "blank_identifier"))
            .map(|c| c.text().to_string())
            .collect(),
        ty: node.field("type").map(|t| TypeExpr::new(t.text().to_string())),
        values: node
            .field("value")
            .map(|v| expressions_of(&v))
            .unwrap_or_default(),
    }
}

// ── type_declaration ──────────────────────────────────────────────

fn process_type_declaration<D: ast_grep_core::Doc>(node: &Node<D>, resolver: &mut GoTypeResolver) {
    for child in node.children() {
        let kind = child.kind();
        let (Some(name), Some(ty)) = (child.field("name"), child.field("type")) else {
            continue;
        };
        match kind.as_ref() {
            "type_spec" => {
                resolver.record_defined(&name.text(), ty.kind().as_ref(), &ty.text());
            }
            "type_alias" => resolver.record_alias(&name.text(), &ty.text()),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests;
