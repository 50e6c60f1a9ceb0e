use ast_grep_core::Node;
use casegen_core::{Element, Expr, FieldEntry, FieldList, TypeExpr};

pub(super) fn first_child_of_kind<'r, D: ast_grep_core::Doc>(
    node: &Node<'r, D>,
    kind: &str,
) -> Option<Node<'r, D>> {
    node.children().find(|c| c.kind().as_ref() == kind)
}

/// One-based line of the first `ERROR` or MISSING node, searching depth-first.
///
/// tree-sitter recovers from an unclosed `}` or `)` by inserting a
/// zero-width MISSING token instead of an `ERROR` node.
pub(super) fn find_error<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<usize> {
    let mut stack = vec![node.clone()];
    while let Some(current) = stack.pop() {
        if current.is_error() || current.is_missing() {
            return Some(current.start_pos().line() + 1);
        }
        stack.extend(current.children());
    }
    None
}

/// Children that carry meaning: no punctuation tokens, no comments.
fn meaningful_children<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Vec<Node<'r, D>> {
    node.children()
        .filter(|c| {
            let kind = c.kind();
            kind.as_ref() != "comment" && kind.chars().any(|ch| ch.is_alphanumeric() || ch == '_')
        })
        .collect()
}

// ── Doc comment extraction ────────────────────────────────────────

/// Collect the `comment` siblings directly above `node`.
///
/// Go convention: a doc comment ends on the line right before the
/// declaration, so a blank line detaches it. A comment trailing code on
/// its line belongs to that code. Lines are kept verbatim.
pub(super) fn extract_go_doc<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<String> {
    let mut comments = Vec::new();
    let mut next_line = node.start_pos().line();
    let mut current = node.prev();
    while let Some(sibling) = current {
        if sibling.kind().as_ref() != "comment" || sibling.end_pos().line() + 1 != next_line {
            break;
        }
        let start = sibling.start_pos().line();
        if previous_named(&sibling).is_some_and(|p| p.end_pos().line() == start) {
            break;
        }
        comments.push(sibling.text().to_string());
        next_line = start;
        current = sibling.prev();
    }
    comments.reverse();
    comments
}

/// Nearest named sibling before `node`, skipping `;` and newline terminators.
fn previous_named<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    let mut current = node.prev();
    while let Some(sibling) = current {
        if sibling.is_named() {
            return Some(sibling);
        }
        current = sibling.prev();
    }
    None
}

// ── Field lists ───────────────────────────────────────────────────

/// Build a [`FieldList`] from a `parameter_list` or `type_parameter_list`.
///
/// A variadic parameter keeps its `...` so the resolver can render it as a slice.
pub(super) fn field_list_of<D: ast_grep_core::Doc>(node: &Node<D>) -> FieldList {
    let entries = node
        .children()
        .filter_map(|decl| {
            let kind = decl.kind();
            let variadic = match kind.as_ref() {
                "parameter_declaration" | "type_parameter_declaration" => false,
                "variadic_parameter_declaration" => true,
                _ => return None,
            };
            let ty = decl.field("type")?;
            let names = decl
                .children()
                .filter(|c| c.kind().as_ref() == "identifier")
                .map(|c| c.text().to_string());
            let text = if variadic {
                format!("...{}", ty.text())
            } else {
                ty.text().to_string()
            };
            Some(FieldEntry::named(names, text))
        })
        .collect();
    FieldList { entries }
}

/// Result list: parenthesized results, or one unnamed entry for a bare type.
pub(super) fn result_list_of<D: ast_grep_core::Doc>(node: &Node<D>) -> FieldList {
    if node.kind().as_ref() == "parameter_list" {
        field_list_of(node)
    } else {
        FieldList {
            entries: vec![FieldEntry::unnamed(node.text().to_string())],
        }
    }
}

// ── Initializer expressions ───────────────────────────────────────

/// Expressions of an `expression_list`, or the node itself if it is a single expression.
pub(super) fn expressions_of<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<Expr> {
    if node.kind().as_ref() == "expression_list" {
        meaningful_children(node).iter().map(expr_of).collect()
    } else {
        vec![expr_of(node)]
    }
}

pub(super) fn expr_of<D: ast_grep_core::Doc>(node: &Node<D>) -> Expr {
    let text = node.text().to_string();
    match node.kind().as_ref() {
        "composite_literal" => Expr::Composite {
            text,
            ty: node.field("type").map(|t| TypeExpr::new(t.text().to_string())),
            elements: node
                .field("body")
                .map(|body| elements_of(&body))
                .unwrap_or_default(),
        },
        // Nested `{...}` with an elided type.
        "literal_value" => Expr::Composite {
            elements: elements_of(node),
            text,
            ty: None,
        },
        "interpreted_string_literal" => Expr::StringLiteral {
            value: strip_delimiters(&text, '"').to_string(),
            text,
        },
        "raw_string_literal" => Expr::StringLiteral {
            value: escape_raw(strip_delimiters(&text, '`')),
            text,
        },
        "parenthesized_expression" | "literal_element" => meaningful_children(node)
            .first()
            .map_or(Expr::Other { text }, expr_of),
        _ => Expr::Other { text },
    }
}

fn elements_of<D: ast_grep_core::Doc>(literal_value: &Node<D>) -> Vec<Element> {
    meaningful_children(literal_value)
        .iter()
        .filter_map(|child| match child.kind().as_ref() {
            "keyed_element" => {
                let parts = meaningful_children(child);
                let key = child.field("key").or_else(|| parts.first().cloned())?;
                let value = child.field("value").or_else(|| parts.last().cloned())?;
                Some(Element {
                    key: Some(key_text(&key)),
                    value: expr_of(&value),
                })
            }
            _ => Some(Element {
                key: None,
                value: expr_of(child),
            }),
        })
        .collect()
}

/// Key of a keyed element, unwrapping the `literal_element` wrapper.
fn key_text<D: ast_grep_core::Doc>(key: &Node<D>) -> String {
    if key.kind().as_ref() == "literal_element"
        && let Some(inner) = meaningful_children(key).first()
    {
        return inner.text().to_string();
    }
    key.text().to_string()
}

fn strip_delimiters(text: &str, delimiter: char) -> &str {
    text.strip_prefix(delimiter)
        .and_then(|t| t.strip_suffix(delimiter))
        .unwrap_or(text)
}

/// Re-escape a raw string body so it reads as an interpreted literal body.
fn escape_raw(body: &str) -> String {
    let mut escaped = String::with_capacity(body.len());
    for c in body.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_bodies_are_reescaped() {
        assert_eq!(escape_raw(r#"a "b" \c"#), r#"a \"b\" \\c"#);
        assert_eq!(escape_raw("line\r\nnext"), "line\\nnext");
    }

    #[test]
    fn delimiters_are_stripped_once() {
        assert_eq!(strip_delimiters("\"basic\"", '"'), "basic");
        assert_eq!(strip_delimiters("`raw`", '`'), "raw");
        assert_eq!(strip_delimiters("plain", '"'), "plain");
    }
}
