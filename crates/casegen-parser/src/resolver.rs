//! Type resolution from the declarations of a single Go file.
//!
//! There is no importer: only types declared in the file itself are known.
//! Type expressions are rendered the way Go prints types (`[]int`,
//! `map[string]int`, `struct{x int; y int}`), with local aliases expanded
//! and variadic parameters rendered as slices.

use std::collections::HashMap;

use casegen_core::{Expr, FunctionDecl, NamedType, TypeExpr, TypeKind, TypeResolver};

/// Alias and defined-type chains longer than this are treated as unresolved.
const MAX_CHAIN: usize = 16;

/// Underlying type of a locally defined type.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Underlying {
    Struct,
    Interface,
    /// Anything else, kept as text so `type A B` can follow `B`.
    Named(String),
}

#[derive(Debug, Clone, Default)]
pub struct GoTypeResolver {
    aliases: HashMap<String, String>,
    defined: HashMap<String, Underlying>,
    /// Result type of local single-result functions.
    function_results: HashMap<String, String>,
}

impl GoTypeResolver {
    /// Record `type name <ty>`; `ty_kind` is the tree-sitter kind of the type node.
    pub fn record_defined(&mut self, name: &str, ty_kind: &str, ty_text: &str) {
        let underlying = match ty_kind {
            "struct_type" => Underlying::Struct,
            "interface_type" => Underlying::Interface,
            _ => Underlying::Named(canonical_type(ty_text)),
        };
        self.defined.insert(name.to_string(), underlying);
    }

    /// Record `type name = ty`.
    pub fn record_alias(&mut self, name: &str, ty_text: &str) {
        self.aliases.insert(name.to_string(), canonical_type(ty_text));
    }

    /// Record the result type of a function with exactly one result.
    pub fn record_function(&mut self, decl: &FunctionDecl) {
        let Some(results) = &decl.results else {
            return;
        };
        if let [entry] = results.entries.as_slice()
            && entry.names.len() <= 1
        {
            self.function_results
                .insert(decl.name.clone(), canonical_type(&entry.ty.text));
        }
    }

    /// Canonical rendering of `text` with aliases expanded.
    #[must_use]
    pub fn render(&self, text: &str) -> String {
        let text = text.trim();
        let rendered = match text.strip_prefix("...") {
            Some(element) => format!("[]{}", canonical_type(element)),
            None => canonical_type(text),
        };
        self.expand_aliases(&rendered)
    }

    fn expand_aliases(&self, text: &str) -> String {
        if self.aliases.is_empty() {
            return text.to_string();
        }
        let mut current = text.to_string();
        for _ in 0..MAX_CHAIN {
            let next = replace_identifiers(&current, |ident| self.aliases.get(ident).cloned());
            if next == current {
                break;
            }
            current = next;
        }
        current
    }

    /// Kind of a locally declared type, following defined-type chains.
    fn kind_of(&self, name: &str) -> Option<TypeKind> {
        let mut name = name.to_string();
        for _ in 0..MAX_CHAIN {
            match self.defined.get(&name)? {
                Underlying::Struct => return Some(TypeKind::Struct),
                Underlying::Interface => return Some(TypeKind::Interface),
                Underlying::Named(next) => {
                    let next = self.expand_aliases(next);
                    if !self.defined.contains_key(&next) {
                        return Some(TypeKind::Other);
                    }
                    name = next;
                }
            }
        }
        Some(TypeKind::Other)
    }

    /// The named type written as `type_text`, if it is declared locally.
    fn named(&self, type_text: &str) -> Option<NamedType> {
        let expanded = self.expand_aliases(&canonical_type(type_text));
        let name = base_name(&expanded)?;
        let kind = self.kind_of(name)?;
        Some(NamedType {
            name: name.to_string(),
            kind,
        })
    }
}

impl TypeResolver for GoTypeResolver {
    fn resolve_type(&self, expr: &TypeExpr) -> Option<String> {
        Some(self.render(&expr.text))
    }

    fn resolve_value(&self, expr: &Expr) -> Option<NamedType> {
        match expr {
            Expr::Composite { ty: Some(ty), .. } => self.named(&ty.text),
            Expr::Other { text } => {
                let callee = called_function(text)?;
                match self.function_results.get(callee) {
                    Some(result) => self.named(result),
                    // Conversion to a local type: `testAddCase(other)`.
                    None => self.named(callee),
                }
            }
            _ => None,
        }
    }
}

/// Object name of a (possibly instantiated) named type: `Pair[int]` -> `Pair`.
///
/// Returns `None` for composite type expressions such as `[]T` or `*T`.
fn base_name(type_text: &str) -> Option<&str> {
    let name = type_text.split('[').next()?;
    if name == "map" {
        return None;
    }
    let name = name.rsplit('.').next()?;
    let mut chars = name.chars();
    let first = chars.next()?;
    let is_identifier = (first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_');
    is_identifier.then_some(name)
}

/// Callee of a plain call `name(...)`.
fn called_function(text: &str) -> Option<&str> {
    let text = text.trim();
    let open = text.find('(')?;
    if !text.ends_with(')') {
        return None;
    }
    let callee = text[..open].trim();
    let is_identifier = callee.chars().all(|c| c.is_alphanumeric() || c == '_');
    (!callee.is_empty() && is_identifier).then_some(callee)
}

/// Replace standalone identifiers for which `lookup` returns a substitute.
///
/// Identifiers qualified by a package (`pkg.Name`) are left alone.
fn replace_identifiers(text: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut ident = String::new();
    let mut qualified = false;

    let flush = |ident: &mut String, out: &mut String, qualified: bool| {
        if ident.is_empty() {
            return;
        }
        match (!qualified).then(|| lookup(ident.as_str())).flatten() {
            Some(replacement) => out.push_str(&replacement),
            None => out.push_str(ident),
        }
        ident.clear();
    };

    for c in text.chars() {
        if c.is_alphanumeric() || c == '_' {
            if ident.is_empty() {
                qualified = out.ends_with('.');
            }
            ident.push(c);
        } else {
            flush(&mut ident, &mut out, qualified);
            out.push(c);
        }
    }
    flush(&mut ident, &mut out, qualified);
    out
}

/// Render a type expression the way Go prints types.
///
/// Whitespace is normalized and grouped names in parameter lists and
/// struct fields are spelled out: `func(a, b int)` becomes
/// `func(a int, b int)`.
#[must_use]
pub fn canonical_type(text: &str) -> String {
    expand_grouped_names(&normalize_spacing(text))
}

/// No space after `[`, `(`, `{`, `*`, `]`; none before `]`, `)`, `}`, `,`,
/// `;`, `{`; one space after `,`. Line breaks inside braces become `; `.
fn normalize_spacing(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    let mut pending_newline = false;
    let mut depth = 0usize;

    for c in text.trim().chars() {
        if c.is_whitespace() {
            pending_space = true;
            pending_newline |= c == '\n';
            continue;
        }
        if pending_space {
            let prev = out.chars().next_back();
            let after_open = matches!(prev, Some('[' | '(' | '{' | '*' | ']' | ';'));
            let before_close = matches!(c, ']' | ')' | '}' | ',' | ';' | '{');
            if pending_newline && depth > 0 && !after_open && !before_close {
                out.push_str("; ");
            } else if !after_open && !before_close || prev == Some(';') && c != '}' {
                out.push(' ');
            }
            pending_space = false;
            pending_newline = false;
        }
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            _ => {}
        }
        if c == '}' && out.ends_with("; ") {
            out.truncate(out.len() - 2);
        }
        out.push(c);
        if c == ',' || c == ';' {
            pending_space = true;
        }
    }
    out
}

/// Spell out `a, b T` groups inside every `(...)` and `struct{...}`.
///
/// Expects [`normalize_spacing`] output.
fn expand_grouped_names(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open_at) = rest.find(['(', '{']) {
        let (head, tail) = rest.split_at(open_at);
        let (open, close) = if tail.starts_with('(') {
            ('(', ')')
        } else {
            ('{', '}')
        };
        let Some(close_at) = matching_close(tail, open, close) else {
            break;
        };
        let inner = expand_grouped_names(&tail[1..close_at]);

        out.push_str(head);
        out.push(open);
        if open == '(' {
            out.push_str(&expand_entries(&inner).join(", "));
        } else if head.ends_with("struct") {
            let fields: Vec<String> = split_top_level(&inner, ';')
                .into_iter()
                .flat_map(expand_entries)
                .collect();
            out.push_str(&fields.join("; "));
        } else {
            out.push_str(&inner);
        }
        out.push(close);
        rest = &tail[close_at + 1..];
    }
    out.push_str(rest);
    out
}

/// Byte offset of the bracket closing `text`'s leading `open`.
fn matching_close(text: &str, open: char, close: char) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return Some(i);
            }
        }
    }
    None
}

/// Split on `separator` outside any brackets, trimming each part.
fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            _ if c == separator && depth == 0 => {
                parts.push(text[start..i].trim());
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(text[start..].trim());
    parts.retain(|p| !p.is_empty());
    parts
}

/// Entries of one comma-separated list, with grouped names spelled out.
///
/// In a named list a bare identifier shares the type of the next named
/// entry; an unnamed list such as `(int, error)` is left as is.
fn expand_entries(list: &str) -> Vec<String> {
    let entries = split_top_level(list, ',');
    if !entries.iter().any(|e| named_entry(e).is_some()) {
        return entries.into_iter().map(str::to_string).collect();
    }

    let mut out = Vec::with_capacity(entries.len());
    let mut pending = Vec::new();
    for entry in entries {
        match named_entry(entry) {
            Some((name, ty)) => {
                out.extend(pending.drain(..).map(|p| format!("{p} {ty}")));
                out.push(format!("{name} {ty}"));
            }
            None => pending.push(entry),
        }
    }
    out.extend(pending.into_iter().map(str::to_string));
    out
}

/// `name T` split into its name and type; `None` for a bare type.
fn named_entry(entry: &str) -> Option<(&str, &str)> {
    let (name, ty) = entry.split_once(' ')?;
    let mut chars = name.chars();
    let is_identifier = chars.next().is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_');
    let is_type_keyword = matches!(name, "chan" | "func" | "map" | "struct" | "interface");
    (is_identifier && !is_type_keyword).then_some((name, ty))
}
