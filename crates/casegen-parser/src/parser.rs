//! ast-grep wrapper and language detection from file extensions.

use std::path::Path;

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

use crate::error::ParserError;

/// The concrete AST tree type returned by `parse_source`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Detect the source language from a file path extension.
///
/// Only Go is supported.
///
/// # Errors
/// Returns `ParserError::UnsupportedLanguage` for any other extension.
pub fn detect_language(file_path: &Path) -> Result<SupportLang, ParserError> {
    match file_path.extension().and_then(|ext| ext.to_str()) {
        Some("go") => Ok(SupportLang::Go),
        _ => Err(ParserError::UnsupportedLanguage(
            file_path.display().to_string(),
        )),
    }
}

/// Parse Go source code into an ast-grep tree.
#[must_use]
pub fn parse_source(source: &str) -> AstTree {
    use ast_grep_language::LanguageExt;
    SupportLang::Go.ast_grep(source)
}
