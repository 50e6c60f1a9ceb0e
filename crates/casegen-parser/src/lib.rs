//! # casegen-parser
//!
//! ast-grep-based Go front end for casegen.
//!
//! Parses one Go file with the tree-sitter Go grammar and materializes the
//! flat declaration list consumed by `casegen-core`, together with a
//! [`GoTypeResolver`] built from the file's own type declarations.

mod error;
mod go;
mod parser;
mod resolver;

use std::path::Path;

pub use error::ParserError;
pub use go::{ParsedSource, parse_go};
pub use parser::{AstTree, detect_language, parse_source};
pub use resolver::{GoTypeResolver, canonical_type};

/// Read and parse the Go file at `path`.
///
/// # Errors
/// Returns `ParserError` if the extension is not `.go`, the file cannot be
/// read, or the source does not parse.
pub fn parse_file(path: &Path) -> Result<ParsedSource, ParserError> {
    detect_language(path)?;
    let source = std::fs::read_to_string(path)?;
    parse_go(&source)
}
