//! Parser error types for casegen-parser.

/// Errors that can occur while reading and parsing a source file.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Parse failed for {language}: {message}")]
    ParseFailed { language: String, message: String },

    #[error("Language not supported: {0}")]
    UnsupportedLanguage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParserError {
    pub(crate) fn go(message: impl Into<String>) -> Self {
        Self::ParseFailed {
            language: "go".to_string(),
            message: message.into(),
        }
    }
}
