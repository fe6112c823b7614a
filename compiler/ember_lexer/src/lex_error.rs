//! Lexical error kinds.

use thiserror::Error;

/// Errors produced while scanning.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected character")]
    UnexpectedCharacter,

    #[error("unterminated string")]
    UnterminatedString,

    #[error("unterminated block comment")]
    UnterminatedBlockComment,
}

impl LexError {
    /// Whether everything after this error's span is consumed by it.
    ///
    /// True for an unterminated block comment: the missing `*/` means the
    /// rest of the input is comment text, so scanning stops.
    pub fn consumes_rest_of_input(self) -> bool {
        matches!(self, LexError::UnterminatedBlockComment)
    }
}
