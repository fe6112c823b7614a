//! Lexer for Ember using logos with string interning.
//!
//! Produces a [`TokenList`] whose identifiers and string literals are
//! interned `Name`s. Lexical errors are reported to the diagnostic queue
//! without aborting the scan, so several errors can surface in one pass.

mod cook;
mod lex_error;
mod raw;

pub use cook::cook_number;
pub use lex_error::LexError;

use ember_diagnostic::{Diagnostic, DiagnosticQueue};
use ember_ir::{Span, StringInterner, Token, TokenKind, TokenList};
use logos::Logos;

use raw::RawToken;

/// Scan `source` into a token list.
///
/// The returned list always ends with an `Eof` token. Unexpected characters
/// and unterminated strings are reported and skipped; an unterminated block
/// comment consumes the rest of the input (everything after `/*` is
/// comment), so scanning stops there.
pub fn lex(source: &str, interner: &StringInterner, queue: &mut DiagnosticQueue) -> TokenList {
    let mut tokens = TokenList::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let span = Span::from_range(lexer.span());
        match result {
            Ok(raw) => match cook::cook(raw, lexer.slice(), interner) {
                Ok(kind) => tokens.push(Token::new(kind, span)),
                Err(error) => {
                    queue.add(Diagnostic::error(error.to_string()).with_span(span));
                    if error.consumes_rest_of_input() {
                        break;
                    }
                }
            },
            Err(()) => {
                queue.add(
                    Diagnostic::error(LexError::UnexpectedCharacter.to_string()).with_span(span),
                );
            }
        }
    }

    let end = u32::try_from(source.len()).unwrap_or(u32::MAX);
    tokens.push(Token::new(TokenKind::Eof, Span::new(end, end)));
    tokens
}

#[cfg(test)]
mod tests;
