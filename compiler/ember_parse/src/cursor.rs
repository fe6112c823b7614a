//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption. The token
//! list's trailing `Eof` guarantees the cursor can always read a token.

use ember_ir::{Span, Token, TokenKind, TokenList};

/// Cursor over a token list.
pub(crate) struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of the stream.
    pub(crate) fn new(tokens: &'a TokenList) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Current position in the token stream.
    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Get the current token.
    ///
    /// Invariant: the token list ends with `Eof`, so the clamp below only
    /// matters if the cursor is driven past it.
    #[inline]
    pub(crate) fn current(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len().saturating_sub(1))]
    }

    /// Get the current token's kind.
    #[inline]
    pub(crate) fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Get the current token's span.
    #[inline]
    pub(crate) fn current_span(&self) -> Span {
        self.current().span
    }

    /// Get the previous token's kind (`Eof` at the start of the stream).
    #[inline]
    pub(crate) fn previous_kind(&self) -> TokenKind {
        if self.pos > 0 {
            self.tokens[self.pos - 1].kind
        } else {
            TokenKind::Eof
        }
    }

    /// Get the previous token's span (`DUMMY` at the start of the stream).
    #[inline]
    pub(crate) fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    /// Check if at end of stream.
    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Check if the current token matches `kind` exactly.
    ///
    /// Payload-carrying kinds (numbers, strings, identifiers) are checked
    /// with their dedicated helpers instead.
    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Advance past the current token, returning it.
    ///
    /// At end of stream the cursor stays on `Eof`.
    pub(crate) fn advance(&mut self) -> Token {
        let token = *self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches `kind`.
    pub(crate) fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }
}
