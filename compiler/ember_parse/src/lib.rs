//! Recursive-descent parser for Ember.
//!
//! Consumes a [`TokenList`] and builds nodes into an [`ExprArena`],
//! returning the [`Module`] of top-level statement ids. Parse errors are
//! reported to the diagnostic queue; recovery is panic-mode, synchronizing
//! at statement boundaries so several errors surface in one pass.
//!
//! The arena is taken `&mut` rather than created here so that a REPL can
//! keep appending parses to one arena: closures created by earlier lines
//! hold ids into it.

mod cursor;
mod error;
mod grammar;

pub use error::ParseError;

use ember_diagnostic::DiagnosticQueue;
use ember_ir::{ExprArena, Module, TokenList};

use grammar::Parser;

/// Parse a token list into a module.
///
/// Statements that fail to parse are dropped from the module after error
/// recovery; the diagnostics in `queue` record why.
pub fn parse(tokens: &TokenList, arena: &mut ExprArena, queue: &mut DiagnosticQueue) -> Module {
    let mut parser = Parser::new(tokens, arena, queue);
    parser.parse_module()
}

#[cfg(test)]
mod tests;
