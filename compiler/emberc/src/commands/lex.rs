//! `emberc lex <file>`: token stream dump for debugging.

use std::fs;

use ember_diagnostic::DiagnosticQueue;
use ember_ir::StringInterner;

use crate::pipeline::emit_diagnostics;

/// Dump the token stream of a file. Returns 0 even when the file has lex
/// errors: the dump plus diagnostics is the point.
pub fn lex_file(path: &str) -> i32 {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("error: cannot read '{path}': {error}");
            return 66;
        }
    };

    let interner = StringInterner::new();
    let mut queue = DiagnosticQueue::new();
    let tokens = ember_lexer::lex(&source, &interner, &mut queue);

    for token in tokens.iter() {
        println!("{:>5}..{:<5} {:?}", token.span.start, token.span.end, token.kind);
    }
    if !queue.is_empty() {
        emit_diagnostics(&mut queue, &source);
    }
    0
}
