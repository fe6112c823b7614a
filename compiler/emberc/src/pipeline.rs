//! The shared front-half pipeline: lex → parse → resolve.
//!
//! Both `run` and the REPL drive this, then gate interpretation on the
//! absence of static errors. The gate lives here in the host, not in the
//! resolver.

use ember_diagnostic::{DiagnosticQueue, TerminalEmitter};
use ember_eval::{ResolvedLocals, Resolver};
use ember_ir::{ExprArena, Module, Name, StringInterner};

/// A resolved program, ready to interpret.
pub struct Prepared {
    pub module: Module,
    pub locals: ResolvedLocals,
}

/// Lex, parse, and resolve `source` into `arena`.
///
/// `known_globals` seeds the resolver with names the host has already
/// bound (natives, earlier REPL lines). If any phase reported an error,
/// emits every collected diagnostic and returns `None`.
pub fn prepare(
    source: &str,
    interner: &StringInterner,
    arena: &mut ExprArena,
    known_globals: &[Name],
) -> Option<Prepared> {
    let mut queue = DiagnosticQueue::new();

    let tokens = ember_lexer::lex(source, interner, &mut queue);
    let module = ember_parse::parse(&tokens, arena, &mut queue);

    let mut resolver = Resolver::new(interner, arena, &mut queue);
    for &name in known_globals {
        resolver.add_known_global(name);
    }
    let locals = resolver.resolve(&module);

    if queue.has_errors() {
        emit_diagnostics(&mut queue, source);
        return None;
    }
    Some(Prepared { module, locals })
}

/// Emit everything in the queue to stderr, sorted by source position.
pub fn emit_diagnostics(queue: &mut DiagnosticQueue, source: &str) {
    let diagnostics = queue.flush();
    let mut emitter = TerminalEmitter::stderr();
    // Best-effort: failing to write diagnostics to stderr is not itself
    // reportable.
    let _ = emitter.emit_all(&diagnostics, source);
}

/// Report a runtime error to stderr.
pub fn report_runtime_error(error: &ember_eval::EvalError, source: &str) {
    let mut diagnostic = ember_diagnostic::Diagnostic::error(error.message.clone());
    if let Some(span) = error.span {
        diagnostic = diagnostic.with_span(span);
    }
    let mut emitter = TerminalEmitter::stderr();
    let _ = emitter.emit(&diagnostic, source);
}
