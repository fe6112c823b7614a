//! End-to-end tests: source text through lexer, parser, resolver, and
//! interpreter, asserting on captured print output.

mod interpreter_tests;

use ember_diagnostic::{Diagnostic, DiagnosticQueue};
use ember_ir::{ExprArena, StringInterner};

use crate::{buffer_handler, natives, EvalError, EvalMode, Interpreter, Resolver};

pub(crate) struct Run {
    pub(crate) output: String,
    pub(crate) runtime_error: Option<EvalError>,
    pub(crate) static_diagnostics: Vec<Diagnostic>,
}

impl Run {
    pub(crate) fn expect_output(&self, expected: &str) {
        assert!(
            self.static_diagnostics.is_empty(),
            "unexpected static errors: {:?}",
            self.static_diagnostics
        );
        assert!(
            self.runtime_error.is_none(),
            "unexpected runtime error: {:?}",
            self.runtime_error
        );
        pretty_assertions::assert_eq!(self.output, expected);
    }
}

pub(crate) fn run(source: &str) -> Run {
    run_with_mode(source, EvalMode::Run)
}

pub(crate) fn run_with_mode(source: &str, mode: EvalMode) -> Run {
    let interner = StringInterner::new();
    let mut queue = DiagnosticQueue::new();
    let tokens = ember_lexer::lex(source, &interner, &mut queue);
    let mut arena = ExprArena::new();
    let module = ember_parse::parse(&tokens, &mut arena, &mut queue);
    let locals = Resolver::new(&interner, &arena, &mut queue).resolve(&module);

    if queue.has_errors() {
        return Run {
            output: String::new(),
            runtime_error: None,
            static_diagnostics: queue.flush(),
        };
    }

    let handler = buffer_handler();
    let mut interpreter = Interpreter::new(&interner, &arena, &locals)
        .with_mode(mode)
        .with_print_handler(handler.clone());
    interpreter.define_native(natives::CLOCK);

    let result = interpreter.interpret(&module);
    Run {
        output: handler.get_output(),
        runtime_error: result.err(),
        static_diagnostics: Vec::new(),
    }
}
