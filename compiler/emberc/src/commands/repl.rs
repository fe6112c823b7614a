//! `emberc repl`
//!
//! Reads a line at a time. Global bindings persist across lines: the
//! arena, interner, distance map, and environment accumulate, and new
//! parses append to the same arena so closures from earlier lines keep
//! valid node ids. Expression statements echo their value.

use std::io::{self, BufRead, Write};

use ember_eval::{natives, Environment, EvalMode, Interpreter, ResolvedLocals, Value};
use ember_ir::{ExprArena, StringInterner};

use crate::pipeline::{prepare, report_runtime_error};

/// Run the interactive session until end of input. Always exits 0: errors
/// are reported per line and the session keeps going.
pub fn repl() -> i32 {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let mut locals = ResolvedLocals::new();
    let mut env = Environment::new();

    let clock_name = interner.intern(natives::CLOCK.name);
    env.define_global(clock_name, Value::Native(natives::CLOCK));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!(">>> ");
        let _ = io::stdout().flush();

        let Some(Ok(line)) = lines.next() else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let known_globals = env.globals().borrow().names();
        let Some(prepared) = prepare(&line, &interner, &mut arena, &known_globals) else {
            // Static errors reset per line; the session continues.
            continue;
        };
        locals.extend(prepared.locals);

        let mut interpreter = Interpreter::new(&interner, &arena, &locals)
            .with_mode(EvalMode::Repl)
            .with_env(env);
        if let Err(error) = interpreter.interpret(&prepared.module) {
            report_runtime_error(&error, &line);
        }
        env = interpreter.into_env();
    }

    0
}
