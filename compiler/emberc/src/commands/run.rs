//! `emberc run <file>`

use std::fs;

use ember_eval::{natives, Interpreter};
use ember_ir::{ExprArena, StringInterner};

use crate::pipeline::{prepare, report_runtime_error};

/// Run a script file. Returns the process exit code: 0 on success, 65 on
/// static errors, 70 on a runtime error.
pub fn run_file(path: &str) -> i32 {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("error: cannot read '{path}': {error}");
            return 66;
        }
    };

    let interner = StringInterner::new();
    let mut arena = ExprArena::new();

    // Natives are known globals for the resolver before they are bound at
    // runtime: `var clock = clock;` is re-binding, not self-reference.
    let clock_name = interner.intern(natives::CLOCK.name);
    let Some(prepared) = prepare(&source, &interner, &mut arena, &[clock_name]) else {
        return 65;
    };

    let mut interpreter = Interpreter::new(&interner, &arena, &prepared.locals);
    interpreter.define_native(natives::CLOCK);

    match interpreter.interpret(&prepared.module) {
        Ok(()) => 0,
        Err(error) => {
            report_runtime_error(&error, &source);
            70
        }
    }
}
