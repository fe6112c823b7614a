//! Natively-provided primitives.
//!
//! These are plain functions plus [`NativeFunction`] records; nothing here
//! is wired into the evaluator. Hosts inject what they want via
//! `Interpreter::define_native`.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::{EvalError, NativeFunction, Value};

/// Wall-clock time in seconds since the Unix epoch.
pub fn clock(_args: &[Value]) -> Result<Value, EvalError> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    Ok(Value::Number(elapsed.as_secs_f64()))
}

/// The `clock()` primitive.
pub const CLOCK: NativeFunction = NativeFunction {
    name: "clock",
    arity: 0,
    func: clock,
};
