//! Tree-walking interpreter.
//!
//! Consumes the arena AST and the resolver's distance map. Statement
//! execution returns a [`Flow`] signal; expression evaluation returns a
//! [`Value`]. The current-environment cursor moves only through RAII scope
//! guards, so the previous frame is restored on every exit path, including
//! error propagation.

mod call;
mod eval;
mod exec;
pub(crate) mod format;
mod scope_guard;

pub use scope_guard::ScopedInterpreter;

use ember_ir::{ExprArena, Module, StringInterner};

use crate::environment::Environment;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::resolver::ResolvedLocals;
use crate::{EvalError, NativeFunction, Value};

/// How the interpreter surfaces expression-statement values.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EvalMode {
    /// Batch execution: expression statements discard their value.
    Run,
    /// Interactive session: expression statements echo their value.
    Repl,
}

impl EvalMode {
    /// Whether expression statements print their result.
    #[inline]
    pub fn echoes_expressions(self) -> bool {
        matches!(self, EvalMode::Repl)
    }
}

/// Tree-walking interpreter.
///
/// Borrows the interner, arena, and distance map; owns the environment.
/// A REPL reuses one environment across lines by moving it between
/// interpreter instances with [`Interpreter::with_env`] and
/// [`Interpreter::into_env`].
pub struct Interpreter<'a> {
    pub(crate) interner: &'a StringInterner,
    pub(crate) arena: &'a ExprArena,
    pub(crate) locals: &'a ResolvedLocals,
    pub(crate) env: Environment,
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) mode: EvalMode,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter with a fresh environment, stdout printing,
    /// and batch mode.
    pub fn new(
        interner: &'a StringInterner,
        arena: &'a ExprArena,
        locals: &'a ResolvedLocals,
    ) -> Self {
        Interpreter {
            interner,
            arena,
            locals,
            env: Environment::new(),
            print_handler: stdout_handler(),
            mode: EvalMode::Run,
        }
    }

    /// Set the evaluation mode.
    #[must_use]
    pub fn with_mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Route program output through `handler`.
    #[must_use]
    pub fn with_print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = handler;
        self
    }

    /// Adopt an existing environment (REPL continuation).
    #[must_use]
    pub fn with_env(mut self, env: Environment) -> Self {
        self.env = env;
        self
    }

    /// Extract the environment for the next REPL line.
    pub fn into_env(self) -> Environment {
        self.env
    }

    /// A shared reference to the environment.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Inject a native primitive into the global frame.
    ///
    /// The sole designed extension point: hosts register primitives before
    /// interpretation begins, and the evaluator's dispatch knows nothing
    /// about individual natives.
    pub fn define_native(&mut self, native: NativeFunction) {
        let name = self.interner.intern(native.name);
        self.env.define_global(name, Value::Native(native));
    }

    /// Execute a module for its side effects.
    ///
    /// At most one runtime error per call: the first error aborts the rest
    /// of this module's statements and is returned for the host to report.
    /// The environment keeps whatever definitions executed before the
    /// error.
    pub fn interpret(&mut self, module: &Module) -> Result<(), EvalError> {
        for &stmt in &module.stmts {
            let flow = self.exec_stmt(stmt)?;
            // The resolver rejects top-level return/break/continue, so
            // only Normal can reach here.
            debug_assert!(flow.is_normal(), "control-flow signal escaped to top level");
        }
        Ok(())
    }
}
