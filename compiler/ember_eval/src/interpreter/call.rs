//! The call protocol.

use ember_ir::{ExprId, ExprRange, Span};
use tracing::trace;

use crate::errors::{arity_mismatch, not_callable};
use crate::{EvalResult, Flow, FunctionValue, Value};

use super::Interpreter;

impl Interpreter<'_> {
    /// Evaluate a call expression: callee first, then arguments left to
    /// right, then the invocation.
    #[tracing::instrument(level = "trace", skip(self))]
    pub(crate) fn eval_call_expr(
        &mut self,
        callee: ExprId,
        args: ExprRange,
        span: Span,
    ) -> EvalResult {
        let callee = self.eval(callee)?;

        let arena = self.arena;
        let mut arg_values = Vec::with_capacity(args.len());
        for &arg in arena.exprs_in(args) {
            arg_values.push(self.eval(arg)?);
        }

        self.call_value(&callee, &arg_values, span)
    }

    /// Invoke a callable value with already-evaluated arguments.
    ///
    /// The uniform contract: the callee must be callable, and the argument
    /// count must exactly equal its arity.
    pub fn call_value(&mut self, callee: &Value, args: &[Value], span: Span) -> EvalResult {
        match callee {
            Value::Function(function) => {
                let arity = function.arity();
                if args.len() != arity {
                    return Err(arity_mismatch(arity, args.len()).with_span(span));
                }
                trace!(name = self.interner.lookup(function.name), "call function");
                self.call_function(function, args)
            }
            Value::Native(native) => {
                let arity = usize::from(native.arity);
                if args.len() != arity {
                    return Err(arity_mismatch(arity, args.len()).with_span(span));
                }
                trace!(name = native.name, "call native");
                (native.func)(args).map_err(|error| error.with_span(span))
            }
            other => Err(not_callable(other.type_name()).with_span(span)),
        }
    }

    /// Call a user function: a fresh frame whose parent is the **captured**
    /// frame (lexical scoping: never the caller's frame), parameters bound
    /// left to right, body executed as a block.
    ///
    /// A `Return` signal supplies the result; falling off the end yields
    /// nil.
    fn call_function(&mut self, function: &FunctionValue, args: &[Value]) -> EvalResult {
        let arena = self.arena;
        let params = arena.params(function.params);
        let body = function.body;

        let mut scoped = self.scoped_at(&function.closure);
        for (&param, arg) in params.iter().zip(args) {
            scoped.env.define(param, arg.clone());
        }

        match scoped.exec_block(body)? {
            Flow::Return(value) => Ok(value),
            _ => Ok(Value::Nil),
        }
    }
}
