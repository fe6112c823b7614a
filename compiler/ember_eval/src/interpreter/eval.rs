//! Expression evaluation.

use ember_ir::{ExprId, ExprKind, LogicalOp, Name, Span};

use crate::errors::undefined_variable;
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::{EvalResult, Value};

use super::Interpreter;

impl Interpreter<'_> {
    /// Evaluate one expression.
    pub(crate) fn eval(&mut self, id: ExprId) -> EvalResult {
        let arena = self.arena;
        let span = arena.expr_span(id);
        match *arena.expr(id) {
            ExprKind::Nil => Ok(Value::Nil),
            ExprKind::Bool(b) => Ok(Value::Bool(b)),
            ExprKind::Number(bits) => Ok(Value::Number(f64::from_bits(bits))),
            ExprKind::Str(name) => Ok(Value::string(self.interner.lookup(name))),

            ExprKind::Grouping(inner) => self.eval(inner),

            ExprKind::Unary { op, operand } => {
                let operand = self.eval(operand)?;
                evaluate_unary(op, &operand, span)
            }

            ExprKind::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                evaluate_binary(op, &left, &right, span)
            }

            ExprKind::Logical { op, left, right } => {
                let left = self.eval(left)?;
                // The deciding operand is returned as-is, not coerced to
                // a boolean.
                match op {
                    LogicalOp::Or if left.is_truthy() => Ok(left),
                    LogicalOp::And if !left.is_truthy() => Ok(left),
                    LogicalOp::Or | LogicalOp::And => self.eval(right),
                }
            }

            ExprKind::Ternary {
                cond,
                then_branch,
                else_branch,
            } => {
                // Exactly one branch evaluates.
                if self.eval(cond)?.is_truthy() {
                    self.eval(then_branch)
                } else {
                    self.eval(else_branch)
                }
            }

            ExprKind::Variable(name) => self.lookup_variable(id, name, span),

            ExprKind::Assign { name, value } => {
                let value = self.eval(value)?;
                self.assign_variable(id, name, value, span)
            }

            ExprKind::Call { callee, args } => self.eval_call_expr(callee, args, span),
        }
    }

    /// Distance-aware read with global fallback.
    fn lookup_variable(&self, id: ExprId, name: Name, span: Span) -> EvalResult {
        let found = if let Some(distance) = self.locals.distance(id) {
            // The resolver guarantees the binding exists at this depth.
            self.env.get_at(distance, name)
        } else {
            self.env.get_global(name)
        };
        found.ok_or_else(|| undefined_variable(self.interner.lookup(name)).with_span(span))
    }

    /// Distance-aware write with global fallback. Assignment is an
    /// expression: the assigned value is returned.
    fn assign_variable(&mut self, id: ExprId, name: Name, value: Value, span: Span) -> EvalResult {
        let assigned = if let Some(distance) = self.locals.distance(id) {
            self.env.assign_at(distance, name, value.clone())
        } else {
            self.env.assign_global(name, value.clone())
        };
        if assigned {
            Ok(value)
        } else {
            Err(undefined_variable(self.interner.lookup(name)).with_span(span))
        }
    }
}
