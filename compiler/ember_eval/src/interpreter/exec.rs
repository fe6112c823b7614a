//! Statement execution.

use ember_ir::{StmtId, StmtKind, StmtRange};

use crate::{EvalError, Flow, FunctionValue, Value};

use super::Interpreter;

impl Interpreter<'_> {
    /// Execute one statement, yielding its control-flow signal.
    pub(crate) fn exec_stmt(&mut self, id: StmtId) -> Result<Flow, EvalError> {
        let arena = self.arena;
        match *arena.stmt(id) {
            StmtKind::Expr(expr) => {
                let value = self.eval(expr)?;
                if self.mode.echoes_expressions() {
                    let text = self.stringify(&value);
                    self.print_handler.println(&text);
                }
                Ok(Flow::Normal)
            }

            StmtKind::Print(expr) => {
                let value = self.eval(expr)?;
                let text = self.stringify(&value);
                self.print_handler.println(&text);
                Ok(Flow::Normal)
            }

            StmtKind::Var { name, init } => {
                let value = if init.is_present() {
                    self.eval(init)?
                } else {
                    Value::Nil
                };
                self.env.define(name, value);
                Ok(Flow::Normal)
            }

            StmtKind::Block(range) => {
                let mut scoped = self.scoped();
                scoped.exec_block(range)
            }

            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval(cond)?.is_truthy() {
                    self.exec_stmt(then_branch)
                } else if else_branch.is_present() {
                    self.exec_stmt(else_branch)
                } else {
                    Ok(Flow::Normal)
                }
            }

            StmtKind::While { cond, body } => {
                // One iterative construct: Continue falls through to the
                // condition re-check, never re-enters the loop recursively.
                while self.eval(cond)?.is_truthy() {
                    match self.exec_stmt(body)? {
                        Flow::Normal | Flow::Continue => {}
                        Flow::Break => break,
                        signal @ Flow::Return(_) => return Ok(signal),
                    }
                }
                Ok(Flow::Normal)
            }

            StmtKind::Break => Ok(Flow::Break),

            StmtKind::Continue => Ok(Flow::Continue),

            StmtKind::Function { name, params, body } => {
                // The closure captures the frame that is current at the
                // declaration site; defining the name in that same frame
                // afterwards is what makes recursion-by-name work.
                let function = FunctionValue {
                    name,
                    params,
                    body,
                    closure: self.env.current().clone(),
                };
                self.env.define(name, Value::Function(function));
                Ok(Flow::Normal)
            }

            StmtKind::Return { value } => {
                let value = if value.is_present() {
                    self.eval(value)?
                } else {
                    Value::Nil
                };
                Ok(Flow::Return(value))
            }
        }
    }

    /// Execute a statement list, stopping at the first non-normal signal.
    ///
    /// The caller is responsible for the surrounding scope; the signal
    /// propagates through it with the scope guard restoring frames on the
    /// way out.
    pub(crate) fn exec_block(&mut self, range: StmtRange) -> Result<Flow, EvalError> {
        let arena = self.arena;
        for &stmt in arena.stmts_in(range) {
            let flow = self.exec_stmt(stmt)?;
            if !flow.is_normal() {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }
}
