//! Statement node kinds.

use std::fmt;

use crate::{ExprId, Name, ParamRange, StmtId, StmtRange};

/// Statement variants.
///
/// Optional children use sentinel ids (`ExprId::INVALID`, `StmtId::INVALID`)
/// instead of `Option` to keep the kind `Copy` and compact. There is no
/// `For` variant: `for` loops desugar to `While` plus blocks at parse time.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub enum StmtKind {
    /// Expression statement
    Expr(ExprId),

    /// `print expr;`
    Print(ExprId),

    /// `var name = init;`: `ExprId::INVALID` = no initializer (defaults to nil).
    Var { name: Name, init: ExprId },

    /// `{ statements }`
    Block(StmtRange),

    /// `if (cond) then else`: `StmtId::INVALID` = no else branch.
    If {
        cond: ExprId,
        then_branch: StmtId,
        else_branch: StmtId,
    },

    /// `while (cond) body`
    While { cond: ExprId, body: StmtId },

    /// `break;`
    Break,

    /// `continue;`
    Continue,

    /// `fun name(params) { body }`
    Function {
        name: Name,
        params: ParamRange,
        body: StmtRange,
    },

    /// `return value;`: `ExprId::INVALID` = no value (returns nil).
    Return { value: ExprId },
}

impl fmt::Debug for StmtKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StmtKind::Expr(e) => write!(f, "Expr({e:?})"),
            StmtKind::Print(e) => write!(f, "Print({e:?})"),
            StmtKind::Var { name, init } => write!(f, "Var({name:?}, {init:?})"),
            StmtKind::Block(range) => write!(f, "Block({range:?})"),
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => write!(f, "If({cond:?}, {then_branch:?}, {else_branch:?})"),
            StmtKind::While { cond, body } => write!(f, "While({cond:?}, {body:?})"),
            StmtKind::Break => write!(f, "Break"),
            StmtKind::Continue => write!(f, "Continue"),
            StmtKind::Function { name, params, body } => {
                write!(f, "Function({name:?}, {params:?}, {body:?})")
            }
            StmtKind::Return { value } => write!(f, "Return({value:?})"),
        }
    }
}

crate::static_assert_size!(StmtKind, 24);
