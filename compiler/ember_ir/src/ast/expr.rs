//! Expression node kinds.

use std::fmt;

use super::operators::{BinaryOp, LogicalOp, UnaryOp};
use crate::{ExprId, ExprRange, Name};

/// Expression variants.
///
/// All children are indices, not boxes. Number literals are stored as f64
/// bits so the kind stays `Copy + Eq + Hash`.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub enum ExprKind {
    /// `nil`
    Nil,

    /// `true`, `false`
    Bool(bool),

    /// Number literal: 42, 1.5 (stored as bits)
    Number(u64),

    /// String literal (interned)
    Str(Name),

    /// Parenthesized expression: `(expr)`
    Grouping(ExprId),

    /// Unary operation: `-x`, `!x`
    Unary { op: UnaryOp, operand: ExprId },

    /// Binary operation: `left op right`
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// Short-circuiting logical operation: `left and right`, `left or right`
    Logical {
        op: LogicalOp,
        left: ExprId,
        right: ExprId,
    },

    /// Conditional expression: `cond ? then : else`
    Ternary {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },

    /// Variable reference
    Variable(Name),

    /// Assignment: `name = value`
    Assign { name: Name, value: ExprId },

    /// Call: `callee(args...)`
    Call { callee: ExprId, args: ExprRange },
}

impl fmt::Debug for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprKind::Nil => write!(f, "Nil"),
            ExprKind::Bool(b) => write!(f, "Bool({b})"),
            ExprKind::Number(bits) => write!(f, "Number({})", f64::from_bits(*bits)),
            ExprKind::Str(n) => write!(f, "Str({n:?})"),
            ExprKind::Grouping(inner) => write!(f, "Grouping({inner:?})"),
            ExprKind::Unary { op, operand } => write!(f, "Unary({op:?}, {operand:?})"),
            ExprKind::Binary { op, left, right } => {
                write!(f, "Binary({op:?}, {left:?}, {right:?})")
            }
            ExprKind::Logical { op, left, right } => {
                write!(f, "Logical({op:?}, {left:?}, {right:?})")
            }
            ExprKind::Ternary {
                cond,
                then_branch,
                else_branch,
            } => write!(f, "Ternary({cond:?}, {then_branch:?}, {else_branch:?})"),
            ExprKind::Variable(n) => write!(f, "Variable({n:?})"),
            ExprKind::Assign { name, value } => write!(f, "Assign({name:?}, {value:?})"),
            ExprKind::Call { callee, args } => write!(f, "Call({callee:?}, {args:?})"),
        }
    }
}

// Keep the hot node kind compact.
crate::static_assert_size!(ExprKind, 16);
