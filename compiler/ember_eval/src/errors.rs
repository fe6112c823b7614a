//! Runtime error types and factory constructors.
//!
//! Each factory populates a structured [`EvalErrorKind`] and its rendered
//! message. Raising a runtime error aborts the current `interpret` call
//! only; the host process keeps running.

use std::fmt;

use ember_ir::{BinaryOp, Span, UnaryOp};

use crate::Value;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
///
/// A closed, matchable set so hosts and tests can switch on the kind
/// instead of parsing message strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// Read or assignment of a name absent from every frame.
    UndefinedVariable { name: String },
    /// Unary operator applied to a non-number.
    OperandMustBeNumber { op: UnaryOp },
    /// Arithmetic/comparison operator applied to non-numbers.
    OperandsMustBeNumbers { op: BinaryOp },
    /// `+` applied to an unsupported combination.
    InvalidAddition,
    /// Division with a zero divisor.
    DivisionByZero,
    /// Call of a value that is not a function.
    NotCallable { type_name: &'static str },
    /// Call with the wrong number of arguments.
    ArityMismatch { expected: usize, got: usize },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "undefined variable '{name}'"),
            Self::OperandMustBeNumber { op } => {
                write!(f, "operand must be a number for `{op}`")
            }
            Self::OperandsMustBeNumbers { op } => {
                write!(f, "operands must be numbers for `{op}`")
            }
            Self::InvalidAddition => {
                write!(f, "operands of `+` must be numbers or strings")
            }
            Self::DivisionByZero => write!(f, "cannot divide by zero"),
            Self::NotCallable { type_name } => {
                write!(f, "can only call functions, not {type_name}")
            }
            Self::ArityMismatch { expected, got } => {
                write!(f, "expected {expected} arguments but got {got}")
            }
        }
    }
}

/// Runtime error.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalError {
    /// Structured category.
    pub kind: EvalErrorKind,
    /// Rendered message (equals `kind.to_string()`).
    pub message: String,
    /// Source location of the offending operator, name, or call.
    pub span: Option<Span>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            span: None,
        }
    }

    /// Attach a source span if one is not already present.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Factory constructors

pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

pub fn operand_must_be_number(op: UnaryOp) -> EvalError {
    EvalError::from_kind(EvalErrorKind::OperandMustBeNumber { op })
}

pub fn operands_must_be_numbers(op: BinaryOp) -> EvalError {
    EvalError::from_kind(EvalErrorKind::OperandsMustBeNumbers { op })
}

pub fn invalid_addition() -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidAddition)
}

pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

pub fn not_callable(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable { type_name })
}

pub fn arity_mismatch(expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch { expected, got })
}
