//! Ember IR - core data structures for the Ember interpreter.
//!
//! This crate contains the types shared by every phase:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Tokens and `TokenList` for lexer output
//! - AST nodes (Expr, Stmt, Module) and the flat expression arena
//!
//! # Design Philosophy
//!
//! - **Intern everything**: strings become `Name(u32)`
//! - **Flatten everything**: no `Box<Expr>`, children are `ExprId(u32)` indices
//!
//! Node identity matters downstream: the resolver keys its distance map by
//! `ExprId`, so two syntactically identical expressions at different source
//! positions resolve independently. Float literals are stored as `u64` bits
//! so node kinds stay `Eq + Hash`.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod expr_id;
mod interner;
mod name;
mod span;
mod token;

pub use arena::{ExprArena, Module};
pub use ast::{BinaryOp, ExprKind, LogicalOp, StmtKind, UnaryOp};
pub use expr_id::{ExprId, ExprRange, ParamRange, StmtId, StmtRange};
pub use interner::StringInterner;
pub use name::Name;
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
