//! Flat expression/statement arena.
//!
//! Struct-of-arrays layout: node kinds and spans live in parallel vectors
//! indexed by [`ExprId`] / [`StmtId`]. Child lists (call arguments, block
//! statements, parameter names) are flattened into shared side vectors
//! addressed by `(start, len)` ranges.

use crate::{ExprId, ExprKind, ExprRange, Name, ParamRange, Span, StmtId, StmtKind, StmtRange};

/// Convert a length to u32, panicking with context on overflow.
fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("arena overflow: too many {what}"))
}

/// Convert a length to u16, panicking with context on overflow.
fn to_u16(len: usize, what: &str) -> u16 {
    u16::try_from(len).unwrap_or_else(|_| panic!("arena overflow: too many {what}"))
}

/// Arena for expressions and statements.
#[derive(Debug, Default)]
pub struct ExprArena {
    /// Expression kinds (parallel with `expr_spans`).
    exprs: Vec<ExprKind>,
    /// Source spans for expressions (parallel with `exprs`).
    expr_spans: Vec<Span>,
    /// Statement kinds (parallel with `stmt_spans`).
    stmts: Vec<StmtKind>,
    /// Source spans for statements (parallel with `stmts`).
    stmt_spans: Vec<Span>,
    /// Flattened expression id lists (call arguments).
    expr_lists: Vec<ExprId>,
    /// Flattened statement id lists (blocks, function bodies).
    stmt_lists: Vec<StmtId>,
    /// Flattened parameter name lists.
    params: Vec<Name>,
}

impl ExprArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an expression node, returning its id.
    pub fn push_expr(&mut self, kind: ExprKind, span: Span) -> ExprId {
        let id = ExprId::new(to_u32(self.exprs.len(), "expressions"));
        self.exprs.push(kind);
        self.expr_spans.push(span);
        id
    }

    /// Allocate a statement node, returning its id.
    pub fn push_stmt(&mut self, kind: StmtKind, span: Span) -> StmtId {
        let id = StmtId::new(to_u32(self.stmts.len(), "statements"));
        self.stmts.push(kind);
        self.stmt_spans.push(span);
        id
    }

    /// Flatten an expression id list, returning its range.
    pub fn push_expr_list(&mut self, ids: &[ExprId]) -> ExprRange {
        let start = to_u32(self.expr_lists.len(), "expression list entries");
        self.expr_lists.extend_from_slice(ids);
        ExprRange::new(start, to_u16(ids.len(), "expressions in one list"))
    }

    /// Flatten a statement id list, returning its range.
    pub fn push_stmt_list(&mut self, ids: &[StmtId]) -> StmtRange {
        let start = to_u32(self.stmt_lists.len(), "statement list entries");
        self.stmt_lists.extend_from_slice(ids);
        StmtRange::new(start, to_u16(ids.len(), "statements in one list"))
    }

    /// Flatten a parameter name list, returning its range.
    pub fn push_params(&mut self, names: &[Name]) -> ParamRange {
        let start = to_u32(self.params.len(), "parameter list entries");
        self.params.extend_from_slice(names);
        ParamRange::new(start, to_u16(names.len(), "parameters in one list"))
    }

    /// Get an expression kind by id.
    #[inline]
    pub fn expr(&self, id: ExprId) -> &ExprKind {
        &self.exprs[id.index()]
    }

    /// Get an expression's source span.
    #[inline]
    pub fn expr_span(&self, id: ExprId) -> Span {
        self.expr_spans[id.index()]
    }

    /// Get a statement kind by id.
    #[inline]
    pub fn stmt(&self, id: StmtId) -> &StmtKind {
        &self.stmts[id.index()]
    }

    /// Get a statement's source span.
    #[inline]
    pub fn stmt_span(&self, id: StmtId) -> Span {
        self.stmt_spans[id.index()]
    }

    /// Resolve an expression range to its id slice.
    #[inline]
    pub fn exprs_in(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    /// Resolve a statement range to its id slice.
    #[inline]
    pub fn stmts_in(&self, range: StmtRange) -> &[StmtId] {
        let start = range.start as usize;
        &self.stmt_lists[start..start + range.len()]
    }

    /// Resolve a parameter range to its name slice.
    #[inline]
    pub fn params(&self, range: ParamRange) -> &[Name] {
        let start = range.start as usize;
        &self.params[start..start + range.len()]
    }

    /// Number of expressions allocated.
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    /// Number of statements allocated.
    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }
}

/// A parsed program: the ordered top-level statements.
///
/// The arena holding the nodes is passed alongside; a `Module` is only
/// meaningful together with the arena it was parsed into.
#[derive(Clone, Debug, Default)]
pub struct Module {
    pub stmts: Vec<StmtId>,
}

impl Module {
    pub fn new(stmts: Vec<StmtId>) -> Self {
        Module { stmts }
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}

#[cfg(test)]
mod tests;
