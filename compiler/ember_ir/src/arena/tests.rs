use super::*;
use pretty_assertions::assert_eq;

#[test]
fn expr_ids_are_distinct_for_identical_kinds() {
    let mut arena = ExprArena::new();
    let a = arena.push_expr(ExprKind::Nil, Span::new(0, 3));
    let b = arena.push_expr(ExprKind::Nil, Span::new(10, 13));
    assert_ne!(a, b);
    assert_eq!(arena.expr(a), arena.expr(b));
    assert_eq!(arena.expr_span(a), Span::new(0, 3));
    assert_eq!(arena.expr_span(b), Span::new(10, 13));
}

#[test]
fn expr_list_round_trips() {
    let mut arena = ExprArena::new();
    let a = arena.push_expr(ExprKind::Bool(true), Span::DUMMY);
    let b = arena.push_expr(ExprKind::Bool(false), Span::DUMMY);
    let range = arena.push_expr_list(&[a, b]);
    assert_eq!(arena.exprs_in(range), &[a, b]);
}

#[test]
fn stmt_list_round_trips() {
    let mut arena = ExprArena::new();
    let e = arena.push_expr(ExprKind::Nil, Span::DUMMY);
    let s1 = arena.push_stmt(StmtKind::Expr(e), Span::DUMMY);
    let s2 = arena.push_stmt(StmtKind::Break, Span::DUMMY);
    let range = arena.push_stmt_list(&[s1, s2]);
    assert_eq!(arena.stmts_in(range), &[s1, s2]);
    assert_eq!(arena.stmt_count(), 2);
}

#[test]
fn params_round_trip() {
    let mut arena = ExprArena::new();
    let names = [Name::from_raw(1), Name::from_raw(2)];
    let range = arena.push_params(&names);
    assert_eq!(arena.params(range), &names);
    assert_eq!(range.len(), 2);
}

#[test]
fn empty_lists_are_empty_ranges() {
    let mut arena = ExprArena::new();
    let range = arena.push_expr_list(&[]);
    assert!(range.is_empty());
    assert_eq!(arena.exprs_in(range), &[] as &[ExprId]);
}
