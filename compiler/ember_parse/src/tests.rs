use super::*;
use ember_diagnostic::DiagnosticQueue;
use ember_ir::{ExprArena, ExprKind, StmtKind, StringInterner};
use pretty_assertions::assert_eq;

struct Parsed {
    module: Module,
    arena: ExprArena,
    queue: DiagnosticQueue,
    interner: StringInterner,
}

fn parse_source(source: &str) -> Parsed {
    let interner = StringInterner::new();
    let mut queue = DiagnosticQueue::new();
    let tokens = ember_lexer::lex(source, &interner, &mut queue);
    let mut arena = ExprArena::new();
    let module = parse(&tokens, &mut arena, &mut queue);
    Parsed {
        module,
        arena,
        queue,
        interner,
    }
}

#[test]
fn parses_var_declaration_with_initializer() {
    let parsed = parse_source("var x = 1;");
    assert!(!parsed.queue.has_errors());
    assert_eq!(parsed.module.stmts.len(), 1);
    match *parsed.arena.stmt(parsed.module.stmts[0]) {
        StmtKind::Var { name, init } => {
            assert_eq!(parsed.interner.lookup(name), "x");
            assert!(init.is_present());
        }
        ref other => panic!("expected var statement, got {other:?}"),
    }
}

#[test]
fn var_without_initializer_uses_sentinel() {
    let parsed = parse_source("var x;");
    match *parsed.arena.stmt(parsed.module.stmts[0]) {
        StmtKind::Var { init, .. } => assert!(!init.is_present()),
        ref other => panic!("expected var statement, got {other:?}"),
    }
}

#[test]
fn parses_function_declaration() {
    let parsed = parse_source("fun add(a, b) { return a + b; }");
    assert!(!parsed.queue.has_errors());
    match *parsed.arena.stmt(parsed.module.stmts[0]) {
        StmtKind::Function { name, params, body } => {
            assert_eq!(parsed.interner.lookup(name), "add");
            assert_eq!(params.len(), 2);
            assert_eq!(body.len(), 1);
        }
        ref other => panic!("expected function statement, got {other:?}"),
    }
}

#[test]
fn precedence_binds_factor_tighter_than_term() {
    let parsed = parse_source("1 + 2 * 3;");
    let StmtKind::Expr(root) = *parsed.arena.stmt(parsed.module.stmts[0]) else {
        panic!("expected expression statement");
    };
    let ExprKind::Binary {
        op: ember_ir::BinaryOp::Add,
        right,
        ..
    } = *parsed.arena.expr(root)
    else {
        panic!("expected + at the root, got {:?}", parsed.arena.expr(root));
    };
    assert!(matches!(
        *parsed.arena.expr(right),
        ExprKind::Binary {
            op: ember_ir::BinaryOp::Mul,
            ..
        }
    ));
}

#[test]
fn ternary_parses_both_branches() {
    let parsed = parse_source("var r = 1 > 0 ? \"yes\" : \"no\";");
    assert!(!parsed.queue.has_errors());
    let StmtKind::Var { init, .. } = *parsed.arena.stmt(parsed.module.stmts[0]) else {
        panic!("expected var statement");
    };
    assert!(matches!(
        *parsed.arena.expr(init),
        ExprKind::Ternary { .. }
    ));
}

#[test]
fn assignment_builds_assign_node() {
    let parsed = parse_source("x = 2;");
    let StmtKind::Expr(root) = *parsed.arena.stmt(parsed.module.stmts[0]) else {
        panic!("expected expression statement");
    };
    assert!(matches!(*parsed.arena.expr(root), ExprKind::Assign { .. }));
}

#[test]
fn invalid_assignment_target_reports_without_losing_statement() {
    let parsed = parse_source("1 = 2;");
    assert_eq!(parsed.queue.error_count(), 1);
    assert!(parsed.queue.diagnostics()[0]
        .message
        .contains("invalid assignment target"));
    // The statement still parses (as its left operand).
    assert_eq!(parsed.module.stmts.len(), 1);
}

#[test]
fn call_arguments_are_collected() {
    let parsed = parse_source("f(1, 2, 3);");
    let StmtKind::Expr(root) = *parsed.arena.stmt(parsed.module.stmts[0]) else {
        panic!("expected expression statement");
    };
    let ExprKind::Call { args, .. } = *parsed.arena.expr(root) else {
        panic!("expected call expression");
    };
    assert_eq!(args.len(), 3);
}

#[test]
fn for_desugars_to_while_in_a_block() {
    let parsed = parse_source("for (var i = 0; i < 3; i = i + 1) print i;");
    assert!(!parsed.queue.has_errors());
    // Outer block: initializer + while.
    let StmtKind::Block(range) = *parsed.arena.stmt(parsed.module.stmts[0]) else {
        panic!(
            "expected desugared block, got {:?}",
            parsed.arena.stmt(parsed.module.stmts[0])
        );
    };
    let stmts = parsed.arena.stmts_in(range);
    assert_eq!(stmts.len(), 2);
    assert!(matches!(*parsed.arena.stmt(stmts[0]), StmtKind::Var { .. }));
    let StmtKind::While { body, .. } = *parsed.arena.stmt(stmts[1]) else {
        panic!("expected while loop");
    };
    // Inner block: body + increment.
    let StmtKind::Block(inner) = *parsed.arena.stmt(body) else {
        panic!("expected inner block with increment");
    };
    assert_eq!(parsed.arena.stmts_in(inner).len(), 2);
}

#[test]
fn for_without_clauses_desugars_to_bare_while() {
    let parsed = parse_source("for (;;) break;");
    assert!(!parsed.queue.has_errors());
    let StmtKind::While { cond, body } = *parsed.arena.stmt(parsed.module.stmts[0]) else {
        panic!("expected bare while");
    };
    assert!(matches!(*parsed.arena.expr(cond), ExprKind::Bool(true)));
    assert!(matches!(*parsed.arena.stmt(body), StmtKind::Break));
}

#[test]
fn error_recovery_resumes_at_statement_boundary() {
    let parsed = parse_source("var x = ;\nprint 1;");
    assert!(parsed.queue.has_errors());
    // Synchronization stops after the bad statement's ';', so the print
    // statement survives.
    assert_eq!(parsed.module.stmts.len(), 1);
    assert!(matches!(
        *parsed.arena.stmt(parsed.module.stmts[0]),
        StmtKind::Print(_)
    ));
}

#[test]
fn multiple_errors_surface_in_one_pass() {
    let parsed = parse_source("var 1;\nvar 2;");
    assert_eq!(parsed.queue.error_count(), 2);
}

#[test]
fn class_keyword_has_no_production() {
    let parsed = parse_source("class Foo {}");
    assert!(parsed.queue.has_errors());
    assert!(parsed.module.stmts.is_empty());
}
