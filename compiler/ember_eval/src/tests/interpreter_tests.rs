use super::{run, run_with_mode};
use crate::EvalMode;
use pretty_assertions::assert_eq;

#[test]
fn numeric_literal_round_trip() {
    run("print 1.5;").expect_output("1.5\n");
    run("print 3;").expect_output("3\n");
}

#[test]
fn arithmetic_and_grouping() {
    run("print 1 + 2 * 3;").expect_output("7\n");
    run("print (1 + 2) * 3;").expect_output("9\n");
    run("print 10 / 4;").expect_output("2.5\n");
    run("print -(2 + 3);").expect_output("-5\n");
}

#[test]
fn string_concatenation() {
    run("print \"foo\" + \"bar\";").expect_output("foobar\n");
}

#[test]
fn mixed_concatenation_renders_numbers_without_trailing_zero() {
    run("print \"n=\" + 3;").expect_output("n=3\n");
    run("print 1.5 + \"!\";").expect_output("1.5!\n");
}

#[test]
fn shadowing_leaves_outer_binding_intact() {
    run("{ var x = 1; { var x = 2; } print x; }").expect_output("1\n");
}

#[test]
fn shadowed_read_sees_inner_binding() {
    run("{ var x = 1; { var x = 2; print x; } print x; }").expect_output("2\n1\n");
}

#[test]
fn global_redefinition_overwrites() {
    run("var a = 1; var a = 2; print a;").expect_output("2\n");
}

#[test]
fn global_rebinding_can_read_previous_value() {
    run("var a = 1; var a = a + 1; print a;").expect_output("2\n");
}

#[test]
fn var_without_initializer_is_nil() {
    run("var x; print x;").expect_output("nil\n");
}

#[test]
fn assignment_is_an_expression_returning_the_value() {
    run("var a = 1; var b = 2; print a = b = 3; print a; print b;")
        .expect_output("3\n3\n3\n");
}

#[test]
fn truthiness_in_conditionals() {
    run("if (0) print \"t\"; else print \"f\";").expect_output("f\n");
    run("if (\"\") print \"t\"; else print \"f\";").expect_output("f\n");
    run("if (\"x\") print \"t\"; else print \"f\";").expect_output("t\n");
    run("if (nil) print \"t\"; else print \"f\";").expect_output("f\n");
    run("if (-1) print \"t\"; else print \"f\";").expect_output("t\n");
}

#[test]
fn logical_operators_return_the_deciding_operand() {
    run("print \"a\" or \"b\";").expect_output("a\n");
    run("print nil or \"b\";").expect_output("b\n");
    run("print nil and 1;").expect_output("nil\n");
    run("print 1 and 2;").expect_output("2\n");
    run("print 0 or false;").expect_output("false\n");
}

#[test]
fn logical_operators_short_circuit_side_effects() {
    // The right operand is a call to an undefined name; short-circuiting
    // means it never evaluates.
    run("var t = 1; print t or boom();").expect_output("1\n");
    run("var f = nil; print f and boom();").expect_output("nil\n");
}

#[test]
fn ternary_evaluates_exactly_one_branch() {
    run("print 1 > 0 ? \"yes\" : boom();").expect_output("yes\n");
    run("print 0 ? boom() : \"no\";").expect_output("no\n");
}

#[test]
fn equality_on_mixed_kinds_is_false_not_an_error() {
    run("print 1 == \"1\";").expect_output("false\n");
    run("print nil == false;").expect_output("false\n");
    run("print nil == nil;").expect_output("true\n");
    run("print 2 != 3;").expect_output("true\n");
}

#[test]
fn print_renders_booleans_and_functions() {
    run("print true; print false;").expect_output("true\nfalse\n");
    run("fun f() {} print f;").expect_output("<fn f>\n");
    run("print clock;").expect_output("<native fn>\n");
}

#[test]
fn clock_native_returns_a_positive_number() {
    run("print clock() > 0;").expect_output("true\n");
}

#[test]
fn repl_mode_echoes_expression_statements() {
    run_with_mode("1 + 2;", EvalMode::Repl).expect_output("3\n");
}

#[test]
fn run_mode_discards_expression_statement_values() {
    run("1 + 2;").expect_output("");
}

#[test]
fn empty_program_is_fine() {
    run("").expect_output("");
}

#[test]
fn expression_statement_side_effects_still_happen_in_run_mode() {
    let result = run("var a = 0; a = 5; print a;");
    result.expect_output("5\n");
    assert_eq!(result.runtime_error, None);
}
