use super::*;
use ember_ir::TokenKind;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> (Vec<TokenKind>, DiagnosticQueue) {
    let interner = StringInterner::new();
    let mut queue = DiagnosticQueue::new();
    let tokens = lex(source, &interner, &mut queue);
    (tokens.iter().map(|t| t.kind).collect(), queue)
}

#[test]
fn scans_keywords_and_punctuation() {
    let (kinds, queue) = kinds("var x = 1;");
    assert!(!queue.has_errors());
    let interner = StringInterner::new();
    let x = interner.intern("x");
    // Names come from a fresh interner with the same insertion order, so the
    // raw ids line up.
    assert_eq!(
        kinds,
        vec![
            TokenKind::Var,
            TokenKind::Ident(x),
            TokenKind::Equal,
            TokenKind::Number(1.0_f64.to_bits()),
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn scans_two_char_operators() {
    let (kinds, queue) = kinds("! != = == < <= > >=");
    assert!(!queue.has_errors());
    assert_eq!(
        kinds,
        vec![
            TokenKind::Bang,
            TokenKind::BangEqual,
            TokenKind::Equal,
            TokenKind::EqualEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn number_literal_round_trips() {
    let (kinds, queue) = kinds("1.5");
    assert!(!queue.has_errors());
    assert_eq!(kinds[0], TokenKind::Number(1.5_f64.to_bits()));
}

#[test]
fn integer_number_has_no_fraction() {
    let (kinds, _) = kinds("3");
    assert_eq!(kinds[0].number_value(), Some(3.0));
}

#[test]
fn trailing_dot_is_not_part_of_number() {
    let (kinds, queue) = kinds("1.");
    assert!(!queue.has_errors());
    assert_eq!(
        kinds,
        vec![
            TokenKind::Number(1.0_f64.to_bits()),
            TokenKind::Dot,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn string_contents_are_interned_without_quotes() {
    let interner = StringInterner::new();
    let mut queue = DiagnosticQueue::new();
    let tokens = lex("\"hello\"", &interner, &mut queue);
    assert!(!queue.has_errors());
    match tokens[0].kind {
        TokenKind::Str(name) => assert_eq!(interner.lookup(name), "hello"),
        other => panic!("expected string token, got {other:?}"),
    }
}

#[test]
fn strings_may_span_lines() {
    let (kinds, queue) = kinds("\"a\nb\"");
    assert!(!queue.has_errors());
    assert!(matches!(kinds[0], TokenKind::Str(_)));
}

#[test]
fn comments_are_skipped() {
    let (kinds, queue) = kinds("// line\n1 /* block\nspanning */ 2");
    assert!(!queue.has_errors());
    assert_eq!(
        kinds,
        vec![
            TokenKind::Number(1.0_f64.to_bits()),
            TokenKind::Number(2.0_f64.to_bits()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn block_comment_ending_in_extra_star_is_closed() {
    let (kinds, queue) = kinds("/* tricky **/ 7");
    assert!(!queue.has_errors());
    assert_eq!(kinds[0].number_value(), Some(7.0));
}

#[test]
fn unexpected_character_is_reported_and_skipped() {
    let (kinds, queue) = kinds("1 @ 2");
    assert_eq!(queue.error_count(), 1);
    assert_eq!(kinds.len(), 3); // two numbers + Eof
}

#[test]
fn unterminated_string_is_reported() {
    let (_, queue) = kinds("\"oops");
    assert_eq!(queue.error_count(), 1);
    assert!(queue.diagnostics()[0].message.contains("unterminated string"));
}

#[test]
fn unterminated_block_comment_consumes_rest() {
    let (kinds, queue) = kinds("1 /* never closed\nmore text");
    assert_eq!(queue.error_count(), 1);
    assert!(queue.diagnostics()[0]
        .message
        .contains("unterminated block comment"));
    assert_eq!(kinds.len(), 2); // the leading number + Eof
}

#[test]
fn class_family_keywords_are_recognized() {
    let (kinds, queue) = kinds("class this super");
    assert!(!queue.has_errors());
    assert_eq!(
        kinds,
        vec![
            TokenKind::Class,
            TokenKind::This,
            TokenKind::Super,
            TokenKind::Eof,
        ]
    );
}

mod cook_number_tests {
    use crate::cook_number;
    use pretty_assertions::assert_eq;

    #[test]
    fn integer_accumulation() {
        assert_eq!(cook_number("0"), 0.0);
        assert_eq!(cook_number("42"), 42.0);
        assert_eq!(cook_number("1234567890"), 1_234_567_890.0);
    }

    #[test]
    fn fractional_accumulation() {
        assert_eq!(cook_number("1.5"), 1.5);
        assert_eq!(cook_number("0.5"), 0.5);
    }

    #[test]
    fn leading_zeros_are_harmless() {
        assert_eq!(cook_number("007"), 7.0);
    }
}
