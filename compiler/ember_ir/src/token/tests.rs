use super::*;
use pretty_assertions::assert_eq;

#[test]
fn number_value_extracts_bits() {
    let kind = TokenKind::Number(1.5_f64.to_bits());
    assert_eq!(kind.number_value(), Some(1.5));
    assert_eq!(TokenKind::Eof.number_value(), None);
}

#[test]
fn token_list_indexing() {
    let mut list = TokenList::new();
    list.push(Token::new(TokenKind::Var, Span::new(0, 3)));
    list.push(Token::new(TokenKind::Eof, Span::new(3, 3)));
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].kind, TokenKind::Var);
    assert_eq!(list.get(5), None);
}
