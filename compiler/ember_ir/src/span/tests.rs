use super::*;
use pretty_assertions::assert_eq;

#[test]
fn from_range_round_trips() {
    let span = Span::from_range(3..9);
    assert_eq!(span.start, 3);
    assert_eq!(span.end, 9);
    assert_eq!(span.to_range(), 3..9);
    assert_eq!(span.len(), 6);
}

#[test]
fn merge_covers_both() {
    let a = Span::new(4, 8);
    let b = Span::new(10, 14);
    assert_eq!(a.merge(b), Span::new(4, 14));
    assert_eq!(b.merge(a), Span::new(4, 14));
}

#[test]
fn dummy_is_empty() {
    assert!(Span::DUMMY.is_empty());
    assert!(!Span::new(1, 2).is_empty());
}
