use super::*;
use pretty_assertions::assert_eq;

#[test]
fn invalid_is_not_present() {
    assert!(!ExprId::INVALID.is_present());
    assert!(!StmtId::INVALID.is_present());
    assert!(ExprId::new(0).is_present());
}

#[test]
fn default_is_invalid() {
    assert_eq!(ExprId::default(), ExprId::INVALID);
    assert_eq!(StmtId::default(), StmtId::INVALID);
}

#[test]
fn range_len_and_empty() {
    let range = ExprRange::new(4, 3);
    assert_eq!(range.len(), 3);
    assert!(!range.is_empty());
    assert!(ExprRange::EMPTY.is_empty());
}

#[test]
fn debug_shows_bounds() {
    let range = StmtRange::new(2, 2);
    assert_eq!(format!("{range:?}"), "StmtRange(2..4)");
    assert_eq!(format!("{:?}", ExprId::new(7)), "ExprId(7)");
    assert_eq!(format!("{:?}", ExprId::INVALID), "ExprId::INVALID");
}
