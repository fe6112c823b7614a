use super::*;
use pretty_assertions::assert_eq;

#[test]
fn integral_numbers_have_no_trailing_zero() {
    assert_eq!(number_to_string(3.0), "3");
    assert_eq!(number_to_string(0.0), "0");
    assert_eq!(number_to_string(-7.0), "-7");
}

#[test]
fn fractional_numbers_keep_their_fraction() {
    assert_eq!(number_to_string(1.5), "1.5");
    assert_eq!(number_to_string(-0.25), "-0.25");
}
