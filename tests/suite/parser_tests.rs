//! Parser tests for the subscript spec grammar.

use einsum_plan::error::EinsumError;
use einsum_plan::notation::parse_spec;
use pretty_assertions::assert_eq;

#[test]
fn test_parse_basic_contraction() {
    let spec = parse_spec("pqrs,rk->qpks").unwrap();
    assert_eq!(spec.left().to_label_string(), "pqrs");
    assert_eq!(spec.right().to_label_string(), "rk");
    assert_eq!(spec.output().to_label_string(), "qpks");
}

#[test]
fn test_parse_round_trips_through_display() {
    let spec = parse_spec("abcd,def->abcef").unwrap();
    assert_eq!(format!("{}", spec), "abcd,def->abcef");
}

#[test]
fn test_parse_missing_arrow_is_malformed() {
    let err = parse_spec("abcd,def").unwrap_err();
    assert!(matches!(err, EinsumError::MalformedSpec { .. }));
}

#[test]
fn test_parse_empty_string_is_malformed() {
    let err = parse_spec("").unwrap_err();
    assert!(matches!(err, EinsumError::MalformedSpec { .. }));
}

#[test]
fn test_parse_output_is_mandatory() {
    let err = parse_spec("ij,jk->").unwrap_err();
    assert_eq!(err, EinsumError::EmptyOutput);
}

#[test]
fn test_parse_exactly_two_operands() {
    assert_eq!(
        parse_spec("a,b,c->abc").unwrap_err(),
        EinsumError::UnsupportedArity { count: 3 }
    );
    assert_eq!(
        parse_spec("ij->ji").unwrap_err(),
        EinsumError::UnsupportedArity { count: 1 }
    );
}

#[test]
fn test_parse_labels_are_opaque_symbols() {
    let spec = parse_spec("x7,7y->xy").unwrap();
    assert!(spec.left().contains('7'));
    assert_eq!(spec.left().position('7'), Some(1));
}

#[test]
fn test_parse_duplicate_labels_survive_parsing() {
    // The parser only splits; the planner rejects the duplicate.
    let spec = parse_spec("ii,jk->jk").unwrap();
    assert_eq!(spec.left().count('i'), 2);
}
