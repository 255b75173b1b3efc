//! Einsum spec parser.
//!
//! Parses strings like "pqrs,rk->qpks" into a structured [`SubscriptSpec`].

use alloc::vec::Vec;

use super::spec::SubscriptSpec;
use super::subscript::Subscript;
use crate::error::{EinsumError, EinsumResult};

/// Parses an einsum spec string.
///
/// # Grammar
///
/// ```text
/// spec      ::= subscript ',' subscript '->' subscript
/// subscript ::= label+
/// label     ::= any single symbol that is not ',' and not part of '->'
/// ```
///
/// Exactly two operand subscripts and a non-empty output subscript are
/// required; there is no implicit-output form. Labels are opaque single
/// symbols, so no character validation happens beyond locating the two
/// delimiters.
///
/// # Examples
///
/// ```
/// use einsum_plan::notation::parse_spec;
///
/// let spec = parse_spec("pqrs,rk->qpks").unwrap();
/// assert_eq!(spec.left_rank(), 4);
/// assert_eq!(spec.output_rank(), 4);
/// ```
pub fn parse_spec(spec: &str) -> EinsumResult<SubscriptSpec> {
    let spec = spec.trim();

    let Some(arrow_pos) = spec.find("->") else {
        return Err(EinsumError::malformed("missing '->' separator"));
    };

    let inputs_str = &spec[..arrow_pos];
    let output_str = &spec[arrow_pos + 2..];

    if output_str.is_empty() {
        return Err(EinsumError::EmptyOutput);
    }

    let operand_strs: Vec<&str> = inputs_str.split(',').collect();
    if operand_strs.len() != 2 {
        return Err(EinsumError::UnsupportedArity {
            count: operand_strs.len(),
        });
    }

    Ok(SubscriptSpec::new(
        Subscript::from_chars(operand_strs[0].chars()),
        Subscript::from_chars(operand_strs[1].chars()),
        Subscript::from_chars(output_str.chars()),
    ))
}
