//! Einsum spec parsing and representation.
//!
//! Grammar: `<labels_1>,<labels_2>-><labels_out>` with exactly two operand
//! groups and a mandatory, non-empty output group. Each label is one symbol.

mod parser;
mod spec;
mod subscript;

pub use parser::parse_spec;
pub use spec::SubscriptSpec;
pub use subscript::Subscript;
