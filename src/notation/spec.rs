//! The parsed subscript spec: two operand subscripts plus one output subscript.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::subscript::Subscript;

/// A complete parsed einsum spec for a binary contraction.
///
/// Immutable once parsed. The same label in both operand subscripts marks an
/// axis pair to be contracted; labels appearing in only one operand are free
/// axes and must all be named by the output subscript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptSpec {
    left: Subscript,
    right: Subscript,
    output: Subscript,
}

impl SubscriptSpec {
    /// Creates a spec from its three subscripts.
    pub fn new(left: Subscript, right: Subscript, output: Subscript) -> Self {
        Self {
            left,
            right,
            output,
        }
    }

    /// Returns the left operand's subscript.
    #[inline]
    pub fn left(&self) -> &Subscript {
        &self.left
    }

    /// Returns the right operand's subscript.
    #[inline]
    pub fn right(&self) -> &Subscript {
        &self.right
    }

    /// Returns the output subscript.
    #[inline]
    pub fn output(&self) -> &Subscript {
        &self.output
    }

    /// Rank the spec expects of the left operand.
    #[inline]
    pub fn left_rank(&self) -> usize {
        self.left.len()
    }

    /// Rank the spec expects of the right operand.
    #[inline]
    pub fn right_rank(&self) -> usize {
        self.right.len()
    }

    /// Rank of the result the output subscript requests.
    #[inline]
    pub fn output_rank(&self) -> usize {
        self.output.len()
    }
}

impl fmt::Display for SubscriptSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}->{}", self.left, self.right, self.output)
    }
}
