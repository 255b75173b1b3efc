//! Axis pairing: which axes are contracted and which survive.

use alloc::string::ToString;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::error::{EinsumError, EinsumResult};
use crate::notation::Subscript;

/// A pair of axis indices, one per operand, sharing the same label.
///
/// Both axes are summed out and removed from the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisPair {
    /// Axis position in the left operand.
    pub left: usize,
    /// Axis position in the right operand.
    pub right: usize,
}

impl AxisPair {
    pub fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }
}

/// An axis that is not contracted and survives into the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeAxis {
    /// Axis position in its operand.
    pub axis: usize,
    /// The label naming this axis.
    pub label: char,
}

impl FreeAxis {
    pub fn new(axis: usize, label: char) -> Self {
        Self { axis, label }
    }
}

/// Result of pairing two operand subscripts: the contracted axis pairs and
/// the free axes of each operand, all in their authoritative order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractionMap {
    /// Axis pairs to contract, ordered by left-axis position.
    pub pairs: Vec<AxisPair>,
    /// Left operand's free axes in original axis order.
    pub left_free: Vec<FreeAxis>,
    /// Right operand's free axes in original axis order.
    pub right_free: Vec<FreeAxis>,
}

/// Pairs the axes of two operand subscripts.
///
/// Every label appearing in both subscripts yields one [`AxisPair`]; pairs
/// are emitted iterating the left subscript in the outer loop, so they are
/// ordered by left-axis position. This exact order is the contraction order
/// handed to the executor.
///
/// A label repeated within a single subscript is rejected up front: the
/// pairing loop would otherwise emit multiple pairs sharing an axis, which
/// the contraction primitive cannot represent (diagonal extraction is
/// unsupported).
pub fn pair_axes(left: &Subscript, right: &Subscript) -> EinsumResult<ContractionMap> {
    if let Some(label) = left.repeated_label() {
        return Err(EinsumError::DuplicateLabel {
            label,
            subscript: left.to_string(),
        });
    }
    if let Some(label) = right.repeated_label() {
        return Err(EinsumError::DuplicateLabel {
            label,
            subscript: right.to_string(),
        });
    }

    let mut pairs = Vec::new();
    for (i, a) in left.labels().enumerate() {
        for (j, b) in right.labels().enumerate() {
            if a == b {
                pairs.push(AxisPair::new(i, j));
            }
        }
    }

    let left_free = free_axes(left, pairs.iter().map(|p| p.left));
    let right_free = free_axes(right, pairs.iter().map(|p| p.right));

    Ok(ContractionMap {
        pairs,
        left_free,
        right_free,
    })
}

/// Collects the axes of `subscript` not contracted away, in original order.
fn free_axes(subscript: &Subscript, contracted: impl Iterator<Item = usize>) -> Vec<FreeAxis> {
    let contracted: Vec<usize> = contracted.collect();
    subscript
        .labels()
        .enumerate()
        .filter(|(axis, _)| !contracted.contains(axis))
        .map(|(axis, label)| FreeAxis::new(axis, label))
        .collect()
}
