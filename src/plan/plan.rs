//! The contraction plan: the validated hand-off from planner to executor.

use alloc::string::ToString;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use super::contraction::{AxisPair, FreeAxis, pair_axes};
use super::permutation::resolve_permutation;
use crate::error::{EinsumError, EinsumResult};
use crate::notation::{Subscript, SubscriptSpec};

/// Caller-declared expectations checked against the computed plan.
///
/// These take the place of the compile-time declarations a statically-typed
/// caller would make: how many axis pairs the contraction should sum out,
/// and what rank the result should have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expectations {
    /// Expected number of contracted axis pairs.
    pub contractions: usize,
    /// Expected rank of the result tensor.
    pub result_rank: usize,
}

impl Expectations {
    pub fn new(contractions: usize, result_rank: usize) -> Self {
        Self {
            contractions,
            result_rank,
        }
    }
}

/// A validated execution plan for one binary contraction.
///
/// Holds only axis indices and extents, never operand data. Built fresh per
/// einsum call and immutable once built; the executor consumes it once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractionPlan {
    axis_pairs: Vec<AxisPair>,
    left_free: Vec<FreeAxis>,
    right_free: Vec<FreeAxis>,
    permutation: Vec<usize>,
    output_shape: Vec<usize>,
}

impl ContractionPlan {
    /// Returns the axis pairs to contract, in contraction order.
    pub fn axis_pairs(&self) -> &[AxisPair] {
        &self.axis_pairs
    }

    /// Returns the left operand's free axes in original order.
    pub fn left_free(&self) -> &[FreeAxis] {
        &self.left_free
    }

    /// Returns the right operand's free axes in original order.
    pub fn right_free(&self) -> &[FreeAxis] {
        &self.right_free
    }

    /// Returns the permutation from canonical order to the requested output
    /// order. Empty means identity: no reorder step is needed.
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    /// Returns true when the requested output order is already canonical.
    pub fn is_identity_permutation(&self) -> bool {
        self.permutation.is_empty()
    }

    /// Returns the expected shape of the raw contraction result, in
    /// canonical order (before any permutation is applied).
    pub fn output_shape(&self) -> &[usize] {
        &self.output_shape
    }

    /// Returns the result shape after the permutation is applied.
    pub fn permuted_shape(&self) -> Vec<usize> {
        if self.permutation.is_empty() {
            self.output_shape.clone()
        } else {
            self.permutation
                .iter()
                .map(|&pos| self.output_shape[pos])
                .collect()
        }
    }

    /// Number of axis pairs summed out.
    pub fn contraction_count(&self) -> usize {
        self.axis_pairs.len()
    }

    /// Rank of the result tensor.
    pub fn result_rank(&self) -> usize {
        self.left_free.len() + self.right_free.len()
    }

    /// Cross-checks the plan against caller-declared expectations.
    ///
    /// All-or-nothing: a plan failing this check must not be executed.
    pub fn verify(&self, expected: &Expectations) -> EinsumResult<()> {
        if self.contraction_count() != expected.contractions {
            return Err(EinsumError::ContractionCountMismatch {
                expected: expected.contractions,
                got: self.contraction_count(),
            });
        }
        if self.result_rank() != expected.result_rank {
            return Err(EinsumError::ResultRankMismatch {
                expected: expected.result_rank,
                got: self.result_rank(),
            });
        }
        Ok(())
    }
}

/// Compiles a subscript spec and the two operand shapes into a plan.
///
/// Pipeline: rank checks, axis pairing, permutation resolution, canonical
/// output-shape computation. Extent equality of paired axes is deliberately
/// not checked here; the executor owns that check.
///
/// # Examples
///
/// ```
/// use einsum_plan::notation::parse_spec;
/// use einsum_plan::plan::create_plan;
///
/// let spec = parse_spec("pqrs,rk->qpks").unwrap();
/// let plan = create_plan(&spec, &[2, 2, 2, 2], &[2, 2]).unwrap();
/// assert_eq!(plan.contraction_count(), 1);
/// assert_eq!(plan.permutation(), &[1, 0, 3, 2]);
/// assert_eq!(plan.output_shape(), &[2, 2, 2, 2]);
/// ```
pub fn create_plan(
    spec: &SubscriptSpec,
    left_shape: &[usize],
    right_shape: &[usize],
) -> EinsumResult<ContractionPlan> {
    check_rank(spec.left(), left_shape)?;
    check_rank(spec.right(), right_shape)?;

    let map = pair_axes(spec.left(), spec.right())?;
    let permutation = resolve_permutation(&map.left_free, &map.right_free, spec.output())?;

    let output_shape: Vec<usize> = map
        .left_free
        .iter()
        .map(|f| left_shape[f.axis])
        .chain(map.right_free.iter().map(|f| right_shape[f.axis]))
        .collect();

    Ok(ContractionPlan {
        axis_pairs: map.pairs,
        left_free: map.left_free,
        right_free: map.right_free,
        permutation,
        output_shape,
    })
}

fn check_rank(subscript: &Subscript, shape: &[usize]) -> EinsumResult<()> {
    if subscript.len() != shape.len() {
        return Err(EinsumError::RankMismatch {
            subscript: subscript.to_string(),
            expected: subscript.len(),
            got: shape.len(),
        });
    }
    Ok(())
}
