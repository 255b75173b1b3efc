//! The executor interface consumed by the planner's output.

use crate::error::EinsumResult;
use crate::plan::AxisPair;
use crate::tensor::{Element, NdArray};

/// Executes the numeric half of an einsum call.
///
/// The planner only emits a [`ContractionPlan`](crate::plan::ContractionPlan);
/// an implementation of this trait carries it out. Keeping the seam narrow
/// leaves the planner unit-testable without any tensor runtime and lets the
/// numeric backend be swapped (threaded, BLAS-backed, device-resident).
pub trait ContractionExecutor {
    /// Contracts `a` and `b` over the given axis pairs.
    ///
    /// The result's axis order is canonical: `a`'s free axes in original
    /// order, then `b`'s. Implementations must reject paired axes with
    /// unequal extents; the planner does not check extents.
    fn contract<E: Element>(
        &self,
        a: &NdArray<E>,
        b: &NdArray<E>,
        axis_pairs: &[AxisPair],
    ) -> EinsumResult<NdArray<E>>;

    /// Reorders axes so that output axis `i` is input axis `perm[i]`.
    ///
    /// Called only with a non-empty permutation.
    fn permute<E: Element>(&self, tensor: &NdArray<E>, perm: &[usize])
    -> EinsumResult<NdArray<E>>;
}
