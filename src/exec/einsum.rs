//! Top-level einsum entry: parse, plan, verify, execute.

use super::adapter::ContractionExecutor;
use super::naive::NaiveExecutor;
use crate::error::EinsumResult;
use crate::notation::parse_spec;
use crate::plan::{Expectations, create_plan};
use crate::tensor::{Element, NdArray};

/// Performs a binary einsum with the reference executor.
///
/// `expected` carries the caller's declared contraction count and result
/// rank; the computed plan is cross-checked against both before any numeric
/// work happens.
///
/// # Examples
///
/// ```
/// use einsum_plan::exec::einsum;
/// use einsum_plan::plan::Expectations;
/// use einsum_plan::tensor::NdArray;
///
/// let a = NdArray::from_vec(&[2, 2], vec![1, 2, 3, 4]).unwrap();
/// let b = NdArray::from_vec(&[2, 2], vec![5, 6, 7, 8]).unwrap();
/// let c = einsum("ij,jk->ik", &a, &b, Expectations::new(1, 2)).unwrap();
/// assert_eq!(c.as_slice(), [19, 22, 43, 50]);
/// ```
pub fn einsum<E: Element>(
    spec_str: &str,
    a: &NdArray<E>,
    b: &NdArray<E>,
    expected: Expectations,
) -> EinsumResult<NdArray<E>> {
    einsum_with(&NaiveExecutor, spec_str, a, b, expected)
}

/// Performs a binary einsum with a caller-supplied executor.
///
/// The plan is handed to the executor as-is: first the raw contraction in
/// canonical axis order, then the permutation step, skipped when the
/// requested output order is already canonical.
pub fn einsum_with<E: Element, X: ContractionExecutor>(
    executor: &X,
    spec_str: &str,
    a: &NdArray<E>,
    b: &NdArray<E>,
    expected: Expectations,
) -> EinsumResult<NdArray<E>> {
    let spec = parse_spec(spec_str)?;
    let plan = create_plan(&spec, a.shape(), b.shape())?;
    plan.verify(&expected)?;

    let canonical = executor.contract(a, b, plan.axis_pairs())?;
    debug_assert_eq!(canonical.shape(), plan.output_shape());

    if plan.is_identity_permutation() {
        Ok(canonical)
    } else {
        executor.permute(&canonical, plan.permutation())
    }
}
