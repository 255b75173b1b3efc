//! Reference executor: direct multiply-accumulate over dense storage.

use alloc::string::ToString;
use alloc::vec::Vec;

use smallvec::SmallVec;

use super::adapter::ContractionExecutor;
use crate::error::{EinsumError, EinsumResult};
use crate::plan::AxisPair;
use crate::tensor::{
    Element, IndexBuf, NdArray, cartesian_to_linear, linear_to_cartesian, row_major_strides,
};

/// Single-threaded executor that walks every output element and sums over
/// the contracted extents.
///
/// O(result_len * contracted_len) multiply-adds; intended as the correctness
/// baseline, not as a fast backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveExecutor;

impl ContractionExecutor for NaiveExecutor {
    fn contract<E: Element>(
        &self,
        a: &NdArray<E>,
        b: &NdArray<E>,
        axis_pairs: &[AxisPair],
    ) -> EinsumResult<NdArray<E>> {
        for pair in axis_pairs {
            let left_extent = extent(a, pair.left)?;
            let right_extent = extent(b, pair.right)?;
            if left_extent != right_extent {
                return Err(EinsumError::ContractionExtentMismatch {
                    left_axis: pair.left,
                    right_axis: pair.right,
                    left_extent,
                    right_extent,
                });
            }
        }

        let a_free = uncontracted_axes(a.rank(), axis_pairs.iter().map(|p| p.left));
        let b_free = uncontracted_axes(b.rank(), axis_pairs.iter().map(|p| p.right));

        let out_shape: Vec<usize> = a_free
            .iter()
            .map(|&axis| a.shape()[axis])
            .chain(b_free.iter().map(|&axis| b.shape()[axis]))
            .collect();
        let contracted_shape: IndexBuf =
            axis_pairs.iter().map(|p| a.shape()[p.left]).collect();
        // no pairs means one plain product term per output element; a
        // zero-extent pair means an empty sum
        let contracted_len = if axis_pairs.is_empty() {
            1
        } else {
            contracted_shape.iter().product()
        };

        let a_strides = row_major_strides(a.shape());
        let b_strides = row_major_strides(b.shape());
        let a_data = a.as_slice();
        let b_data = b.as_slice();

        let mut out = NdArray::zeros(&out_shape);
        let out_data = out.as_mut_slice();

        let mut a_idx: IndexBuf = SmallVec::from_elem(0, a.rank());
        let mut b_idx: IndexBuf = SmallVec::from_elem(0, b.rank());

        for (out_linear, slot) in out_data.iter_mut().enumerate() {
            let out_idx = linear_to_cartesian(out_linear, &out_shape);
            for (pos, &axis) in a_free.iter().enumerate() {
                a_idx[axis] = out_idx[pos];
            }
            for (pos, &axis) in b_free.iter().enumerate() {
                b_idx[axis] = out_idx[a_free.len() + pos];
            }

            let mut acc = E::default();
            for contracted_linear in 0..contracted_len {
                let contracted_idx = linear_to_cartesian(contracted_linear, &contracted_shape);
                for (pair, &value) in axis_pairs.iter().zip(contracted_idx.iter()) {
                    a_idx[pair.left] = value;
                    b_idx[pair.right] = value;
                }
                let lhs = a_data[cartesian_to_linear(&a_idx, &a_strides)];
                let rhs = b_data[cartesian_to_linear(&b_idx, &b_strides)];
                acc = acc + lhs * rhs;
            }
            *slot = acc;
        }

        Ok(out)
    }

    fn permute<E: Element>(
        &self,
        tensor: &NdArray<E>,
        perm: &[usize],
    ) -> EinsumResult<NdArray<E>> {
        check_permutation(perm, tensor.rank())?;

        let out_shape: Vec<usize> = perm.iter().map(|&axis| tensor.shape()[axis]).collect();
        let in_strides = row_major_strides(tensor.shape());
        let in_data = tensor.as_slice();

        let mut out = NdArray::zeros(&out_shape);
        let out_data = out.as_mut_slice();

        let mut in_idx: IndexBuf = SmallVec::from_elem(0, perm.len());
        for (out_linear, slot) in out_data.iter_mut().enumerate() {
            let out_idx = linear_to_cartesian(out_linear, &out_shape);
            for (pos, &axis) in perm.iter().enumerate() {
                in_idx[axis] = out_idx[pos];
            }
            *slot = in_data[cartesian_to_linear(&in_idx, &in_strides)];
        }

        Ok(out)
    }
}

fn extent<E: Element>(tensor: &NdArray<E>, axis: usize) -> EinsumResult<usize> {
    tensor
        .shape()
        .get(axis)
        .copied()
        .ok_or(EinsumError::AxisOutOfBounds {
            axis,
            rank: tensor.rank(),
        })
}

fn uncontracted_axes(rank: usize, contracted: impl Iterator<Item = usize>) -> IndexBuf {
    let contracted: IndexBuf = contracted.collect();
    (0..rank).filter(|axis| !contracted.contains(axis)).collect()
}

fn check_permutation(perm: &[usize], rank: usize) -> EinsumResult<()> {
    if perm.len() != rank {
        return Err(EinsumError::invalid_permutation(alloc::format!(
            "permutation length {} does not match rank {}",
            perm.len(),
            rank
        )));
    }
    let mut seen: IndexBuf = SmallVec::from_elem(0, rank);
    for &axis in perm {
        if axis >= rank {
            return Err(EinsumError::AxisOutOfBounds { axis, rank });
        }
        seen[axis] += 1;
        if seen[axis] > 1 {
            return Err(EinsumError::invalid_permutation(
                "axis repeated".to_string(),
            ));
        }
    }
    Ok(())
}
