//! Row-major stride bookkeeping and index conversion.

use alloc::vec::Vec;

use smallvec::SmallVec;

/// Index buffer sized for typical tensor ranks without heap allocation.
pub type IndexBuf = SmallVec<[usize; 8]>;

/// Computes row-major strides for a shape.
pub fn row_major_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = Vec::with_capacity(shape.len());
    let mut acc = 1;
    for &extent in shape.iter().rev() {
        strides.push(acc);
        acc *= extent;
    }
    strides.reverse();
    strides
}

/// Converts a multi-index to a linear offset given strides.
pub fn cartesian_to_linear(indices: &[usize], strides: &[usize]) -> usize {
    indices
        .iter()
        .zip(strides.iter())
        .map(|(&i, &s)| i * s)
        .sum()
}

/// Converts a linear offset to a multi-index given a shape.
pub fn linear_to_cartesian(mut linear: usize, shape: &[usize]) -> IndexBuf {
    let mut indices: IndexBuf = SmallVec::from_elem(0, shape.len());
    for (slot, &extent) in indices.iter_mut().zip(shape.iter()).rev() {
        *slot = linear % extent;
        linear /= extent;
    }
    indices
}
