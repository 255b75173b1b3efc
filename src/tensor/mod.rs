//! Dense row-major tensor storage.
//!
//! A deliberately small container: the interesting work happens in the
//! planner, and the executor only needs shape metadata, element access, and
//! a flat buffer to accumulate into.

mod strides;

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Add, Mul};

use crate::error::{EinsumError, EinsumResult};

pub use strides::{IndexBuf, cartesian_to_linear, linear_to_cartesian, row_major_strides};

/// Element types the reference executor can contract.
pub trait Element:
    Copy + Default + PartialEq + Add<Output = Self> + Mul<Output = Self> + fmt::Display
{
}

impl<T> Element for T where
    T: Copy + Default + PartialEq + Add<Output = T> + Mul<Output = T> + fmt::Display
{
}

/// An N-dimensional array with row-major layout and runtime-checked rank.
#[derive(Debug, Clone, PartialEq)]
pub struct NdArray<E> {
    shape: Vec<usize>,
    strides: Vec<usize>,
    data: Vec<E>,
}

impl<E: Element> NdArray<E> {
    /// Creates an array of the given shape filled with the default element.
    pub fn zeros(shape: &[usize]) -> Self {
        let len = shape.iter().product();
        Self {
            shape: shape.to_vec(),
            strides: row_major_strides(shape),
            data: vec![E::default(); len],
        }
    }

    /// Creates an array by evaluating `f` at every multi-index.
    pub fn from_fn(shape: &[usize], mut f: impl FnMut(&[usize]) -> E) -> Self {
        let len: usize = shape.iter().product();
        let mut data = Vec::with_capacity(len);
        for linear in 0..len {
            let idx = linear_to_cartesian(linear, shape);
            data.push(f(&idx));
        }
        Self {
            shape: shape.to_vec(),
            strides: row_major_strides(shape),
            data,
        }
    }

    /// Creates an array from a flat row-major buffer.
    pub fn from_vec(shape: &[usize], data: Vec<E>) -> EinsumResult<Self> {
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(EinsumError::ShapeDataMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            shape: shape.to_vec(),
            strides: row_major_strides(shape),
            data,
        })
    }

    /// Returns the shape as an ordered sequence of axis extents.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the number of axes.
    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Returns the total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the element at a multi-index, or `None` out of bounds.
    pub fn get(&self, indices: &[usize]) -> Option<&E> {
        if indices.len() != self.rank()
            || indices.iter().zip(self.shape.iter()).any(|(&i, &e)| i >= e)
        {
            return None;
        }
        self.data.get(cartesian_to_linear(indices, &self.strides))
    }

    /// Returns a mutable element at a multi-index, or `None` out of bounds.
    pub fn get_mut(&mut self, indices: &[usize]) -> Option<&mut E> {
        if indices.len() != self.rank()
            || indices.iter().zip(self.shape.iter()).any(|(&i, &e)| i >= e)
        {
            return None;
        }
        let offset = cartesian_to_linear(indices, &self.strides);
        self.data.get_mut(offset)
    }

    /// Returns the flat row-major buffer.
    pub fn as_slice(&self) -> &[E] {
        &self.data
    }

    /// Returns the flat row-major buffer mutably.
    pub fn as_mut_slice(&mut self) -> &mut [E] {
        &mut self.data
    }
}

impl<E: Element> fmt::Display for NdArray<E> {
    /// Nested bracketed rendering, e.g. `[[0 1] [2 3]]` for a 2x2 array.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn render<E: Element>(
            f: &mut fmt::Formatter<'_>,
            array: &NdArray<E>,
            axis: usize,
            prefix: &mut Vec<usize>,
        ) -> fmt::Result {
            if axis == array.rank() {
                let value = array.get(prefix).ok_or(fmt::Error)?;
                return write!(f, "{}", value);
            }
            write!(f, "[")?;
            for i in 0..array.shape[axis] {
                if i > 0 {
                    write!(f, " ")?;
                }
                prefix.push(i);
                render(f, array, axis + 1, prefix)?;
                prefix.pop();
            }
            write!(f, "]")
        }

        if self.rank() == 0 {
            return write!(f, "{}", self.data[0]);
        }
        render(f, self, 0, &mut Vec::with_capacity(self.rank()))
    }
}
