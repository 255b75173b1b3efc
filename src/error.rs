//! Error types for subscript parsing, planning, and execution.

use alloc::string::String;

/// Errors that can occur while compiling a subscript spec into a plan, or
/// while executing one.
///
/// Every planning error is a hard failure: no partial plan is ever returned.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum EinsumError {
    /// The spec string does not contain the `->` separator.
    #[cfg_attr(feature = "std", error("malformed spec: {message}"))]
    MalformedSpec { message: String },

    /// The output label group after `->` is empty.
    ///
    /// There is no support for inferring a default output order.
    #[cfg_attr(feature = "std", error("empty output: an output subscript is required after '->'"))]
    EmptyOutput,

    /// The left side of `->` does not split into exactly two operand groups.
    #[cfg_attr(feature = "std", error("unsupported arity: expected 2 operands, got {count}"))]
    UnsupportedArity { count: usize },

    /// A label repeats within a single subscript.
    ///
    /// For operands this means diagonal extraction, which is unsupported; for
    /// the output it would make the permutation ambiguous.
    #[cfg_attr(feature = "std", error("duplicate label '{label}' in subscript '{subscript}'"))]
    DuplicateLabel { label: char, subscript: String },

    /// An output label does not name a free axis of either operand.
    #[cfg_attr(
        feature = "std",
        error("output label '{label}' does not name a free axis of either operand")
    )]
    UnresolvedOutputLabel { label: char },

    /// Output label count differs from the number of free axes.
    #[cfg_attr(
        feature = "std",
        error("output arity mismatch: {expected} free axes, {got} output labels")
    )]
    OutputArityMismatch { expected: usize, got: usize },

    /// Computed contraction-pair count differs from the caller's declaration.
    #[cfg_attr(
        feature = "std",
        error("contraction count mismatch: declared {expected}, computed {got}")
    )]
    ContractionCountMismatch { expected: usize, got: usize },

    /// Computed free-axis count differs from the caller's declared result rank.
    #[cfg_attr(
        feature = "std",
        error("result rank mismatch: declared {expected}, computed {got}")
    )]
    ResultRankMismatch { expected: usize, got: usize },

    /// An operand's rank does not match its subscript length.
    #[cfg_attr(
        feature = "std",
        error("rank mismatch: subscript '{subscript}' expects rank {expected}, tensor has {got}")
    )]
    RankMismatch {
        subscript: String,
        expected: usize,
        got: usize,
    },

    /// Paired axes have unequal extents.
    ///
    /// Detected by the executor when contracting, not by the planner.
    #[cfg_attr(
        feature = "std",
        error(
            "contraction extent mismatch: left axis {left_axis} has extent {left_extent}, \
             right axis {right_axis} has extent {right_extent}"
        )
    )]
    ContractionExtentMismatch {
        left_axis: usize,
        right_axis: usize,
        left_extent: usize,
        right_extent: usize,
    },

    /// A tensor was constructed from a buffer whose length does not match its shape.
    #[cfg_attr(
        feature = "std",
        error("shape/data mismatch: shape holds {expected} elements, buffer holds {got}")
    )]
    ShapeDataMismatch { expected: usize, got: usize },

    /// An axis index handed to the executor is out of bounds for its tensor.
    #[cfg_attr(feature = "std", error("axis {axis} out of bounds for rank {rank}"))]
    AxisOutOfBounds { axis: usize, rank: usize },

    /// A permutation handed to the executor is not valid for the tensor.
    #[cfg_attr(feature = "std", error("invalid permutation: {message}"))]
    InvalidPermutation { message: String },
}

impl EinsumError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedSpec {
            message: message.into(),
        }
    }

    pub fn invalid_permutation(message: impl Into<String>) -> Self {
        Self::InvalidPermutation {
            message: message.into(),
        }
    }
}

/// Result type for einsum planning and execution.
pub type EinsumResult<T> = core::result::Result<T, EinsumError>;
