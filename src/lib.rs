//! # einsum-plan
//!
//! Einsum subscript compiler and execution planner for binary tensor
//! contractions.
//!
//! Given a spec such as `"pqrs,rk->qpks"` and two operand shapes, the
//! planner determines which axis pairs are summed out, which axes survive
//! in canonical left-then-right order, and the permutation that reorders
//! the canonical result into the requested output layout. Consistency
//! (contraction count, result rank, output labels) is checked before any
//! numeric work happens.
//!
//! ## Pipeline
//!
//! spec string → [`notation::parse_spec`] → [`plan::create_plan`] →
//! [`plan::ContractionPlan::verify`] → [`exec::ContractionExecutor`]
//!
//! ## Example
//!
//! ```
//! use einsum_plan::exec::einsum;
//! use einsum_plan::plan::Expectations;
//! use einsum_plan::tensor::NdArray;
//!
//! let a = NdArray::from_fn(&[2, 2, 2, 2], |i| (i[0] + i[1] + i[2] + i[3]) as i32);
//! let d = NdArray::from_fn(&[2, 2], |i| (i[0] + i[1]) as i32);
//!
//! // one contracted pair (r), rank-4 result in q,p,k,s order
//! let result = einsum("pqrs,rk->qpks", &a, &d, Expectations::new(1, 4)).unwrap();
//! assert_eq!(result.shape(), &[2, 2, 2, 2]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod exec;
pub mod notation;
pub mod plan;
pub mod tensor;

pub use error::{EinsumError, EinsumResult};
pub use exec::{ContractionExecutor, NaiveExecutor, einsum, einsum_with};
pub use notation::{Subscript, SubscriptSpec, parse_spec};
pub use plan::{AxisPair, ContractionPlan, Expectations, FreeAxis, create_plan};
pub use tensor::NdArray;
