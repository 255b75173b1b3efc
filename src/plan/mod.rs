//! Contraction planning: axis pairing, output permutation, validation.
//!
//! The planner is a pure function of the parsed spec and the operand shapes.
//! Its product, [`ContractionPlan`], is the only value crossing the boundary
//! to the executor.

mod contraction;
mod permutation;
mod plan;

pub use contraction::{AxisPair, ContractionMap, FreeAxis, pair_axes};
pub use permutation::resolve_permutation;
pub use plan::{ContractionPlan, Expectations, create_plan};
