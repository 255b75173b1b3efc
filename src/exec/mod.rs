//! Plan execution: the executor seam and a reference implementation.

mod adapter;
mod einsum;
mod naive;

pub use adapter::ContractionExecutor;
pub use einsum::{einsum, einsum_with};
pub use naive::NaiveExecutor;
