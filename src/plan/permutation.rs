//! Output permutation resolution.
//!
//! The raw contraction primitive produces its result in canonical order:
//! left free axes first, then right free axes, each in original axis order.
//! This module maps that canonical order onto the user-requested output
//! subscript.

use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;

use hashbrown::HashMap;

use super::contraction::FreeAxis;
use crate::error::{EinsumError, EinsumResult};
use crate::notation::Subscript;

/// Resolves the permutation from canonical free-axis order to the requested
/// output order.
///
/// `perm[i]` is the canonical-order position of the axis that must land at
/// output position `i`. An empty vector means the canonical order already
/// matches the output subscript and no reorder step is needed.
///
/// Every output label must name exactly one free axis, and every free axis
/// must be named: the returned permutation is a bijection on
/// `0..free_axis_count`.
pub fn resolve_permutation(
    left_free: &[FreeAxis],
    right_free: &[FreeAxis],
    output: &Subscript,
) -> EinsumResult<Vec<usize>> {
    let canonical: Vec<char> = left_free
        .iter()
        .chain(right_free.iter())
        .map(|f| f.label)
        .collect();

    if output.len() != canonical.len() {
        return Err(EinsumError::OutputArityMismatch {
            expected: canonical.len(),
            got: output.len(),
        });
    }

    if canonical.iter().copied().eq(output.labels()) {
        return Ok(Vec::new());
    }

    let positions: HashMap<char, usize> = canonical
        .iter()
        .enumerate()
        .map(|(pos, &label)| (label, pos))
        .collect();

    let mut perm = Vec::with_capacity(canonical.len());
    let mut used = vec![false; canonical.len()];

    for label in output.labels() {
        let Some(&pos) = positions.get(&label) else {
            return Err(EinsumError::UnresolvedOutputLabel { label });
        };
        if used[pos] {
            return Err(EinsumError::DuplicateLabel {
                label,
                subscript: output.to_string(),
            });
        }
        used[pos] = true;
        perm.push(pos);
    }

    Ok(perm)
}
