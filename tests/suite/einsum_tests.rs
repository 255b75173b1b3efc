//! End-to-end einsum tests against hand-written loop references.

use einsum_plan::exec::{ContractionExecutor, NaiveExecutor, einsum};
use einsum_plan::plan::Expectations;
use einsum_plan::tensor::NdArray;
use pretty_assertions::assert_eq;

#[test]
fn test_small_contraction_with_permutation() {
    // E[q,p,k,s] = sum_r I[p,q,r,s] * D[r,k]
    let i = NdArray::from_fn(&[2, 2, 2, 2], |x| (x[0] + x[1] + x[2] + x[3]) as i32);
    let d = NdArray::from_fn(&[2, 2], |x| (x[0] + x[1]) as i32);

    let result = einsum("pqrs,rk->qpks", &i, &d, Expectations::new(1, 4)).unwrap();
    assert_eq!(result.shape(), [2, 2, 2, 2]);

    let expected = NdArray::from_fn(&[2, 2, 2, 2], |x| {
        let (q, p, k, s) = (x[0], x[1], x[2], x[3]);
        (0..2)
            .map(|r| ((p + q + r + s) * (r + k)) as i32)
            .sum::<i32>()
    });
    assert_eq!(result, expected);
}

#[test]
fn test_canonical_output_no_permutation() {
    // E[a,b,c,e,f] = sum_d I[a,b,c,d] * D[d,e,f]
    let n = 5;
    let i = NdArray::from_fn(&[n, n, n, n], |x| (x[0] + x[1] + x[2] + x[3]) as i64);
    let d = NdArray::from_fn(&[n, n, n], |x| (x[0] + x[1] + x[2]) as i64);

    let result = einsum("abcd,def->abcef", &i, &d, Expectations::new(1, 5)).unwrap();
    assert_eq!(result.shape(), [n, n, n, n, n]);

    let expected = NdArray::from_fn(&[n, n, n, n, n], |x| {
        let (a, b, c, e, f) = (x[0], x[1], x[2], x[3], x[4]);
        (0..n)
            .map(|dd| ((a + b + c + dd) * (dd + e + f)) as i64)
            .sum::<i64>()
    });
    assert_eq!(result, expected);
}

#[test]
fn test_double_contraction() {
    // E[p,q] = sum_{r,s} I[p,r,q,s] * D[r,s]
    let n = 6;
    let i = NdArray::from_fn(&[n, n, n, n], |x| (x[0] + x[1] + x[2] + x[3]) as f64);
    let d = NdArray::from_fn(&[n, n], |x| (x[0] + x[1]) as f64);

    let result = einsum("prqs,rs->pq", &i, &d, Expectations::new(2, 2)).unwrap();
    assert_eq!(result.shape(), [n, n]);

    let expected = NdArray::from_fn(&[n, n], |x| {
        let (p, q) = (x[0], x[1]);
        let mut acc = 0.0;
        for r in 0..n {
            for s in 0..n {
                acc += (p + r + q + s) as f64 * (r + s) as f64;
            }
        }
        acc
    });
    assert_eq!(result, expected);
}

#[test]
fn test_matmul_against_reference() {
    let a = NdArray::from_fn(&[3, 4], |x| (2 * x[0] + x[1]) as i32);
    let b = NdArray::from_fn(&[4, 5], |x| (x[0] + 3 * x[1]) as i32);

    let c = einsum("ij,jk->ik", &a, &b, Expectations::new(1, 2)).unwrap();

    let expected = NdArray::from_fn(&[3, 5], |x| {
        (0..4)
            .map(|j| ((2 * x[0] + j) * (j + 3 * x[1])) as i32)
            .sum::<i32>()
    });
    assert_eq!(c, expected);
}

#[test]
fn test_permute_round_trip() {
    // Permuting the canonical result by the resolved permutation yields the
    // same tensor einsum produces for the permuted output spec.
    let a = NdArray::from_fn(&[2, 3], |x| (x[0] * 3 + x[1]) as i32);
    let b = NdArray::from_fn(&[3, 4], |x| (x[0] * 4 + x[1]) as i32);

    let canonical = einsum("ij,jk->ik", &a, &b, Expectations::new(1, 2)).unwrap();
    let transposed = einsum("ij,jk->ki", &a, &b, Expectations::new(1, 2)).unwrap();

    let manual = NaiveExecutor.permute(&canonical, &[1, 0]).unwrap();
    assert_eq!(manual, transposed);
}

#[test]
fn test_executor_rejects_mismatched_contraction_extents() {
    let a = NdArray::<i32>::zeros(&[2, 3]);
    let b = NdArray::<i32>::zeros(&[4, 5]);
    let err = einsum("ij,jk->ik", &a, &b, Expectations::new(1, 2)).unwrap_err();
    assert!(matches!(
        err,
        einsum_plan::error::EinsumError::ContractionExtentMismatch { .. }
    ));
}

#[test]
fn test_display_matches_bracketed_layout() {
    let a = NdArray::from_fn(&[2, 2], |x| (x[0] + x[1]) as i32);
    let b = NdArray::from_fn(&[2, 2], |x| (x[0] * x[1] + 1) as i32);
    let c = einsum("ij,jk->ik", &a, &b, Expectations::new(1, 2)).unwrap();
    // a = [[0 1] [1 2]], b = [[1 1] [1 2]]
    assert_eq!(format!("{}", c), "[[1 2] [3 5]]");
}
