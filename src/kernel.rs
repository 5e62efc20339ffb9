//! Elementwise evaluation over scenario vectors.
//!
//! Every analytic in this crate maps `n` equal-length observation slices to one
//! output vector of length `n`. Callers check lengths first
//! (see [`validate_same_len`](crate::validate::validate_same_len)); the kernels
//! here only index.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Below this many scenarios the sequential path is used even with `parallel`.
#[cfg(feature = "parallel")]
const PAR_MIN_LEN: usize = 4096;

/// Evaluate `f` at every index in `0..n`.
#[cfg(not(feature = "parallel"))]
pub(crate) fn elementwise<F>(n: usize, f: F) -> Vec<f64>
where
    F: Fn(usize) -> f64 + Send + Sync,
{
    (0..n).map(f).collect()
}

/// Evaluate `f` at every index in `0..n`, splitting large batches across the
/// rayon pool. Output order matches index order.
#[cfg(feature = "parallel")]
pub(crate) fn elementwise<F>(n: usize, f: F) -> Vec<f64>
where
    F: Fn(usize) -> f64 + Send + Sync,
{
    if n >= PAR_MIN_LEN {
        (0..n).into_par_iter().map(f).collect()
    } else {
        (0..n).map(f).collect()
    }
}
