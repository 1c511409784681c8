//! Reductions over `f64` slices.
//!
//! Sub-range variants are spelled with slicing at the call site, e.g.
//! `mean(&x[3..10])`.

/// Sum of all elements
pub fn sum(x: &[f64]) -> f64 {
    x.iter().sum()
}

/// Arithmetic mean
pub fn mean(x: &[f64]) -> f64 {
    sum(x) / x.len() as f64
}

/// Variance around the mean
///
/// With `unbiased` set, the sum of squared deviations is divided by `n - 1`
/// instead of `n`.
pub fn var(x: &[f64], unbiased: bool) -> f64 {
    debug_assert!(!x.is_empty());
    let mu = mean(x);
    let ss: f64 = x.iter().map(|v| (v - mu) * (v - mu)).sum();
    let denom = if unbiased { x.len() - 1 } else { x.len() };
    ss / denom as f64
}

/// Standard deviation, biased or unbiased as for [`var`]
pub fn std(x: &[f64], unbiased: bool) -> f64 {
    var(x, unbiased).sqrt()
}

/// Maximum element; `x` must be non-empty
pub fn max(x: &[f64]) -> f64 {
    x[max_idx(x)]
}

/// Index of the maximum element; the first occurrence wins on ties
pub fn max_idx(x: &[f64]) -> usize {
    debug_assert!(!x.is_empty());
    let mut idx = 0;
    for i in 1..x.len() {
        if x[idx] < x[i] {
            idx = i;
        }
    }
    idx
}

/// Minimum element; `x` must be non-empty
pub fn min(x: &[f64]) -> f64 {
    x[min_idx(x)]
}

/// Index of the minimum element; the first occurrence wins on ties
pub fn min_idx(x: &[f64]) -> usize {
    debug_assert!(!x.is_empty());
    let mut idx = 0;
    for i in 1..x.len() {
        if x[idx] > x[i] {
            idx = i;
        }
    }
    idx
}

/// First difference, `y[i] = x[i + 1] - x[i]`, length `n - 1`
pub fn diff(x: &[f64]) -> Vec<f64> {
    x.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Inner product of two equal-length arrays
///
/// Callers guarantee equal lengths; a mismatch is a programming defect, not a
/// runtime condition.
pub fn inner_product(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    x.iter().zip(y).map(|(a, b)| a * b).sum()
}

/// Euclidean norm
pub fn norm_l2(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum::<f64>().sqrt()
}
