//! Correlation, gradient, and sampling-rate estimation helpers.

use std::cmp::Ordering;

use crate::error::{Result, SignalError};
use crate::time::TimeUnit;
use crate::vecmath::{
    add_scalar,
    reductions::{diff, inner_product, mean, norm_l2},
    select, selector,
};

/// Normalized sample auto-correlation for lags `0..=max_lag`
///
/// The zero-lag value is 1 by construction.
pub fn autocorr(x: &[f64], max_lag: usize) -> Vec<f64> {
    let mu = mean(x);
    let mut r = vec![0.0; max_lag + 1];

    for (l, rl) in r.iter_mut().enumerate() {
        for i in 0..x.len().saturating_sub(l) {
            *rl += (x[i] - mu) * (x[i + l] - mu);
        }
    }

    let r0 = r[0];
    for v in r.iter_mut() {
        *v /= r0;
    }

    r
}

/// Pearson's correlation coefficient of two equal-length signals
///
/// # Errors
/// Returns `SignalError::LengthMismatch` if the signals differ in length.
pub fn corr(x: &[f64], y: &[f64]) -> Result<f64> {
    crate::vecmath::check_equal_length(x.len(), y.len())?;

    let x0 = add_scalar(x, -mean(x));
    let y0 = add_scalar(y, -mean(y));

    Ok(inner_product(&x0, &y0) / (norm_l2(&x0) * norm_l2(&y0)))
}

/// One-dimensional gradient: central differences with one-sided ends
pub fn gradient_1d(x: &[f64]) -> Vec<f64> {
    let n = x.len();
    if n == 0 {
        return Vec::new();
    }

    let mut y = vec![0.0; n];
    if n == 1 {
        return y;
    }

    y[0] = x[1] - x[0];
    for i in 1..n - 1 {
        y[i] = (x[i + 1] - x[i - 1]) / 2.0;
    }
    y[n - 1] = x[n - 1] - x[n - 2];

    y
}

/// Delta coefficients: regression slope over a `2d + 1` sample window
///
/// The signal is extended with `d` replicated edge samples on either side, so
/// the output has the same length as the input.
///
/// # Errors
/// Returns `SignalError::InvalidLength` if `x` is empty.
pub fn delta_coeffs(x: &[f64], d: usize) -> Result<Vec<f64>> {
    debug_assert!(d >= 1);
    if x.is_empty() {
        return Err(SignalError::InvalidLength { needed: 1, actual: 0 });
    }

    let n = x.len();
    let di = d as isize;

    let mut padded = Vec::with_capacity(n + 2 * d);
    padded.extend(std::iter::repeat_n(x[0], d));
    padded.extend_from_slice(x);
    padded.extend(std::iter::repeat_n(x[n - 1], d));

    let norm: f64 = 2.0 * (1..=d).map(|i| (i * i) as f64).sum::<f64>();

    let mut z = vec![0.0; n];
    for (i, zi) in z.iter_mut().enumerate() {
        let mut acc = 0.0;
        for j in -di..=di {
            acc += j as f64 * padded[(i as isize + di + j) as usize];
        }
        *zi = acc / norm;
    }

    Ok(z)
}

/// Estimate the sampling frequency (in Hz) from an array of timestamps
///
/// The timestamps' first differences are sorted and the mean is taken over
/// the central 10th-to-90th percentile span, which keeps isolated gaps and
/// duplicated stamps from skewing the estimate.
///
/// # Errors
/// Returns `SignalError::InvalidLength` for fewer than two timestamps.
pub fn estimate_fs(t: &[f64], unit: TimeUnit) -> Result<f64> {
    if t.len() < 2 {
        return Err(SignalError::InvalidLength {
            needed: 2,
            actual: t.len(),
        });
    }

    let mut dt = diff(t);
    dt.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let n = dt.len();
    let i1 = ((0.1 * n as f64).round() as isize - 1).max(0) as usize;
    let i2 = (((0.9 * n as f64).round() as isize) - 1).clamp(0, n as isize - 1) as usize;

    let central = selector(i1, 1, i2, n);
    let sdt = select(&dt, &central)?;

    Ok(1.0 / unit.to_seconds() / mean(&sdt))
}
