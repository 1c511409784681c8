use std::cmp::Ordering;

use crate::vecmath::reductions;

/// Prominence- and distance-filtered peak detection
///
/// Runs a three-stage pipeline over a finite signal:
///
/// 1. plateau-aware local-maxima extraction,
/// 2. pruning of candidates whose topographic prominence does not exceed
///    `min_prominence` (skipped when the threshold is zero),
/// 3. greedy suppression of candidates closer than `min_distance` to a
///    taller kept peak (skipped when the distance is zero).
///
/// The detector holds no mutable state; one instance may be shared freely.
pub struct PeakDetector {
    min_distance: usize,
    min_prominence: f64,
}

impl PeakDetector {
    /// Create a new peak detector
    ///
    /// # Arguments
    /// * `min_distance` - Candidates within this index distance of a kept
    ///   taller peak are suppressed
    /// * `min_prominence` - Candidates must rise more than this above their
    ///   surrounding terrain to survive
    pub fn new(min_distance: usize, min_prominence: f64) -> Self {
        Self {
            min_distance,
            min_prominence,
        }
    }

    /// Find all peaks in a signal
    ///
    /// Returns the peak indices sorted ascending. Signals shorter than three
    /// samples have no interior and produce an empty result.
    pub fn find(&self, x: &[f64]) -> Vec<usize> {
        if x.len() < 3 {
            return Vec::new();
        }

        let mut peaks = local_maxima(x);

        if self.min_prominence > 0.0 {
            let threshold = self.min_prominence;
            let all = peaks.clone();
            peaks = all
                .iter()
                .enumerate()
                .filter(|&(k, _)| prominence(x, &all, k) > threshold)
                .map(|(_, &p)| p)
                .collect();
        }

        if self.min_distance > 0 && !peaks.is_empty() {
            peaks = enforce_distance(x, &peaks, self.min_distance);
        }

        peaks
    }
}

/// Find peaks with the given minimum distance and prominence
///
/// Convenience wrapper around [`PeakDetector`].
pub fn find_peaks(x: &[f64], min_distance: usize, min_prominence: f64) -> Vec<usize> {
    PeakDetector::new(min_distance, min_prominence).find(x)
}

/// Plateau-aware local maxima, one index per flat top.
///
/// A candidate run starts where the signal strictly rises and is accepted at
/// its first index only if the first differing sample after the plateau is
/// strictly lower. Runs that reach the end of the signal are rejected.
fn local_maxima(x: &[f64]) -> Vec<usize> {
    let n = x.len();
    let mut peaks = Vec::new();

    let mut i = 1;
    while i < n {
        if x[i] > x[i - 1] {
            let mut j = i + 1;
            while j < n && x[j] == x[i] {
                j += 1;
            }
            if j < n && x[j] < x[i] {
                peaks.push(i);
            }
            i = j;
        } else {
            i += 1;
        }
    }

    peaks
}

/// Prominence of `peaks[k]` relative to the other candidates.
///
/// The left/right edges are the nearest strictly taller candidates (or the
/// signal ends); the prominence is the peak height above the higher of the
/// two valley minima towards those edges.
fn prominence(x: &[f64], peaks: &[usize], k: usize) -> f64 {
    let p = peaks[k];

    let left = peaks[..k]
        .iter()
        .rev()
        .copied()
        .find(|&q| x[q] > x[p])
        .unwrap_or(0);
    let right = peaks[k + 1..]
        .iter()
        .copied()
        .find(|&q| x[q] > x[p])
        .unwrap_or(x.len() - 1);

    let left_min = reductions::min(&x[left..p]);
    let right_min = reductions::min(&x[p + 1..=right]);

    x[p] - left_min.max(right_min)
}

/// Greedy minimum-distance suppression favoring taller peaks.
///
/// Candidates are visited by descending height (stable, so equal heights keep
/// left-to-right order) and kept only if they are farther than `min_distance`
/// from every peak already kept.
fn enforce_distance(x: &[f64], peaks: &[usize], min_distance: usize) -> Vec<usize> {
    let mut by_height = peaks.to_vec();
    by_height.sort_by(|&i, &j| x[j].partial_cmp(&x[i]).unwrap_or(Ordering::Equal));

    let mut kept: Vec<usize> = Vec::new();
    for p in by_height {
        if kept.iter().all(|&q| p.abs_diff(q) > min_distance) {
            kept.push(p);
        }
    }

    kept.sort_unstable();
    kept
}
