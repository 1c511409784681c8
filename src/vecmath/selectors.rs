//! Boolean selectors: mask construction, compaction, and index recovery.

use crate::error::Result;

use super::check_equal_length;

/// Sentinel for [`selector`] start/stop meaning "the last valid index"
pub const END: usize = usize::MAX;

/// Build a boolean mask selecting `start, start + step, ...` up to and
/// including `stop`
///
/// `END` may be passed for `start` or `stop` to mean `n - 1`. Negative steps
/// walk downwards. `start` and `stop` must lie within `0..n` after sentinel
/// resolution, and `step` must be non-zero.
pub fn selector(start: usize, step: isize, stop: usize, n: usize) -> Vec<bool> {
    debug_assert!(step != 0);

    let start = if start == END { n - 1 } else { start } as isize;
    let stop = if stop == END { n - 1 } else { stop } as isize;

    let mut mask = vec![false; n];
    let si = step.signum();
    let mut i = start;
    while i * si <= stop * si {
        mask[i as usize] = true;
        i += step;
    }

    mask
}

/// Indices of the set positions of a mask
pub fn find(mask: &[bool]) -> Vec<usize> {
    mask.iter()
        .enumerate()
        .filter_map(|(i, &b)| b.then_some(i))
        .collect()
}

/// Compact the elements of `x` where the mask is set, preserving order
///
/// # Errors
/// Returns `SignalError::LengthMismatch` if `x` and `mask` differ in length.
pub fn select(x: &[f64], mask: &[bool]) -> Result<Vec<f64>> {
    check_equal_length(x.len(), mask.len())?;
    Ok(x.iter()
        .zip(mask)
        .filter_map(|(&v, &b)| b.then_some(v))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SignalError;

    #[test]
    fn test_selector_with_end_sentinel() {
        let mask = selector(1, 2, END, 10);
        assert_eq!(find(&mask), vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn test_selector_inclusive_stop() {
        let mask = selector(0, 3, 6, 8);
        assert_eq!(find(&mask), vec![0, 3, 6]);
    }

    #[test]
    fn test_selector_negative_step() {
        let mask = selector(END, -2, 0, 7);
        assert_eq!(find(&mask), vec![0, 2, 4, 6]);
    }

    #[test]
    fn test_select() {
        let x = [10.0, 11.0, 12.0, 13.0];
        let mask = [true, false, false, true];
        assert_eq!(select(&x, &mask).unwrap(), vec![10.0, 13.0]);
    }

    #[test]
    fn test_select_length_mismatch() {
        let err = select(&[1.0, 2.0], &[true]).unwrap_err();
        assert!(matches!(err, SignalError::LengthMismatch { .. }));
    }

    #[test]
    fn test_find_empty_mask() {
        assert!(find(&[false, false]).is_empty());
    }
}
