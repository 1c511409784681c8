//! Vector math over fixed-length `f64` sequences.
//!
//! Elementwise arithmetic, reductions, and boolean selection. Operations that
//! pair two arrays come in an allocating variant and a `*_into` variant that
//! writes to a caller-supplied buffer of equal length.

pub mod elementwise;
pub mod reductions;
pub mod selectors;

pub use elementwise::{
    add, add_into, add_scalar, add_scalar_in_place, divide, divide_into, multiply, multiply_into,
    scale, scale_in_place, subtract, subtract_into,
};
pub use reductions::{diff, inner_product, max, max_idx, mean, min, min_idx, norm_l2, std, sum, var};
pub use selectors::{END, find, select, selector};

use crate::error::{Result, SignalError};

/// Check that two array lengths match, for operations that pair arrays
/// index by index.
pub fn check_equal_length(left: usize, right: usize) -> Result<()> {
    if left == right {
        Ok(())
    } else {
        Err(SignalError::LengthMismatch { left, right })
    }
}
