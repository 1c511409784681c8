//! Elementwise arithmetic over equal-length arrays and array/scalar pairs.

use crate::error::Result;

use super::check_equal_length;

/// Elementwise sum of two arrays
///
/// # Errors
/// Returns `SignalError::LengthMismatch` if the arrays differ in length.
pub fn add(x: &[f64], y: &[f64]) -> Result<Vec<f64>> {
    check_equal_length(x.len(), y.len())?;
    Ok(x.iter().zip(y).map(|(a, b)| a + b).collect())
}

/// Elementwise sum written to a caller-supplied buffer
pub fn add_into(x: &[f64], y: &[f64], z: &mut [f64]) -> Result<()> {
    check_equal_length(x.len(), y.len())?;
    check_equal_length(x.len(), z.len())?;
    for (zi, (a, b)) in z.iter_mut().zip(x.iter().zip(y)) {
        *zi = a + b;
    }
    Ok(())
}

/// Elementwise difference `x - y`
pub fn subtract(x: &[f64], y: &[f64]) -> Result<Vec<f64>> {
    check_equal_length(x.len(), y.len())?;
    Ok(x.iter().zip(y).map(|(a, b)| a - b).collect())
}

/// Elementwise difference written to a caller-supplied buffer
pub fn subtract_into(x: &[f64], y: &[f64], z: &mut [f64]) -> Result<()> {
    check_equal_length(x.len(), y.len())?;
    check_equal_length(x.len(), z.len())?;
    for (zi, (a, b)) in z.iter_mut().zip(x.iter().zip(y)) {
        *zi = a - b;
    }
    Ok(())
}

/// Elementwise product of two arrays
pub fn multiply(x: &[f64], y: &[f64]) -> Result<Vec<f64>> {
    check_equal_length(x.len(), y.len())?;
    Ok(x.iter().zip(y).map(|(a, b)| a * b).collect())
}

/// Elementwise product written to a caller-supplied buffer
pub fn multiply_into(x: &[f64], y: &[f64], z: &mut [f64]) -> Result<()> {
    check_equal_length(x.len(), y.len())?;
    check_equal_length(x.len(), z.len())?;
    for (zi, (a, b)) in z.iter_mut().zip(x.iter().zip(y)) {
        *zi = a * b;
    }
    Ok(())
}

/// Elementwise quotient `x / y`
///
/// Division by zero follows IEEE 754 (`inf`/`NaN`), it is not checked.
pub fn divide(x: &[f64], y: &[f64]) -> Result<Vec<f64>> {
    check_equal_length(x.len(), y.len())?;
    Ok(x.iter().zip(y).map(|(a, b)| a / b).collect())
}

/// Elementwise quotient written to a caller-supplied buffer
pub fn divide_into(x: &[f64], y: &[f64], z: &mut [f64]) -> Result<()> {
    check_equal_length(x.len(), y.len())?;
    check_equal_length(x.len(), z.len())?;
    for (zi, (a, b)) in z.iter_mut().zip(x.iter().zip(y)) {
        *zi = a / b;
    }
    Ok(())
}

/// Add a scalar to every element
pub fn add_scalar(x: &[f64], v: f64) -> Vec<f64> {
    x.iter().map(|a| a + v).collect()
}

/// Add a scalar to every element in place
pub fn add_scalar_in_place(x: &mut [f64], v: f64) {
    for a in x.iter_mut() {
        *a += v;
    }
}

/// Multiply every element by a scalar
pub fn scale(x: &[f64], v: f64) -> Vec<f64> {
    x.iter().map(|a| a * v).collect()
}

/// Multiply every element by a scalar in place
pub fn scale_in_place(x: &mut [f64], v: f64) {
    for a in x.iter_mut() {
        *a *= v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SignalError;

    #[test]
    fn test_add() {
        let z = add(&[1.0, 2.0, 3.0], &[10.0, 20.0, 30.0]).unwrap();
        assert_eq!(z, vec![11.0, 22.0, 33.0]);
    }

    #[test]
    fn test_add_length_mismatch() {
        let err = add(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(err, SignalError::LengthMismatch { .. }));
    }

    #[test]
    fn test_subtract_into() {
        let mut z = [0.0; 3];
        subtract_into(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0], &mut z).unwrap();
        assert_eq!(z, [4.0, 3.0, 2.0]);
    }

    #[test]
    fn test_subtract_into_bad_output_buffer() {
        let mut z = [0.0; 2];
        let err = subtract_into(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0], &mut z).unwrap_err();
        assert!(matches!(
            err,
            SignalError::LengthMismatch { left: 3, right: 2 }
        ));
    }

    #[test]
    fn test_multiply_divide() {
        let p = multiply(&[2.0, 3.0], &[4.0, 5.0]).unwrap();
        assert_eq!(p, vec![8.0, 15.0]);
        let q = divide(&[8.0, 15.0], &[4.0, 5.0]).unwrap();
        assert_eq!(q, vec![2.0, 3.0]);
    }

    #[test]
    fn test_scalar_variants() {
        assert_eq!(add_scalar(&[1.0, 2.0], 0.5), vec![1.5, 2.5]);
        assert_eq!(scale(&[1.0, 2.0], 3.0), vec![3.0, 6.0]);

        let mut x = [1.0, 2.0];
        add_scalar_in_place(&mut x, 1.0);
        assert_eq!(x, [2.0, 3.0]);
        scale_in_place(&mut x, 2.0);
        assert_eq!(x, [4.0, 6.0]);
    }
}
