use crate::error::{Result, SignalError};

/// Streaming IIR filter with caller-supplied coefficients
///
/// Applies the direct-form difference equation
///
/// ```text
/// y[i] = b[0]*x[i] + b[1]*x[i-1] + ... - a[1]*y[i-1] - a[2]*y[i-2] - ...
/// ```
///
/// and carries the trailing input/output samples across `apply` calls, so a
/// signal filtered in several chunks produces the same output as the whole
/// signal filtered at once. `a[0]` is taken as already normalized to 1 and is
/// not divided out.
///
/// An instance owns its history and must be confined to one logical stream;
/// filter design (pole/zero placement) is the caller's business.
pub struct IirFilter {
    b: Vec<f64>,
    a: Vec<f64>,
    x_past: Vec<f64>,
    y_past: Vec<f64>,
}

impl IirFilter {
    /// Create a filter from feed-forward (`b`) and feedback (`a`) coefficients
    ///
    /// The shorter of the two is zero-padded so both have length
    /// `order + 1` where `order = max(len(b), len(a)) - 1`.
    ///
    /// # Errors
    /// Returns `SignalError::InvalidLength` if either coefficient array is
    /// empty.
    pub fn new(b: &[f64], a: &[f64]) -> Result<Self> {
        if b.is_empty() {
            return Err(SignalError::InvalidLength { needed: 1, actual: 0 });
        }
        if a.is_empty() {
            return Err(SignalError::InvalidLength { needed: 1, actual: 0 });
        }

        let coeff_len = b.len().max(a.len());

        let mut bp = vec![0.0; coeff_len];
        bp[..b.len()].copy_from_slice(b);

        let mut ap = vec![0.0; coeff_len];
        ap[..a.len()].copy_from_slice(a);

        Ok(Self {
            b: bp,
            a: ap,
            x_past: vec![0.0; coeff_len - 1],
            y_past: vec![0.0; coeff_len - 1],
        })
    }

    /// Filter order, which is also the number of carried history samples
    pub fn order(&self) -> usize {
        self.x_past.len()
    }

    /// Zero the history buffers, as if freshly constructed
    pub fn reset(&mut self) {
        self.x_past.fill(0.0);
        self.y_past.fill(0.0);
    }

    /// Filter a chunk of samples, allocating the output
    ///
    /// # Errors
    /// Returns `SignalError::InvalidLength` if `x` is empty.
    pub fn apply(&mut self, x: &[f64]) -> Result<Vec<f64>> {
        let mut y = vec![0.0; x.len()];
        self.apply_into(x, &mut y)?;
        Ok(y)
    }

    /// Filter a chunk of samples into a caller-supplied output buffer
    ///
    /// Output positions in the warm-up region (the first `order` samples of
    /// the chunk) draw their negative-lag terms from the history carried over
    /// from the previous call. Chunks shorter than the filter order are
    /// accepted; the history then carries entries from more than one earlier
    /// call.
    ///
    /// # Errors
    /// Returns `SignalError::InvalidLength` if `x` is empty, or
    /// `SignalError::LengthMismatch` if `y` is not the same length as `x`.
    pub fn apply_into(&mut self, x: &[f64], y: &mut [f64]) -> Result<()> {
        if x.is_empty() {
            return Err(SignalError::InvalidLength { needed: 1, actual: 0 });
        }
        if x.len() != y.len() {
            return Err(SignalError::LengthMismatch {
                left: x.len(),
                right: y.len(),
            });
        }

        let n = x.len();
        let p = self.x_past.len();
        let coeff_len = p + 1;

        // Warm-up region: some lags reach behind the start of this chunk and
        // are served from the history buffers (most recent sample last).
        for i in 0..n.min(p) {
            let mut acc = self.b[0] * x[i];
            for j in 1..=i {
                acc += self.b[j] * x[i - j] - self.a[j] * y[i - j];
            }
            for j in (i + 1)..coeff_len {
                acc += self.b[j] * self.x_past[p - j + i] - self.a[j] * self.y_past[p - j + i];
            }
            y[i] = acc;
        }

        // Steady state: every lag resolves within this chunk.
        for i in p..n {
            let mut acc = self.b[0] * x[i];
            for j in 1..coeff_len {
                acc += self.b[j] * x[i - j] - self.a[j] * y[i - j];
            }
            y[i] = acc;
        }

        // The history must end up holding the trailing `p` samples of the
        // extended stream concat(history, chunk).
        if n >= p {
            self.x_past.copy_from_slice(&x[n - p..]);
            self.y_past.copy_from_slice(&y[n - p..]);
        } else {
            self.x_past.copy_within(n.., 0);
            self.x_past[p - n..].copy_from_slice(x);
            self.y_past.copy_within(n.., 0);
            self.y_past[p - n..].copy_from_slice(y);
        }

        Ok(())
    }
}
