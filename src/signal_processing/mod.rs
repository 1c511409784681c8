pub mod analysis;
pub mod iir;
pub mod morphology;
pub mod peaks;
pub mod spectrum;

pub use analysis::{autocorr, corr, delta_coeffs, estimate_fs, gradient_1d};
pub use iir::IirFilter;
pub use morphology::{dilate, erode, open};
pub use peaks::{PeakDetector, find_peaks};
pub use spectrum::{fft_freqs, hamming};
