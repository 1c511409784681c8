mod test_signals;

use ridgeline::signal_processing::{find_peaks, morphology};
use ridgeline::vecmath;
use ridgeline::PeakDetector;

#[test]
fn test_reference_sequence_regression() {
    let x = [
        0.53767, 1.8339, -2.2588, 0.86217, 0.31877, -1.3077, -0.43359, 0.34262, 3.5784, 2.7694,
        -1.3499, 3.0349, 0.7254, -0.063055, 0.71474, -0.20497, -0.12414, 1.4897, 1.409, 1.4172,
    ];
    assert_eq!(find_peaks(&x, 3, 2.0), vec![3, 8]);
}

#[test]
fn test_degenerate_inputs_yield_no_peaks() {
    let detector = PeakDetector::new(3, 2.0);
    assert!(detector.find(&[]).is_empty());
    assert!(detector.find(&[1.0]).is_empty());
    assert!(detector.find(&[1.0, 2.0]).is_empty());
}

#[test]
fn test_sine_crests_are_found() {
    // Period 40 puts a crest exactly on samples 10, 50, 90, ... The first
    // crest has no full valley to its left, so its prominence is only ~1.
    let x = test_signals::sine(40, 200);
    let peaks = find_peaks(&x, 5, 0.5);
    assert_eq!(peaks, vec![10, 50, 90, 130, 170]);
}

#[test]
fn test_detector_is_reusable_and_stateless() {
    let detector = PeakDetector::new(5, 0.5);
    let x = test_signals::sine(40, 200);
    let first = detector.find(&x);
    let second = detector.find(&x);
    assert_eq!(first, second);
}

#[test]
fn test_baseline_removal_pipeline() {
    // Pulses riding a slow drift: the opening tracks the drift, the
    // subtraction exposes the pulses, and the detector recovers them.
    let n = 120;
    let drift = test_signals::ramp(0.01, n);
    let pulses = test_signals::pulse_train(15, 30, 2.0, n);
    let x = test_signals::mix(&drift, &pulses);

    let baseline = morphology::open(&x, 5);
    let detrended = vecmath::subtract(&x, &baseline).unwrap();

    let peaks = find_peaks(&detrended, 10, 1.0);
    assert_eq!(peaks, vec![15, 45, 75, 105]);

    // The baseline itself is pulse-free: no prominent peaks survive there.
    assert!(find_peaks(&baseline, 10, 1.0).is_empty());
}

#[test]
fn test_distance_suppression_keeps_tallest_of_cluster() {
    // A cluster of three close peaks of increasing height plus one far peak.
    let mut x = vec![0.0; 60];
    x[10] = 1.0;
    x[13] = 1.5;
    x[16] = 2.0;
    x[45] = 1.2;
    let peaks = find_peaks(&x, 8, 0.0);
    assert_eq!(peaks, vec![16, 45]);
}
