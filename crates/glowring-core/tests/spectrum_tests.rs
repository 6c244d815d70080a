// Host-side tests for spectrum frame normalization.

use glowring_core::SpectrumFrame;

#[test]
fn amplitude_normalizes_bytes_to_unit_range() {
    let bins = [0u8, 51, 102, 255];
    let frame = SpectrumFrame::new(&bins);
    assert_eq!(frame.amplitude(0), 0.0);
    assert!((frame.amplitude(1) - 0.2).abs() < 1e-3);
    assert!((frame.amplitude(2) - 0.4).abs() < 1e-3);
    assert_eq!(frame.amplitude(3), 1.0);
}

#[test]
fn out_of_range_bins_read_as_silence() {
    let bins = [200u8; 4];
    let frame = SpectrumFrame::new(&bins);
    assert_eq!(frame.amplitude(4), 0.0);
    assert_eq!(frame.amplitude(usize::MAX), 0.0);
}

#[test]
fn average_is_mean_of_normalized_bins() {
    let bins = [255u8; 128];
    assert_eq!(SpectrumFrame::new(&bins).average(), 1.0);

    let bins = [0u8; 128];
    assert_eq!(SpectrumFrame::new(&bins).average(), 0.0);

    let mut bins = [0u8; 4];
    bins[0] = 255;
    assert!((SpectrumFrame::new(&bins).average() - 0.25).abs() < 1e-4);
}

#[test]
fn empty_frame_is_silent_with_zero_average() {
    let frame = SpectrumFrame::new(&[]);
    assert!(frame.is_empty());
    assert!(frame.is_silent());
    assert_eq!(frame.average(), 0.0);
}

#[test]
fn silence_detection() {
    assert!(SpectrumFrame::new(&[0, 0, 0]).is_silent());
    assert!(!SpectrumFrame::new(&[0, 1, 0]).is_silent());
}
