use crate::constants::MAX_BIN_VALUE;

/// One frame of frequency-domain magnitudes, one byte (0-255) per bin.
///
/// Borrowed view over the source's analysis buffer; it exists only for the
/// duration of a single tick and is overwritten on the next snapshot.
#[derive(Clone, Copy, Debug)]
pub struct SpectrumFrame<'a> {
    bins: &'a [u8],
}

impl<'a> SpectrumFrame<'a> {
    pub fn new(bins: &'a [u8]) -> Self {
        Self { bins }
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Magnitude of one bin normalized to [0, 1]. Out-of-range indices read
    /// as silence rather than panicking mid-frame.
    pub fn amplitude(&self, bin: usize) -> f32 {
        self.bins.get(bin).copied().unwrap_or(0) as f32 / MAX_BIN_VALUE
    }

    /// Mean normalized magnitude across all bins; drives the center halo.
    pub fn average(&self) -> f32 {
        if self.bins.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.bins.iter().map(|&b| b as u32).sum();
        sum as f32 / self.bins.len() as f32 / MAX_BIN_VALUE
    }

    pub fn is_silent(&self) -> bool {
        self.bins.iter().all(|&b| b == 0)
    }
}
