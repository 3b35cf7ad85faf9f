//! Validated STFT analysis configuration

use crate::error::StftError;
use crate::window::WindowKind;

/// STFT computation mode.
///
/// Closed over the implemented variants; a sliding-DFT mode may be added
/// here if one is ever built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StftMode {
    /// Windowed-FFT analysis: hop, window, transform, one row per frame
    #[default]
    WindowedFft,
}

/// Immutable analysis parameters plus derived framing fields.
///
/// Constructed only through [`StftConfig::new`], which validates the inputs
/// and derives `frame_count` and `transform_size`; an invalid combination
/// never produces a config object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StftConfig {
    hop: usize,
    window_length: usize,
    signal_length: usize,
    window_kind: WindowKind,
    mode: StftMode,
    frame_count: usize,
    transform_size: usize,
}

impl StftConfig {
    /// Validate analysis parameters and derive the framing arithmetic.
    ///
    /// # Errors
    /// * [`StftError::SignalTooShort`] if `window_length > signal_length`
    /// * [`StftError::InvalidHop`] if `hop == 0`
    /// * [`StftError::InvalidFrameCount`] if no complete frame fits
    pub fn new(
        hop: usize,
        window_length: usize,
        signal_length: usize,
        window_kind: WindowKind,
    ) -> Result<Self, StftError> {
        if window_length > signal_length {
            return Err(StftError::SignalTooShort {
                window_length,
                signal_length,
            });
        }
        if hop == 0 {
            return Err(StftError::InvalidHop);
        }

        let frame_count = (signal_length - window_length) / hop + 1;
        // Unreachable after the checks above, verified anyway
        if frame_count == 0 {
            return Err(StftError::InvalidFrameCount);
        }

        let transform_size = window_length.next_power_of_two();

        Ok(Self {
            hop,
            window_length,
            signal_length,
            window_kind,
            mode: StftMode::WindowedFft,
            frame_count,
            transform_size,
        })
    }

    /// Sample advance between consecutive frame start offsets
    pub fn hop(&self) -> usize {
        self.hop
    }

    /// Analysis window length in samples
    pub fn window_length(&self) -> usize {
        self.window_length
    }

    /// Total input signal length in samples
    pub fn signal_length(&self) -> usize {
        self.signal_length
    }

    /// Window function applied to each frame
    pub fn window_kind(&self) -> WindowKind {
        self.window_kind
    }

    pub fn mode(&self) -> StftMode {
        self.mode
    }

    /// Number of frames: `(signal_length - window_length) / hop + 1`
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Zero-padded FFT length: smallest power of two >= `window_length`
    pub fn transform_size(&self) -> usize {
        self.transform_size
    }

    /// Number of non-redundant complex bins per output row
    pub fn num_bins(&self) -> usize {
        self.transform_size / 2
    }

    /// Shape `(frame_count, num_bins)` of the output matrix the caller
    /// must allocate before calling the engine
    pub fn output_dims(&self) -> (usize, usize) {
        (self.frame_count, self.num_bins())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_configuration() {
        let config = StftConfig::new(256, 512, 4096, WindowKind::Hamming).unwrap();

        assert_eq!(config.frame_count(), 15);
        assert_eq!(config.transform_size(), 512);
        assert_eq!(config.num_bins(), 256);
        assert_eq!(config.output_dims(), (15, 256));
        assert_eq!(config.mode(), StftMode::WindowedFft);
    }

    #[test]
    fn test_frame_count_formula() {
        for (hop, win, len, expected) in [
            (1, 4, 4, 1),
            (1, 4, 8, 5),
            (2, 4, 8, 3),
            (100, 256, 1024, 8),
            (512, 512, 4096, 8),
        ] {
            let config = StftConfig::new(hop, win, len, WindowKind::Hanning).unwrap();
            assert_eq!(config.frame_count(), expected, "hop={hop} win={win} len={len}");
            assert!(config.frame_count() >= 1);
        }
    }

    #[test]
    fn test_transform_size_is_next_power_of_two() {
        for (win, expected) in [(2, 2), (3, 4), (500, 512), (512, 512), (513, 1024), (1023, 1024)] {
            let config = StftConfig::new(1, win, 2048, WindowKind::Blackman).unwrap();
            assert_eq!(config.transform_size(), expected);
            assert!(config.transform_size().is_power_of_two());
            assert!(config.transform_size() >= config.window_length());
        }
    }

    #[test]
    fn test_rejects_window_longer_than_signal() {
        assert_eq!(
            StftConfig::new(256, 512, 256, WindowKind::Hamming),
            Err(StftError::SignalTooShort {
                window_length: 512,
                signal_length: 256,
            })
        );
    }

    #[test]
    fn test_rejects_zero_hop() {
        assert_eq!(
            StftConfig::new(0, 512, 4096, WindowKind::Hamming),
            Err(StftError::InvalidHop)
        );
    }
}
