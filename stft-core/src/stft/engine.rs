//! STFT engine: framing, windowing, and per-frame real FFT
//!
//! Owns the window table, the realfft plan, and the scratch buffers; writes
//! per-frame spectra into a caller-allocated matrix.

use std::sync::Arc;

use ndarray::ArrayViewMut2;
use num_complex::Complex32;
use realfft::{RealFftPlanner, RealToComplex};

use crate::error::StftError;
use crate::stft::config::StftConfig;
use crate::window::Window;

/// STFT engine for real-valued, fixed-length signals.
///
/// Created from a validated [`StftConfig`]; the window table and all
/// scratch buffers are sized at construction and reused across frames.
/// `compute_into` takes `&mut self`, so a single engine cannot be driven
/// from two threads at once; use one engine per thread if parallelizing.
pub struct StftEngine {
    config: StftConfig,
    window: Window,

    /// Forward real-to-complex FFT plan
    r2c: Arc<dyn RealToComplex<f32>>,

    /// Time-domain frame buffer, `transform_size` samples (zero-padded)
    input: Vec<f32>,

    /// Full FFT output, `transform_size / 2 + 1` bins
    spectrum: Vec<Complex32>,

    /// Scratch space required by the FFT plan
    scratch: Vec<Complex32>,
}

impl StftEngine {
    /// Build an engine for the given configuration.
    ///
    /// Generates the window at `transform_size` (it spans the full
    /// zero-padded frame buffer) and plans the forward FFT. Window
    /// generation failure propagates; nothing is leaked on any path.
    pub fn new(config: StftConfig) -> Result<Self, StftError> {
        let window = Window::generate(config.transform_size(), config.window_kind())?;

        let mut planner = RealFftPlanner::<f32>::new();
        let r2c = planner.plan_fft_forward(config.transform_size());

        let input = r2c.make_input_vec();
        let spectrum = r2c.make_output_vec();
        let scratch = r2c.make_scratch_vec();

        Ok(Self {
            config,
            window,
            r2c,
            input,
            spectrum,
            scratch,
        })
    }

    /// Compute the STFT of `signal` into the caller-allocated `output`.
    ///
    /// `output` must have shape `(frame_count, transform_size / 2)`; each
    /// row `f` receives the non-redundant complex spectrum of the frame
    /// starting at sample `f * hop`. The Hermitian mirror half and the
    /// Nyquist bin are discarded.
    ///
    /// All preconditions are checked before the frame loop: on error, no
    /// row has been written.
    pub fn compute_into(
        &mut self,
        signal: &[f32],
        mut output: ArrayViewMut2<'_, Complex32>,
    ) -> Result<(), StftError> {
        if signal.len() < self.config.signal_length() {
            return Err(StftError::InputTooShort {
                expected: self.config.signal_length(),
                actual: signal.len(),
            });
        }
        let expected = self.config.output_dims();
        if output.dim() != expected {
            return Err(StftError::OutputShapeMismatch {
                expected,
                actual: output.dim(),
            });
        }

        let hop = self.config.hop();
        let win_len = self.config.window_length();
        let num_bins = self.config.num_bins();

        for frame in 0..self.config.frame_count() {
            let start = frame * hop;

            // Zero-fill covers both stale data and the padding beyond win_len
            self.input.fill(0.0);
            self.input[..win_len].copy_from_slice(&signal[start..start + win_len]);

            for (sample, &coeff) in self.input.iter_mut().zip(self.window.coefficients()) {
                *sample *= coeff;
            }

            // Infallible once planned: all buffer lengths are fixed at construction
            self.r2c
                .process_with_scratch(&mut self.input, &mut self.spectrum, &mut self.scratch)
                .expect("FFT processing failed");

            for (dst, &bin) in output
                .row_mut(frame)
                .iter_mut()
                .zip(&self.spectrum[..num_bins])
            {
                *dst = bin;
            }
        }

        Ok(())
    }

    /// Analysis configuration this engine was built from
    pub fn config(&self) -> &StftConfig {
        &self.config
    }

    /// Window coefficient table, length `transform_size`
    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn hop(&self) -> usize {
        self.config.hop()
    }

    pub fn window_length(&self) -> usize {
        self.config.window_length()
    }

    pub fn signal_length(&self) -> usize {
        self.config.signal_length()
    }

    pub fn frame_count(&self) -> usize {
        self.config.frame_count()
    }

    pub fn transform_size(&self) -> usize {
        self.config.transform_size()
    }

    /// Complex bins per output row (`transform_size / 2`)
    pub fn num_bins(&self) -> usize {
        self.config.num_bins()
    }

    /// Shape the caller must allocate for the output matrix
    pub fn output_dims(&self) -> (usize, usize) {
        self.config.output_dims()
    }
}
